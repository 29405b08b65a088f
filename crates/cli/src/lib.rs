//! `stockroom-cli`: interactive front end for a file-backed inventory.
//!
//! The binary is a thin shell: configuration comes from the environment and
//! the menu translates numbered choices into inventory operations.

pub mod config;
pub mod menu;

pub use config::Config;
pub use menu::Menu;
