//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no storage).

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
