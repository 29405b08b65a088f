//! Parties domain module (suppliers).
//!
//! Suppliers are plain descriptive records embedded by value in each product;
//! there is no supplier registry and no supplier lifecycle of its own.

pub mod supplier;

pub use supplier::Supplier;
