//! Products domain module.
//!
//! This crate contains the product record, its price value object and the
//! partial-update patch, implemented purely as deterministic domain logic
//! (no IO, no storage).

pub mod patch;
pub mod price;
pub mod product;

pub use patch::ProductPatch;
pub use price::Price;
pub use product::Product;
