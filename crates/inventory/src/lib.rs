//! Inventory module: the product collection, its invariants and persistence.
//!
//! All mutations act on memory only; [`Inventory::save`] is the single point
//! where state reaches disk, as a full atomic overwrite.

pub mod inventory;
pub mod shared;
pub mod store;

pub use inventory::{Inventory, SupplierListing};
pub use shared::SharedInventory;
pub use store::{InMemoryProductStore, JsonFileStore, ProductStore};

pub use stockroom_core::{InventoryError, InventoryResult};
pub use stockroom_parties::Supplier;
pub use stockroom_products::{Price, Product, ProductPatch};
