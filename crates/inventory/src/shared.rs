//! Thread-safe handle over a single inventory.

use std::sync::{Arc, Mutex, PoisonError};

use crate::inventory::Inventory;
use crate::store::JsonFileStore;

/// Cloneable handle that funnels every operation through one exclusive lock.
///
/// The inventory has no per-record locking or versioning, so the whole
/// collection is the unit of mutual exclusion.
#[derive(Debug)]
pub struct SharedInventory<S = JsonFileStore> {
    inner: Arc<Mutex<Inventory<S>>>,
}

impl<S> Clone for SharedInventory<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> SharedInventory<S> {
    pub fn new(inventory: Inventory<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inventory)),
        }
    }

    /// Run `f` with exclusive access to the inventory.
    ///
    /// A poisoned lock is recovered: inventory operations either complete or
    /// leave the collection unchanged, so the state behind it is consistent.
    pub fn with<R>(&self, f: impl FnOnce(&mut Inventory<S>) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryProductStore;
    use stockroom_core::InventoryError;
    use stockroom_parties::Supplier;
    use stockroom_products::{Price, Product};

    fn product(code: &str) -> Product {
        Product::new(code, "x", Price::new(1.0).unwrap(), 1, Supplier::unknown())
    }

    #[test]
    fn concurrent_adds_of_same_code_admit_exactly_one() {
        let shared = SharedInventory::new(Inventory::with_store(InMemoryProductStore::new()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || shared.with(|inv| inv.add_product(product("P001"))))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let ok = results.iter().filter(|r| r.is_ok()).count();
        let dup = results
            .iter()
            .filter(|r| matches!(r, Err(InventoryError::DuplicateCode(_))))
            .count();

        assert_eq!(ok, 1);
        assert_eq!(dup, 7);
        assert_eq!(shared.with(|inv| inv.len()), 1);
    }

    #[test]
    fn concurrent_adds_of_distinct_codes_all_land() {
        let shared = SharedInventory::new(Inventory::with_store(InMemoryProductStore::new()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                std::thread::spawn(move || shared.with(|inv| inv.add_product(product(&format!("P{i}")))))
            })
            .collect();
        for h in handles {
            h.join().unwrap().unwrap();
        }

        assert_eq!(shared.with(|inv| inv.len()), 8);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let shared = SharedInventory::new(Inventory::with_store(InMemoryProductStore::new()));
        shared.with(|inv| inv.add_product(product("P001"))).unwrap();

        let poisoner = shared.clone();
        let _ = std::thread::spawn(move || {
            poisoner.with(|_| panic!("boom"));
        })
        .join();

        assert_eq!(shared.with(|inv| inv.len()), 1);
    }
}
