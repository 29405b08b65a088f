use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use stockroom_core::{Entity, InventoryError, InventoryResult};
use stockroom_products::{Product, ProductPatch};

use crate::store::{JsonFileStore, ProductStore};

/// Result of filtering products by supplier name.
#[derive(Debug, Clone, PartialEq)]
pub enum SupplierListing<'a> {
    /// At least one product matched, in insertion order.
    Matches(Vec<&'a Product>),
    /// No product has a supplier with this exact name.
    NoProducts { supplier: String },
}

impl<'a> SupplierListing<'a> {
    /// Matching products; empty for [`SupplierListing::NoProducts`].
    pub fn products(&self) -> &[&'a Product] {
        match self {
            SupplierListing::Matches(products) => products,
            SupplierListing::NoProducts { .. } => &[],
        }
    }
}

/// The product collection plus the store it is loaded from and saved to.
///
/// Invariant: no two products share a code. `add_product` is the only way in
/// besides `load`, and both enforce it.
#[derive(Debug)]
pub struct Inventory<S = JsonFileStore> {
    store: S,
    products: Vec<Product>,
}

impl Inventory<JsonFileStore> {
    /// Empty inventory backed by the JSON file at `filename`.
    ///
    /// Nothing is read until [`Inventory::load`] is called.
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self::with_store(JsonFileStore::new(filename))
    }

    pub fn filename(&self) -> &Path {
        self.store.path()
    }
}

impl<S: ProductStore> Inventory<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            products: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the in-memory collection with the stored one.
    ///
    /// An absent store yields an empty inventory. Any decoding problem,
    /// including two records with the same code, aborts the whole load and
    /// leaves the current collection untouched.
    pub fn load(&mut self) -> InventoryResult<()> {
        let products = match self.store.load() {
            Ok(products) => products.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "inventory load failed");
                return Err(e);
            }
        };

        if let Some(code) = first_duplicate(&products) {
            warn!(code, "inventory load rejected: duplicate product code");
            return Err(InventoryError::corrupt(format!(
                "duplicate product code in stored data: {code}"
            )));
        }

        info!(count = products.len(), "inventory loaded");
        self.products = products;
        Ok(())
    }

    /// Write the whole collection to the store, replacing what was there.
    pub fn save(&self) -> InventoryResult<()> {
        self.store.save(&self.products).inspect_err(|e| {
            warn!(error = %e, "inventory save failed");
        })?;
        info!(count = self.products.len(), "inventory saved");
        Ok(())
    }

    /// Append `product` unless its code is already taken.
    pub fn add_product(&mut self, product: Product) -> InventoryResult<()> {
        if self.find(product.code()).is_some() {
            warn!(code = product.code(), "rejected duplicate product code");
            return Err(InventoryError::duplicate(product.code()));
        }
        debug!(code = product.code(), "product added");
        self.products.push(product);
        Ok(())
    }

    /// Descriptions of every product, in insertion order.
    pub fn list_all(&self) -> Vec<String> {
        self.products.iter().map(Product::describe).collect()
    }

    pub fn find(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == code)
    }

    /// Apply `patch` to the product with `code`.
    ///
    /// Code and supplier are never changed. An invalid value rejects the
    /// whole patch.
    pub fn update(&mut self, code: &str, patch: &ProductPatch) -> InventoryResult<&Product> {
        let Some(product) = self.products.iter_mut().find(|p| p.id() == code) else {
            warn!(code, "update of unknown product");
            return Err(InventoryError::not_found(code));
        };

        product.apply_patch(patch).inspect_err(|e| {
            warn!(code, error = %e, "update rejected");
        })?;

        debug!(code, "product updated");
        Ok(&*product)
    }

    /// Remove and return the product with `code`; the rest keep their order.
    pub fn remove(&mut self, code: &str) -> InventoryResult<Product> {
        let Some(index) = self.products.iter().position(|p| p.id() == code) else {
            warn!(code, "removal of unknown product");
            return Err(InventoryError::not_found(code));
        };

        debug!(code, "product removed");
        Ok(self.products.remove(index))
    }

    /// Sum of `price * stock` over all products.
    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::value).fold(0.0, |acc, v| acc + v)
    }

    pub fn list_by_supplier(&self, supplier_name: &str) -> SupplierListing<'_> {
        let matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.supplier().is_named(supplier_name))
            .collect();

        if matches.is_empty() {
            SupplierListing::NoProducts {
                supplier: supplier_name.to_string(),
            }
        } else {
            SupplierListing::Matches(matches)
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn first_duplicate(products: &[Product]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(products.len());
    products
        .iter()
        .map(Product::code)
        .find(|code| !seen.insert(*code))
}
