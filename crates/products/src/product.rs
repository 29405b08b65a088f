use serde::{Deserialize, Deserializer, Serialize};

use stockroom_core::{Entity, InventoryError, InventoryResult};
use stockroom_parties::Supplier;

use crate::patch::ProductPatch;
use crate::price::Price;

/// A sellable item, owning its supplier record.
///
/// `code` and `supplier` are fixed at construction; `name`, `price` and
/// `stock` change only through [`Product::apply_patch`]. Serde field names
/// are the persisted (file) names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "codigo")]
    code: String,
    #[serde(rename = "nombre", deserialize_with = "null_as_empty")]
    name: String,
    #[serde(rename = "precio")]
    price: Price,
    stock: u64,
    #[serde(rename = "proveedor")]
    supplier: Supplier,
}

impl Product {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: Price,
        stock: u64,
        supplier: Supplier,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
            stock,
            supplier,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    pub fn supplier(&self) -> &Supplier {
        &self.supplier
    }

    /// Stock value: `price * stock`.
    pub fn value(&self) -> f64 {
        self.price.amount() * self.stock as f64
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Overwrite the fields present in `patch`.
    ///
    /// All supplied values are validated before anything is written: on error
    /// the product is left exactly as it was.
    pub fn apply_patch(&mut self, patch: &ProductPatch) -> InventoryResult<()> {
        let price = patch.price.map(Price::new).transpose()?;
        let stock = patch.stock.map(validate_stock).transpose()?;

        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] {} - {} € ({} units) | Supplier: {} ({})",
            self.code,
            self.name,
            self.price,
            self.stock,
            self.supplier.name().unwrap_or("n/a"),
            self.supplier.contact().unwrap_or("n/a"),
        )
    }
}

fn validate_stock(stock: i64) -> InventoryResult<u64> {
    u64::try_from(stock)
        .map_err(|_| InventoryError::invalid(format!("stock must be >= 0, got {stock}")))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
