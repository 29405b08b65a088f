//! Partial update of a product.

/// Fields to overwrite on an existing product.
///
/// `None` means "leave unchanged". Numeric fields are carried unvalidated
/// (stock as a signed integer) so that out-of-range input from a caller can
/// be reported as an invalid value instead of being unrepresentable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none()
    }
}
