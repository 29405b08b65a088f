//! Unit price value object.

use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult};

/// Non-negative, finite unit price.
///
/// Persisted as a bare JSON number; decoding a negative or non-finite number
/// fails, so a loaded product always satisfies the invariant.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(amount: f64) -> InventoryResult<Self> {
        if !amount.is_finite() {
            return Err(InventoryError::invalid(format!(
                "price must be a finite number, got {amount}"
            )));
        }
        if amount < 0.0 {
            return Err(InventoryError::invalid(format!(
                "price must be >= 0, got {amount}"
            )));
        }
        // Normalise -0.0 so it never leaks into the file.
        Ok(Self(amount.abs()))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = InventoryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
