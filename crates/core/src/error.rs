//! Inventory error model.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every failure is returned to the immediate caller; the only condition that
/// is not an error is a missing backing file on load (an empty inventory).
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The persisted file could not be decoded into products.
    #[error("corrupt inventory data: {0}")]
    CorruptData(String),

    /// Reading or writing the backing file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A product with the same code is already present.
    #[error("duplicate product code: {0}")]
    DuplicateCode(String),

    /// No product with the given code exists.
    #[error("product not found: {0}")]
    NotFound(String),

    /// A field value was rejected (e.g. negative price or stock).
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl InventoryError {
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::CorruptData(msg.into())
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn duplicate(code: impl Into<String>) -> Self {
        Self::DuplicateCode(code.into())
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound(code.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }
}
