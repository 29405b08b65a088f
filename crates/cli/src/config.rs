//! Process configuration.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the backing file.
pub const INVENTORY_FILE_VAR: &str = "STOCKROOM_INVENTORY_FILE";

/// Backing file used when nothing else is configured.
pub const DEFAULT_INVENTORY_FILE: &str = "inventario.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file the inventory is loaded from and saved to.
    pub inventory_file: PathBuf,
}

impl Config {
    /// Resolve from the process arguments and environment.
    pub fn from_env() -> Self {
        Self::resolve(std::env::args_os().nth(1), |key| std::env::var_os(key))
    }

    /// First positional argument, then `STOCKROOM_INVENTORY_FILE`, then the
    /// default. Empty values count as unset.
    pub fn resolve(arg: Option<OsString>, lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let inventory_file = arg
            .filter(|v| !v.is_empty())
            .or_else(|| lookup(INVENTORY_FILE_VAR).filter(|v| !v.is_empty()))
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                tracing::debug!(
                    "{INVENTORY_FILE_VAR} not set; using {DEFAULT_INVENTORY_FILE}"
                );
                PathBuf::from(DEFAULT_INVENTORY_FILE)
            });

        Self { inventory_file }
    }
}
