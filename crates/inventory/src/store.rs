//! Product persistence backends.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use stockroom_core::{InventoryError, InventoryResult};
use stockroom_products::Product;

/// Where an inventory's products live between runs.
///
/// A store only moves whole collections; it does not check code uniqueness
/// (the [`Inventory`](crate::Inventory) does, for every store).
pub trait ProductStore {
    /// Read every stored product in order.
    ///
    /// `Ok(None)` means nothing has been stored yet, which is not an error.
    fn load(&self) -> InventoryResult<Option<Vec<Product>>>;

    /// Replace the stored collection with `products`.
    fn save(&self, products: &[Product]) -> InventoryResult<()>;
}

/// JSON array on disk, replaced atomically on every save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the temporary file is created in; must be on the same
    /// filesystem as the target for the rename to be atomic.
    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl ProductStore for JsonFileStore {
    fn load(&self) -> InventoryResult<Option<Vec<Product>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "inventory file absent");
                return Ok(None);
            }
            Err(e) => return Err(InventoryError::io(&self.path, e)),
        };

        let products: Vec<Product> = serde_json::from_slice(&bytes).map_err(|e| {
            InventoryError::corrupt(format!("{}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), count = products.len(), "inventory file read");
        Ok(Some(products))
    }

    fn save(&self, products: &[Product]) -> InventoryResult<()> {
        let dir = self.staging_dir();
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| InventoryError::io(dir, e))?;

        // Keep the mode of the file being replaced (the temp file starts as 0600).
        if let Ok(meta) = fs::metadata(&self.path) {
            if let Err(e) = tmp.as_file().set_permissions(meta.permissions()) {
                warn!(path = %self.path.display(), error = %e, "could not carry over file permissions");
            }
        }

        write_json(tmp.as_file_mut(), products)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| InventoryError::io(tmp.path(), e))?;

        tmp.persist(&self.path)
            .map_err(|e| InventoryError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), count = products.len(), "inventory file written");
        Ok(())
    }
}

/// Pretty JSON with 4-space indentation and a trailing newline. Non-ASCII
/// text is written as UTF-8, not escaped.
fn write_json(file: &mut fs::File, products: &[Product]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    products.serialize(&mut ser)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Option<Vec<Product>>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `products`, verbatim.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: RwLock::new(Some(products)),
        }
    }

    /// Snapshot of what was last saved.
    ///
    /// A poisoned lock is recovered; `save` replaces the whole collection in
    /// one assignment, so the stored value is never half-written.
    pub fn snapshot(&self) -> Option<Vec<Product>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ProductStore for InMemoryProductStore {
    fn load(&self) -> InventoryResult<Option<Vec<Product>>> {
        Ok(self.snapshot())
    }

    fn save(&self, products: &[Product]) -> InventoryResult<()> {
        let mut stored = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *stored = Some(products.to_vec());
        Ok(())
    }
}
