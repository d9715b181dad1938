use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::domain::Product;
use super::error::ProductError;

/// JSON array of products on disk. Every save rewrites the whole file.
#[derive(Debug, Clone)]
pub struct ProductsFile {
    path: PathBuf,
}

impl ProductsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the full file. A file that does not exist reads as
    /// an empty collection; every other failure is returned.
    #[instrument(fields(path = %self.path.display()), skip(self))]
    pub async fn read(&self) -> Result<Vec<Product>, ProductError> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Products file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(error = %e, "Failed to read products file");
                return Err(ProductError::storage(&self.path, e));
            }
        };

        let products: Vec<Product> = serde_json::from_str(&data).map_err(|e| {
            warn!(error = %e, "Products file is not valid JSON");
            ProductError::storage(&self.path, format!("invalid products file: {e}"))
        })?;

        debug!(product_count = products.len(), "Products file loaded");
        Ok(products)
    }

    /// Pretty-prints the collection to a sibling temp file and renames it
    /// over the target.
    #[instrument(fields(path = %self.path.display(), product_count = products.len()), skip(self, products))]
    pub async fn save(&self, products: &[Product]) -> Result<(), ProductError> {
        let json = serde_json::to_string_pretty(products)
            .map_err(|e| ProductError::storage(&self.path, format!("failed to encode products: {e}")))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ProductError::storage(parent, e))?;
        }

        let tmp = self.tmp_path();
        if let Err(e) = tokio::fs::write(&tmp, json).await {
            warn!(error = %e, "Failed to write products file");
            return Err(ProductError::storage(&tmp, e));
        }
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            warn!(error = %e, "Failed to replace products file");
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(ProductError::storage(&self.path, e));
        }

        debug!("Products file saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "products.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
