use std::path::Path;

use tracing::{debug, error, info, instrument, warn};

use crate::config::{StoreConfig, UpdatePolicy};
use crate::domain::{Product, ProductCreate, ProductPatch};
use super::error::ProductError;
use super::file::ProductsFile;

/// CRUD access to a product catalog mirrored to a JSON file.
///
/// The file is the source of truth: reads reload it, and every mutation
/// reloads, applies the change, and rewrites the whole file before returning.
/// `products` holds the last snapshot this store observed. `last_id` is the
/// highest id this instance has handed out, so deleting the newest product
/// never frees its id for reuse.
#[derive(Debug)]
pub struct ProductStore {
    config: StoreConfig,
    file: ProductsFile,
    products: Vec<Product>,
    last_id: u64,
}

impl ProductStore {
    pub fn new(config: StoreConfig) -> Self {
        let file = ProductsFile::new(config.path.clone());
        Self {
            config,
            file,
            products: Vec::new(),
            last_id: 0,
        }
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        Self::new(StoreConfig::new(path.as_ref()))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Snapshot from the last read or write; not refreshed from disk.
    pub fn cached(&self) -> &[Product] {
        &self.products
    }

    /// Validates, checks code uniqueness, assigns an id above every id in the
    /// file and every id this store has issued, and persists.
    #[instrument(fields(code = %params.code), skip(self, params))]
    pub async fn create(&mut self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Processing create request");

        if let Err(e) = params.validate() {
            error!(error = %e, "Validation failed");
            return Err(e);
        }

        let mut products = self.read_products_file().await?;

        if products.iter().any(|p| p.code == params.code) {
            error!("Duplicate product code");
            return Err(ProductError::DuplicateCode(params.code));
        }

        let id = next_id(&products, self.last_id);
        let product = Product::from_create(id, params);
        products.push(product.clone());
        self.save_products_file(products).await?;
        self.last_id = id;

        info!(product_id = id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn list(&mut self) -> Result<Vec<Product>, ProductError> {
        debug!("Processing list request");
        let products = self.read_products_file().await?;
        info!(product_count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(fields(product_id = id), skip(self))]
    pub async fn get_by_id(&mut self, id: u64) -> Result<Product, ProductError> {
        debug!("Processing get request");
        let products = self.read_products_file().await?;

        match products.into_iter().find(|p| p.id == id) {
            Some(product) => {
                info!(title = %product.title, "Product found");
                Ok(product)
            }
            None => {
                debug!("Product not found");
                Err(ProductError::NotFound(id))
            }
        }
    }

    /// Merges `patch` into the stored record. Under [`UpdatePolicy::Strict`] the
    /// merged record is re-validated and its code checked against the others.
    #[instrument(fields(product_id = id), skip(self, patch))]
    pub async fn update(&mut self, id: u64, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Processing update request");
        let mut products = self.read_products_file().await?;

        let Some(index) = products.iter().position(|p| p.id == id) else {
            error!("Product not found for update");
            return Err(ProductError::NotFound(id));
        };

        let mut updated = products[index].clone();
        updated.on_update(patch);

        if let Err(e) = updated.check_storable() {
            error!(error = %e, "Update would write an unstorable record");
            return Err(e);
        }

        if self.config.update_policy == UpdatePolicy::Strict {
            updated.validate()?;
            if products.iter().any(|p| p.id != id && p.code == updated.code) {
                warn!(code = %updated.code, "Update would duplicate a product code");
                return Err(ProductError::DuplicateCode(updated.code));
            }
        }

        products[index] = updated.clone();
        self.save_products_file(products).await?;

        info!("Product updated successfully");
        Ok(updated)
    }

    /// Removes the product with `id` and rewrites the file. Returns the removed
    /// record, or `None` when nothing matched.
    #[instrument(fields(product_id = id), skip(self))]
    pub async fn delete(&mut self, id: u64) -> Result<Option<Product>, ProductError> {
        debug!("Processing delete request");
        let mut products = self.read_products_file().await?;

        let removed = products
            .iter()
            .position(|p| p.id == id)
            .map(|index| products.remove(index));
        self.save_products_file(products).await?;

        match &removed {
            Some(_) => info!("Product deleted successfully"),
            None => debug!("No product to delete"),
        }
        Ok(removed)
    }

    /// Loads the file and refreshes the snapshot.
    pub async fn read_products_file(&mut self) -> Result<Vec<Product>, ProductError> {
        let products = self.file.read().await?;
        self.products = products.clone();
        Ok(products)
    }

    /// Overwrites the file with `products`; the snapshot is only replaced once
    /// the write succeeds.
    pub async fn save_products_file(&mut self, products: Vec<Product>) -> Result<(), ProductError> {
        self.file.save(&products).await?;
        self.products = products;
        Ok(())
    }
}

fn next_id(products: &[Product], last_id: u64) -> u64 {
    products.iter().map(|p| p.id).fold(last_id, u64::max) + 1
}
