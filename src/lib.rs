//! # Catalog Store
//!
//! A small product catalog persisted as a pretty-printed JSON array.
//!
//! - **Domain types** - [`Product`], [`ProductCreate`], [`ProductPatch`]
//! - **Store** - [`ProductStore`] with create, list, get, update and delete
//! - **Configuration** - [`StoreConfig`] and the [`UpdatePolicy`] for merges
//!
//! ```no_run
//! use catalog_store::{ProductCreate, ProductStore};
//!
//! # async fn demo() -> Result<(), catalog_store::ProductError> {
//! let mut store = ProductStore::at("./products.json");
//! let product = store
//!     .create(ProductCreate::new("Lamp", "Desk lamp", 25.0, "lamp.png", "LMP-1", 10))
//!     .await?;
//! assert_eq!(store.get_by_id(product.id).await?, product);
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod config;
pub mod domain;
pub mod product_store;


pub use config::{StoreConfig, UpdatePolicy};
pub use domain::{Product, ProductCreate, ProductPatch};
pub use product_store::{ProductError, ProductStore, ProductsFile};
