//! File-backed product catalog: validation rules, the JSON file mirror and
//! the CRUD store.

mod entity;
pub mod error;
pub mod file;
pub mod store;

pub use error::*;
pub use file::ProductsFile;
pub use store::ProductStore;
