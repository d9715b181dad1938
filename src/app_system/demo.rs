use tracing::{error, info, Instrument};

use crate::domain::{ProductCreate, ProductPatch};
use crate::product_store::{ProductError, ProductStore};

/// Walks the store through a full lifecycle and logs each step: list, two
/// creates, lookup, update, delete.
pub async fn run_demo(store: &mut ProductStore) -> Result<(), ProductError> {
    let products = store.list().await?;
    info!(?products, "Initial catalog");

    let span = tracing::info_span!("product_creation");
    async {
        for params in [
            ProductCreate::new("Producto prueba", "Este es un producto de prueba", 200.0, "Sin imagen", "abc123", 25),
            ProductCreate::new("Producto prueba 2", "Este es otro producto de prueba", 250.0, "Sin imagen", "def456", 20),
        ] {
            match store.create(params).await {
                Ok(product) => info!(product_id = product.id, "Created product"),
                // rerunning against an existing file hits the code check
                Err(e @ ProductError::DuplicateCode(_)) => error!(error = %e, "Product not created"),
                Err(e) => return Err(e),
            }
        }
        Ok::<_, ProductError>(())
    }
    .instrument(span)
    .await?;

    let products = store.list().await?;
    info!(?products, "Catalog after creation");

    match store.get_by_id(1).await {
        Ok(product) => info!(?product, "Lookup by id"),
        Err(e @ ProductError::NotFound(_)) => error!(error = %e, "Lookup by id"),
        Err(e) => return Err(e),
    }

    let patch = ProductPatch::default().title("Producto actualizado").price(300.0);
    match store.update(1, patch).await {
        Ok(product) => info!(?product, "Updated product"),
        Err(e @ ProductError::NotFound(_)) => error!(error = %e, "Product not updated"),
        Err(e) => return Err(e),
    }
    let products = store.list().await?;
    info!(?products, "Catalog after update");

    store.delete(1).await?;
    let products = store.list().await?;
    info!(?products, "Catalog after delete");

    Ok(())
}
