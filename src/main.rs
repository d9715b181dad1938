use tracing::{error, info};

use catalog_store::app_system::{run_demo, setup_tracing};
use catalog_store::{ProductStore, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), String> {
    // A missing .env is fine; real env vars still apply.
    let _ = dotenvy::dotenv();
    setup_tracing();

    let config = StoreConfig::from_env()?;
    info!(path = %config.path.display(), policy = ?config.update_policy, "Starting catalog demo");

    let mut store = ProductStore::new(config);
    if let Err(e) = run_demo(&mut store).await {
        error!(error = %e, "Catalog demo failed");
        return Err(e.to_string());
    }

    info!("Catalog demo completed successfully");
    Ok(())
}
