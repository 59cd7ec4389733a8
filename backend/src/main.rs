//! Service entry point: tracing, configuration, storage selection, serving.

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use todo_backend::server::{self, AppConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    info!(storage_mode = ?config.storage_mode, "starting todo API");

    let store = server::build_store(&config).await?;
    let http = server::create_server(store, &config)?;
    http.await
}
