//! Order service binary
//!
//! Reads configuration (see `ServiceConfig::load`), picks the storage
//! backend, optionally seeds sample orders and serves until SIGTERM/Ctrl+C.

use anyhow::Result;
use orders::config::{ServiceConfig, StorageBackend};
use orders::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("order_service=info,orders=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::load()?;
    tracing::info!(
        bind = %config.bind,
        storage = %config.storage,
        base_path = %config.base_path,
        "Starting order service v{}",
        env!("CARGO_PKG_VERSION")
    );

    let store = open_store(&config).await?;

    if config.seed {
        load_sample_orders(store.as_ref()).await?;
    }

    ServerBuilder::new()
        .with_shared_store(store)
        .with_base_path(config.base_path.clone())
        .serve(&config.bind)
        .await
}

async fn open_store(config: &ServiceConfig) -> Result<Arc<dyn OrderStore>> {
    match config.storage {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryOrderStore::new())),
        StorageBackend::Postgres => open_postgres(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn open_postgres(config: &ServiceConfig) -> Result<Arc<dyn OrderStore>> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("database_url is required for the postgres backend"))?;
    let store = PostgresOrderStore::connect(url, config.max_connections).await?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "postgres"))]
async fn open_postgres(_config: &ServiceConfig) -> Result<Arc<dyn OrderStore>> {
    anyhow::bail!("storage backend 'postgres' requires building with the `postgres` feature")
}
