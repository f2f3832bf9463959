use std::sync::Arc;

use tracing::info;

use goldmedal_compute::MedalEngine;
use goldmedal_core::config::{Backend, Config};
use goldmedal_storage::{Dataset, MemoryStore, PgStore};

pub struct AppState {
    pub engine: MedalEngine,
    pub backend: Backend,
    pub cors_origin: String,
}

impl AppState {
    /// Open the configured backend and build the engine over it.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let engine = match config.dataset.backend {
            Backend::Memory => {
                let dataset = Dataset::load(&config.dataset.path)?;
                let store = MemoryStore::new(dataset)?;
                info!(
                    "Memory backend ready: {} countries, {} medals",
                    store.country_count(),
                    store.medal_count()
                );
                MedalEngine::from_store(Arc::new(store))
            }
            Backend::Postgres => {
                let store = PgStore::connect(&config.postgres).await?;
                MedalEngine::from_store(Arc::new(store))
            }
        };

        Ok(Self {
            engine,
            backend: config.dataset.backend,
            cors_origin: config.server.cors_origin.clone(),
        })
    }
}
