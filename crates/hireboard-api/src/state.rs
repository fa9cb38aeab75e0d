//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST
//! API. Services are generic over the repository and listing ports; AppState
//! pins them to the SQLite implementations.

use std::path::PathBuf;
use std::sync::Arc;

use hireboard_core::fetch::FetchOrchestrator;
use hireboard_core::notify::NotificationSink;
use hireboard_core::service::provider::ProviderService;
use hireboard_infra::config::load_global_config;
use hireboard_infra::filesystem::{ensure_data_dir, resolve_data_dir};
use hireboard_infra::sqlite::pool::{database_url, DatabasePool};
use hireboard_infra::sqlite::provider::SqliteProviderRepository;
use hireboard_types::config::GlobalConfig;

pub type ConcreteProviderService = ProviderService<SqliteProviderRepository>;

/// Orchestrator pinned to the SQLite listing service.
pub type ConcreteOrchestrator<N> = FetchOrchestrator<SqliteProviderRepository, N>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub provider_service: Arc<ConcreteProviderService>,
    pub listings: SqliteProviderRepository,
    pub config: GlobalConfig,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state from the resolved data directory.
    pub async fn init() -> anyhow::Result<Self> {
        Self::open(resolve_data_dir()).await
    }

    /// Connect to the database in `data_dir` and wire services.
    pub async fn open(data_dir: PathBuf) -> anyhow::Result<Self> {
        ensure_data_dir(&data_dir).await?;

        let config = load_global_config(&data_dir).await;
        let db_pool = DatabasePool::new(&database_url(&data_dir)).await?;

        let repo = SqliteProviderRepository::new(db_pool.clone());
        let provider_service = ProviderService::new(repo.clone());

        tracing::debug!(data_dir = %data_dir.display(), "application state ready");

        Ok(Self {
            provider_service: Arc::new(provider_service),
            listings: repo,
            config,
            data_dir,
            db_pool,
        })
    }

    /// A fresh browse session reporting failures to `notifier`.
    pub fn orchestrator<N: NotificationSink>(&self, notifier: N) -> ConcreteOrchestrator<N> {
        FetchOrchestrator::new(self.listings.clone(), notifier)
            .with_query_timeout(self.config.query_timeout())
    }
}
