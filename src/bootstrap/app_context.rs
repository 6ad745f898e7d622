use std::sync::Arc;

use crate::application::ports::document_repository::DocumentRepository;
use crate::application::ports::document_type_repository::DocumentTypeRepository;
use crate::application::ports::key_value_store::KeyValueStore;
use crate::bootstrap::config::{Config, StorageBackend};
use crate::infrastructure::persistence::repositories::document_repository_kv::KvDocumentRepository;
use crate::infrastructure::persistence::repositories::document_type_repository_kv::KvDocumentTypeRepository;
use crate::infrastructure::storage::{FsKeyValueStore, InMemoryKeyValueStore};

/// Wiring built once at startup and passed to every command handler.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    document_repo: Arc<dyn DocumentRepository>,
    document_type_repo: Arc<dyn DocumentTypeRepository>,
}

impl AppServices {
    pub fn new(
        document_repo: Arc<dyn DocumentRepository>,
        document_type_repo: Arc<dyn DocumentTypeRepository>,
    ) -> Self {
        Self {
            document_repo,
            document_type_repo,
        }
    }

    /// Both repositories share one store, each under its own key.
    pub fn over_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(
            Arc::new(KvDocumentRepository::new(store.clone())),
            Arc::new(KvDocumentTypeRepository::new(store)),
        )
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub async fn build(cfg: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn KeyValueStore> = match cfg.storage_backend {
            StorageBackend::Filesystem => {
                tracing::debug!(data_dir = %cfg.data_dir, "storage_filesystem");
                Arc::new(FsKeyValueStore::open(&cfg.data_dir).await?)
            }
            StorageBackend::Memory => {
                tracing::debug!("storage_memory");
                Arc::new(InMemoryKeyValueStore::new())
            }
        };
        Ok(Self::new(cfg, AppServices::over_store(store)))
    }

    pub fn document_repo(&self) -> Arc<dyn DocumentRepository> {
        self.services.document_repo.clone()
    }

    pub fn document_type_repo(&self) -> Arc<dyn DocumentTypeRepository> {
        self.services.document_type_repo.clone()
    }
}
