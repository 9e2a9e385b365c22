//! Service wiring: picks the supplier storage backend from configuration.

use std::sync::Arc;

use supplierbook_infra::{
    AppConfig, InMemorySupplierRepository, PostgresSupplierRepository, StoreError,
    SupplierRepository, SupplierService,
};

/// Storage backend behind the supplier service.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    InMemory,
    Postgres,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageBackend::InMemory => "in_memory",
            StorageBackend::Postgres => "postgres",
        }
    }
}

pub type DynSupplierRepository = Arc<dyn SupplierRepository>;

/// Application services shared by all handlers.
pub struct AppServices {
    suppliers: SupplierService<DynSupplierRepository>,
    backend: StorageBackend,
}

impl AppServices {
    pub fn new(repository: DynSupplierRepository, backend: StorageBackend) -> Self {
        Self {
            suppliers: SupplierService::new(repository),
            backend,
        }
    }

    /// Services over a fresh in-memory store (dev/test).
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemorySupplierRepository::new()),
            StorageBackend::InMemory,
        )
    }

    pub fn suppliers(&self) -> &SupplierService<DynSupplierRepository> {
        &self.suppliers
    }

    pub fn backend(&self) -> StorageBackend {
        self.backend
    }
}

/// Build services from configuration.
///
/// With `DATABASE_URL` set this connects to Postgres and applies the schema;
/// otherwise suppliers live in memory for the lifetime of the process.
pub async fn build_services(config: &AppConfig) -> Result<AppServices, StoreError> {
    match &config.database_url {
        Some(url) => {
            let repo =
                PostgresSupplierRepository::connect(url, config.database_max_connections).await?;
            repo.migrate().await?;
            tracing::info!(backend = "postgres", "supplier storage ready");
            Ok(AppServices::new(Arc::new(repo), StorageBackend::Postgres))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; suppliers are kept in memory only");
            Ok(AppServices::in_memory())
        }
    }
}
