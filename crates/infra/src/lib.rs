//! Infrastructure layer: storage adapters, application services, config.

pub mod config;
pub mod repository;
pub mod supplier_service;

pub use config::{AppConfig, ConfigError};
pub use repository::{
    InMemorySupplierRepository, PostgresSupplierRepository, StoreError, SupplierRepository,
};
pub use supplier_service::{ServiceError, SupplierRequest, SupplierResponse, SupplierService};
