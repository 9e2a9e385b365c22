//! Supplier storage abstractions.
//!
//! `SupplierService` only depends on the narrow [`SupplierRepository`] trait,
//! so the validation core can run against the in-memory store in tests and
//! against Postgres in production.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use supplierbook_core::SupplierId;
use supplierbook_parties::{Supplier, SupplierDetails};

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemorySupplierRepository;
pub use postgres::PostgresSupplierRepository;

/// Storage failure (never a validation failure).
#[derive(Debug, Error)]
pub enum StoreError {
    /// `update` targeted an id that storage does not hold.
    #[error("supplier {0} does not exist")]
    Missing(SupplierId),

    #[error("storage lock poisoned")]
    Poisoned,

    /// A stored row no longer satisfies the supplier rules.
    #[error("corrupt supplier row {id}: {reason}")]
    Corrupt { id: i64, reason: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn corrupt(id: i64, reason: impl ToString) -> Self {
        Self::Corrupt {
            id,
            reason: reason.to_string(),
        }
    }
}

/// Storage collaborator for suppliers.
///
/// Implementations own their concurrency control. `list` returns suppliers
/// ordered by id.
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Persist new supplier details and return the stored entity with its id.
    async fn add(&self, details: SupplierDetails) -> Result<Supplier, StoreError>;

    /// Overwrite the stored supplier with the same id.
    async fn update(&self, supplier: &Supplier) -> Result<(), StoreError>;

    async fn fetch_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError>;

    async fn list(&self) -> Result<Vec<Supplier>, StoreError>;
}

#[async_trait]
impl<S> SupplierRepository for Arc<S>
where
    S: SupplierRepository + ?Sized,
{
    async fn add(&self, details: SupplierDetails) -> Result<Supplier, StoreError> {
        (**self).add(details).await
    }

    async fn update(&self, supplier: &Supplier) -> Result<(), StoreError> {
        (**self).update(supplier).await
    }

    async fn fetch_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError> {
        (**self).fetch_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<Supplier>, StoreError> {
        (**self).list().await
    }
}
