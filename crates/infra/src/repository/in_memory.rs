use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use supplierbook_core::{Entity, SupplierId};
use supplierbook_parties::{Supplier, SupplierDetails};

use super::{StoreError, SupplierRepository};

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<SupplierId, Supplier>,
}

/// In-memory supplier store for tests/dev.
///
/// Ids start at 1 and are assigned under the same write lock that inserts the
/// row, so concurrent `add` calls never share an id.
#[derive(Debug, Default)]
pub struct InMemorySupplierRepository {
    inner: RwLock<Inner>,
}

impl InMemorySupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored suppliers.
    pub fn len(&self) -> Result<usize, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn add(&self, details: SupplierDetails) -> Result<Supplier, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        inner.last_id += 1;
        let supplier = Supplier::new(SupplierId::new(inner.last_id), details);
        inner.rows.insert(supplier.id(), supplier.clone());
        Ok(supplier)
    }

    async fn update(&self, supplier: &Supplier) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        match inner.rows.get_mut(&supplier.id()) {
            Some(slot) => {
                *slot = supplier.clone();
                Ok(())
            }
            None => Err(StoreError::Missing(supplier.id())),
        }
    }

    async fn fetch_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Supplier>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.values().cloned().collect())
    }
}
