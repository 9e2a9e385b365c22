//! Supplier application service.
//!
//! Sequences validation, normalization and the category rule around the
//! storage collaborator:
//!
//! ```text
//! request
//!   ↓
//! 1. Validate registry ID (length, characters), category rule, check digits
//!   ↓
//! 2. Normalize (uppercase registry ID, canonical category tag)
//!   ↓
//! 3. Persist through SupplierRepository
//!   ↓
//! 4. Map the stored entity to a SupplierResponse
//! ```
//!
//! A validation failure returns before step 3, so the repository never sees an
//! invalid supplier. "Not found" is `Ok(None)`, never an error.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use supplierbook_core::{DomainError, Entity, SupplierId};
use supplierbook_parties::{Supplier, SupplierCategory, SupplierDetails, SupplierError};

use crate::repository::{StoreError, SupplierRepository};

/// Caller-supplied supplier data (raw, not yet validated).
///
/// Missing or `null` fields deserialize as empty strings so they reach the
/// validator and fail with the usual error instead of at the JSON layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Registry ID in any letter case.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub registry_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Supplier as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierResponse {
    pub id: SupplierId,
    pub name: String,
    pub registry_id: String,
    pub category: SupplierCategory,
}

impl From<&Supplier> for SupplierResponse {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id(),
            name: supplier.name().to_string(),
            registry_id: supplier.registry_id().to_string(),
            category: supplier.category().clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was rejected; a client error, never retried.
    #[error(transparent)]
    Validation(#[from] SupplierError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(e) => e.code(),
            ServiceError::Store(_) => "store_error",
        }
    }

    /// Domain view of the failure, if it is a domain failure at all.
    pub fn as_domain_error(&self) -> Option<DomainError> {
        match self {
            ServiceError::Validation(e) => Some(e.clone().into()),
            ServiceError::Store(_) => None,
        }
    }
}

/// Orchestrates supplier writes and reads over a [`SupplierRepository`].
///
/// Holds no state besides the repository handle, so one instance can be
/// shared across requests.
#[derive(Debug, Clone)]
pub struct SupplierService<R> {
    repository: R,
}

impl<R> SupplierService<R>
where
    R: SupplierRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn create(&self, request: SupplierRequest) -> Result<SupplierResponse, ServiceError> {
        let details = Self::validate(&request)?;

        let supplier = self.repository.add(details).await?;
        tracing::info!(
            supplier_id = %supplier.id(),
            category = %supplier.category(),
            "supplier created"
        );
        Ok(SupplierResponse::from(&supplier))
    }

    /// Replace name, registry ID and category of an existing supplier.
    ///
    /// Returns `Ok(None)` when `id` is unknown; the request is not validated in
    /// that case.
    pub async fn update(
        &self,
        id: SupplierId,
        request: SupplierRequest,
    ) -> Result<Option<SupplierResponse>, ServiceError> {
        let Some(mut supplier) = self.repository.fetch_by_id(id).await? else {
            tracing::debug!(supplier_id = %id, "update target not found");
            return Ok(None);
        };

        let details = Self::validate(&request)?;
        supplier.replace_details(details);

        self.repository.update(&supplier).await?;
        tracing::info!(
            supplier_id = %supplier.id(),
            category = %supplier.category(),
            "supplier updated"
        );
        Ok(Some(SupplierResponse::from(&supplier)))
    }

    /// All suppliers, in storage order.
    pub async fn list(&self) -> Result<Vec<SupplierResponse>, ServiceError> {
        let suppliers = self.repository.list().await?;
        Ok(suppliers.iter().map(SupplierResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: SupplierId) -> Result<Option<SupplierResponse>, ServiceError> {
        let supplier = self.repository.fetch_by_id(id).await?;
        if supplier.is_none() {
            tracing::debug!(supplier_id = %id, "supplier not found");
        }
        Ok(supplier.as_ref().map(SupplierResponse::from))
    }

    fn validate(request: &SupplierRequest) -> Result<SupplierDetails, SupplierError> {
        SupplierDetails::validate(&request.name, &request.registry_id, &request.category).map_err(
            |e| {
                tracing::warn!(code = e.code(), error = %e, "supplier rejected");
                e
            },
        )
    }
}
