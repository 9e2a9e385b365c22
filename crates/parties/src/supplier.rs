use thiserror::Error;

use supplierbook_core::{DomainError, Entity, SupplierId};

use crate::category::SupplierCategory;
use crate::registry_id::{self, RegistryId, RegistryIdError};

/// Why supplier details were rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SupplierError {
    #[error(transparent)]
    RegistryId(#[from] RegistryIdError),

    #[error("MEI accepts only numeric registry IDs")]
    CategoryMismatch,

    #[error("supplier name cannot be empty")]
    EmptyName,

    #[error("supplier category cannot be empty")]
    EmptyCategory,
}

impl SupplierError {
    /// Stable machine-readable code (used in API error bodies and logs).
    pub fn code(&self) -> &'static str {
        match self {
            SupplierError::RegistryId(e) => e.code(),
            SupplierError::CategoryMismatch => "category_mismatch",
            SupplierError::EmptyName => "empty_name",
            SupplierError::EmptyCategory => "empty_category",
        }
    }
}

impl From<SupplierError> for DomainError {
    fn from(err: SupplierError) -> Self {
        match err {
            SupplierError::RegistryId(e) => e.into(),
            SupplierError::CategoryMismatch => DomainError::invariant(err.to_string()),
            other => DomainError::validation(other.to_string()),
        }
    }
}

/// Validated supplier attributes (everything except the storage-assigned id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierDetails {
    name: String,
    registry_id: RegistryId,
    category: SupplierCategory,
}

impl SupplierDetails {
    /// Validate raw caller input.
    ///
    /// Order (fail-fast): registry ID length, registry ID characters, category
    /// rule, check digits, then name and category presence.
    pub fn validate(
        name: &str,
        raw_registry_id: &str,
        category: &str,
    ) -> Result<Self, SupplierError> {
        let normalized = registry_id::normalize(raw_registry_id)?;
        let category = SupplierCategory::from_tag(category);

        if let Some(category) = &category {
            if category.requires_numeric_registry_id() && !registry_id::is_numeric(&normalized)
            {
                return Err(SupplierError::CategoryMismatch);
            }
        }

        let registry_id = RegistryId::from_normalized(normalized)?;

        if name.trim().is_empty() {
            return Err(SupplierError::EmptyName);
        }
        let category = category.ok_or(SupplierError::EmptyCategory)?;

        Ok(Self {
            name: name.to_string(),
            registry_id,
            category,
        })
    }

    /// Assemble details from already validated parts (e.g. storage rows).
    ///
    /// Still enforces the category rule so a stored MEI supplier can never
    /// carry an alphanumeric ID.
    pub fn from_parts(
        name: impl Into<String>,
        registry_id: RegistryId,
        category: SupplierCategory,
    ) -> Result<Self, SupplierError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SupplierError::EmptyName);
        }
        if category.requires_numeric_registry_id() && !registry_id.is_numeric() {
            return Err(SupplierError::CategoryMismatch);
        }
        Ok(Self {
            name,
            registry_id,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry_id(&self) -> &RegistryId {
        &self.registry_id
    }

    pub fn category(&self) -> &SupplierCategory {
        &self.category
    }
}

/// A persisted supplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    id: SupplierId,
    details: SupplierDetails,
}

impl Supplier {
    /// Attach a storage-assigned id to validated details.
    pub fn new(id: SupplierId, details: SupplierDetails) -> Self {
        Self { id, details }
    }

    pub fn id_typed(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.details.name()
    }

    pub fn registry_id(&self) -> &RegistryId {
        self.details.registry_id()
    }

    pub fn category(&self) -> &SupplierCategory {
        self.details.category()
    }

    pub fn details(&self) -> &SupplierDetails {
        &self.details
    }

    /// Replace name, registry ID and category. The id is kept.
    pub fn replace_details(&mut self, details: SupplierDetails) {
        self.details = details;
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
