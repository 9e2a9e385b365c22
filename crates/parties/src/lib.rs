//! Suppliers domain module.
//!
//! Business rules for suppliers and their registry IDs, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod registry_id;
pub mod supplier;

pub use category::SupplierCategory;
pub use registry_id::{RegistryId, RegistryIdError, compute_check_digits};
pub use supplier::{Supplier, SupplierDetails, SupplierError};
