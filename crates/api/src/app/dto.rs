use serde::{Deserialize, Serialize};

pub use supplierbook_infra::{SupplierRequest, SupplierResponse};

/// Body of every non-2xx JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine-readable code, e.g. `check_digit_mismatch`.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}
