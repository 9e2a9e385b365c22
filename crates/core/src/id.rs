//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a supplier.
///
/// Assigned by storage when the supplier is first persisted and never changed
/// afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(i64);

impl SupplierId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for SupplierId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<SupplierId> for i64 {
    fn from(value: SupplierId) -> Self {
        value.0
    }
}

impl FromStr for SupplierId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("SupplierId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids() {
        let id: SupplierId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "abc".parse::<SupplierId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("SupplierId")),
            _ => panic!("Expected InvalidId error"),
        }
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&SupplierId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
