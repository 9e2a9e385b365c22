use serde::{Deserialize, Serialize};

/// Supplier classification tag.
///
/// Tags are matched case-insensitively and always rendered upper-case.
/// Unknown tags are kept as [`SupplierCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SupplierCategory {
    /// Individual micro-entrepreneur.
    Mei,
    /// Individual limited-liability company.
    Eireli,
    Ltda,
    Sa,
    Ei,
    Slu,
    Other(String),
}

impl SupplierCategory {
    /// Parse a tag. Returns `None` for a blank tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_uppercase();
        let category = match tag.as_str() {
            "" => return None,
            "MEI" => Self::Mei,
            "EIRELI" => Self::Eireli,
            "LTDA" => Self::Ltda,
            "SA" => Self::Sa,
            "EI" => Self::Ei,
            "SLU" => Self::Slu,
            _ => Self::Other(tag),
        };
        Some(category)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Mei => "MEI",
            Self::Eireli => "EIRELI",
            Self::Ltda => "LTDA",
            Self::Sa => "SA",
            Self::Ei => "EI",
            Self::Slu => "SLU",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Whether suppliers of this category may only hold numeric registry IDs.
    pub fn requires_numeric_registry_id(&self) -> bool {
        matches!(self, Self::Mei)
    }
}

impl core::fmt::Display for SupplierCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for SupplierCategory {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_tag(&value).ok_or("supplier category cannot be empty")
    }
}

impl From<SupplierCategory> for String {
    fn from(value: SupplierCategory) -> Self {
        match value {
            SupplierCategory::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_case_insensitive() {
        assert_eq!(SupplierCategory::from_tag("mei"), Some(SupplierCategory::Mei));
        assert_eq!(SupplierCategory::from_tag(" Eireli "), Some(SupplierCategory::Eireli));
    }

    #[test]
    fn unknown_tags_are_kept_uppercased() {
        assert_eq!(
            SupplierCategory::from_tag("cooperativa"),
            Some(SupplierCategory::Other("COOPERATIVA".to_string()))
        );
    }

    #[test]
    fn blank_tag_is_rejected() {
        assert_eq!(SupplierCategory::from_tag("   "), None);
        assert!(serde_json::from_str::<SupplierCategory>("\"\"").is_err());
    }

    #[test]
    fn only_mei_requires_numeric_ids() {
        assert!(SupplierCategory::Mei.requires_numeric_registry_id());
        assert!(!SupplierCategory::Eireli.requires_numeric_registry_id());
        assert!(!SupplierCategory::Other("MEI2".into()).requires_numeric_registry_id());
    }

    #[test]
    fn serializes_as_tag_string() {
        let json = serde_json::to_string(&SupplierCategory::Eireli).unwrap();
        assert_eq!(json, "\"EIRELI\"");
        let back: SupplierCategory = serde_json::from_str("\"ltda\"").unwrap();
        assert_eq!(back, SupplierCategory::Ltda);
    }
}
