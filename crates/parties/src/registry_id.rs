//! Registry ID value object and check-digit validation.
//!
//! A registry ID is 14 characters long. The first 12 characters are digits or
//! uppercase letters; the last two are numeric check digits derived from the
//! preceding characters with a weighted sum modulo 11.
//!
//! Validation is fail-fast and runs in a fixed order:
//!
//! ```text
//! length (14) -> character class [0-9A-Z] after uppercasing -> check digits
//! ```
//!
//! The first failing stage determines the reported [`RegistryIdError`].

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use supplierbook_core::{DomainError, ValueObject};

/// Total length of a registry ID.
pub const REGISTRY_ID_LEN: usize = 14;

/// Length of the part covered by the first check digit.
pub const REGISTRY_ID_BASE_LEN: usize = 12;

/// Why a candidate registry ID was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryIdError {
    #[error("registry ID must be exactly 14 characters")]
    InvalidLength,

    #[error("registry ID may only contain digits and letters A-Z")]
    InvalidCharacters,

    #[error("registry ID failed check digit verification")]
    CheckDigitMismatch,
}

impl RegistryIdError {
    /// Stable machine-readable code (used in API error bodies and logs).
    pub fn code(&self) -> &'static str {
        match self {
            RegistryIdError::InvalidLength => "invalid_length",
            RegistryIdError::InvalidCharacters => "invalid_characters",
            RegistryIdError::CheckDigitMismatch => "check_digit_mismatch",
        }
    }
}

impl From<RegistryIdError> for DomainError {
    fn from(err: RegistryIdError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// A validated, normalized (uppercase) registry ID.
///
/// The only ways to obtain one run the full validation, so a `RegistryId`
/// always holds 14 characters from `[0-9A-Z]` with correct check digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistryId(String);

impl ValueObject for RegistryId {}

impl RegistryId {
    /// Validate `raw` (any letter case) and return the normalized registry ID.
    pub fn parse(raw: &str) -> Result<Self, RegistryIdError> {
        Self::from_normalized(normalize(raw)?)
    }

    /// Finish validation of a string already returned by [`normalize`].
    pub fn from_normalized(normalized: String) -> Result<Self, RegistryIdError> {
        verify_check_digits(&normalized)?;
        Ok(Self(normalized))
    }

    /// Build a registry ID from a 12-character base by appending the two
    /// computed check digits.
    pub fn from_base(base: &str) -> Result<Self, RegistryIdError> {
        let (first, second) = compute_check_digits(base)?;
        let mut id = base.to_ascii_uppercase();
        id.push(char::from(b'0' + first));
        id.push(char::from(b'0' + second));
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether every character is a decimal digit (the legacy numeric form).
    pub fn is_numeric(&self) -> bool {
        is_numeric(&self.0)
    }
}

impl core::fmt::Display for RegistryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RegistryId {
    type Err = RegistryIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RegistryId {
    type Error = RegistryIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RegistryId> for String {
    fn from(value: RegistryId) -> Self {
        value.0
    }
}

impl AsRef<str> for RegistryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate a candidate registry ID.
///
/// Equivalent to [`RegistryId::parse`]; kept as a free function for callers
/// that only need the verdict.
pub fn validate(raw: &str) -> Result<RegistryId, RegistryIdError> {
    RegistryId::parse(raw)
}

/// Run the length and character-class stages and return the uppercased ID.
///
/// Check digits are *not* verified here; callers that interleave their own
/// rules between the two stages follow up with [`verify_check_digits`].
pub fn normalize(raw: &str) -> Result<String, RegistryIdError> {
    if raw.chars().count() != REGISTRY_ID_LEN {
        return Err(RegistryIdError::InvalidLength);
    }

    let normalized: String = raw.chars().map(|c| c.to_ascii_uppercase()).collect();
    if !normalized.bytes().all(is_registry_byte) {
        return Err(RegistryIdError::InvalidCharacters);
    }

    Ok(normalized)
}

/// Verify both check digits of an already normalized registry ID.
pub fn verify_check_digits(normalized: &str) -> Result<(), RegistryIdError> {
    let bytes = normalized.as_bytes();
    if bytes.len() != REGISTRY_ID_LEN {
        return Err(RegistryIdError::InvalidLength);
    }
    if !bytes.iter().copied().all(is_registry_byte) {
        return Err(RegistryIdError::InvalidCharacters);
    }

    let mut values = [0u32; REGISTRY_ID_LEN];
    for (slot, &b) in values.iter_mut().zip(bytes) {
        *slot = char_value(b);
    }

    if check_digit(&values[..REGISTRY_ID_BASE_LEN]) != values[12] {
        return Err(RegistryIdError::CheckDigitMismatch);
    }
    if check_digit(&values[..REGISTRY_ID_BASE_LEN + 1]) != values[13] {
        return Err(RegistryIdError::CheckDigitMismatch);
    }

    Ok(())
}

/// Compute both check digits for a 12-character base (any letter case).
pub fn compute_check_digits(base: &str) -> Result<(u8, u8), RegistryIdError> {
    if base.chars().count() != REGISTRY_ID_BASE_LEN {
        return Err(RegistryIdError::InvalidLength);
    }
    let upper = base.to_ascii_uppercase();
    if !upper.bytes().all(is_registry_byte) {
        return Err(RegistryIdError::InvalidCharacters);
    }

    let mut values: Vec<u32> = upper.bytes().map(char_value).collect();
    let first = check_digit(&values);
    values.push(first);
    let second = check_digit(&values);

    // Both digits are in 0..=9 by construction.
    Ok((first as u8, second as u8))
}

/// Whether every character of `s` is an ASCII decimal digit.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_registry_byte(b: u8) -> bool {
    b.is_ascii_digit() || b.is_ascii_uppercase()
}

/// Digits map to 0..=9 and letters to their code minus 48 ('A' = 17 .. 'Z' = 42).
fn char_value(b: u8) -> u32 {
    if b.is_ascii_digit() {
        u32::from(b - b'0')
    } else {
        u32::from(b) - 48
    }
}

/// Weighted sum modulo 11, walking left to right with weights 2..=9, wrapping 9 -> 2.
fn check_digit(values: &[u32]) -> u32 {
    let mut sum = 0u32;
    let mut weight = 2u32;
    for &value in values {
        sum += value * weight;
        weight = if weight == 9 { 2 } else { weight + 1 };
    }

    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALPHANUMERIC: &str = "A2345678901242";
    const NUMERIC: &str = "11444777000142";

    #[test]
    fn accepts_valid_alphanumeric_id() {
        let id = RegistryId::parse(ALPHANUMERIC).unwrap();
        assert_eq!(id.as_str(), ALPHANUMERIC);
        assert!(!id.is_numeric());
    }

    #[test]
    fn accepts_valid_numeric_id() {
        let id = RegistryId::parse(NUMERIC).unwrap();
        assert_eq!(id.as_str(), NUMERIC);
        assert!(id.is_numeric());
    }

    #[test]
    fn lowercase_input_is_normalized_to_uppercase() {
        let id = RegistryId::parse("a2345678901242").unwrap();
        assert_eq!(id.as_str(), ALPHANUMERIC);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(RegistryId::parse(""), Err(RegistryIdError::InvalidLength));
        assert_eq!(
            RegistryId::parse("1234567890123"),
            Err(RegistryIdError::InvalidLength)
        );
        assert_eq!(
            RegistryId::parse("A23456789012420"),
            Err(RegistryIdError::InvalidLength)
        );
    }

    #[test]
    fn length_is_checked_before_characters() {
        assert_eq!(RegistryId::parse("@@@"), Err(RegistryIdError::InvalidLength));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(
            RegistryId::parse("A2345@78901242"),
            Err(RegistryIdError::InvalidCharacters)
        );
        assert_eq!(
            RegistryId::parse("11.444.777/000"),
            Err(RegistryIdError::InvalidCharacters)
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 14 characters, 15 bytes: must fail on the character class, not the length.
        assert_eq!(
            RegistryId::parse("A2345É78901242"),
            Err(RegistryIdError::InvalidCharacters)
        );
    }

    #[test]
    fn rejects_wrong_second_check_digit() {
        assert_eq!(
            RegistryId::parse("A2345678901243"),
            Err(RegistryIdError::CheckDigitMismatch)
        );
    }

    #[test]
    fn rejects_wrong_first_check_digit() {
        assert_eq!(
            RegistryId::parse("A2345678901252"),
            Err(RegistryIdError::CheckDigitMismatch)
        );
    }

    #[test]
    fn letter_in_check_digit_position_is_a_mismatch() {
        assert_eq!(
            RegistryId::parse("A234567890124Z"),
            Err(RegistryIdError::CheckDigitMismatch)
        );
    }

    #[test]
    fn uses_left_to_right_weight_walk() {
        // Valid under the reverse (right-to-left) walk, invalid under the wrapping
        // left-to-right walk this validator implements.
        assert_eq!(
            RegistryId::parse("11444777000161"),
            Err(RegistryIdError::CheckDigitMismatch)
        );
    }

    #[test]
    fn computes_check_digits_for_known_bases() {
        assert_eq!(compute_check_digits("A23456789012"), Ok((4, 2)));
        assert_eq!(compute_check_digits("114447770001"), Ok((4, 2)));
        assert_eq!(compute_check_digits("000000000000"), Ok((0, 0)));
        assert_eq!(compute_check_digits("12ABC3450001"), Ok((2, 1)));
    }

    #[test]
    fn compute_check_digits_validates_base() {
        assert_eq!(
            compute_check_digits("A2345678901"),
            Err(RegistryIdError::InvalidLength)
        );
        assert_eq!(
            compute_check_digits("A2345-789012"),
            Err(RegistryIdError::InvalidCharacters)
        );
    }

    #[test]
    fn from_normalized_still_guards_the_invariant() {
        let normalized = normalize("a2345678901242").unwrap();
        assert_eq!(
            RegistryId::from_normalized(normalized).unwrap().as_str(),
            "A2345678901242"
        );
        assert_eq!(
            RegistryId::from_normalized("a2345678901242".to_string()),
            Err(RegistryIdError::InvalidCharacters)
        );
        assert_eq!(
            RegistryId::from_normalized("A2345678901243".to_string()),
            Err(RegistryIdError::CheckDigitMismatch)
        );
    }

    #[test]
    fn from_base_appends_digits() {
        let id = RegistryId::from_base("ab1234567890").unwrap();
        assert_eq!(id.as_str(), "AB123456789037");
        assert_eq!(RegistryId::parse(id.as_str()), Ok(id));
    }

    #[test]
    fn serde_roundtrip_revalidates() {
        let id = RegistryId::parse(ALPHANUMERIC).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{ALPHANUMERIC}\""));

        let back: RegistryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        let bad = serde_json::from_str::<RegistryId>("\"A2345678901243\"");
        assert!(bad.is_err());
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(RegistryIdError::InvalidLength.code(), "invalid_length");
        assert_eq!(RegistryIdError::InvalidCharacters.code(), "invalid_characters");
        assert_eq!(
            RegistryIdError::CheckDigitMismatch.code(),
            "check_digit_mismatch"
        );
    }

    #[test]
    fn converts_into_domain_validation_error() {
        let err: DomainError = RegistryIdError::InvalidLength.into();
        assert_eq!(
            err,
            DomainError::Validation("registry ID must be exactly 14 characters".to_string())
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: any length other than 14 is rejected as InvalidLength.
        #[test]
        fn wrong_length_is_always_invalid_length(
            s in prop_oneof!["[0-9A-Za-z@#-]{0,13}", "[0-9A-Za-z@#-]{15,40}"]
        ) {
            prop_assert_eq!(RegistryId::parse(&s), Err(RegistryIdError::InvalidLength));
        }

        /// Property: a single character outside [0-9A-Za-z] is rejected as InvalidCharacters.
        #[test]
        fn foreign_character_is_always_invalid_characters(
            base in "[0-9A-Za-z]{13}",
            bad in "[^0-9A-Za-z]",
            pos in 0usize..14
        ) {
            let mut chars: Vec<char> = base.chars().collect();
            chars.insert(pos, bad.chars().next().unwrap());
            let candidate: String = chars.into_iter().collect();

            prop_assert_eq!(
                RegistryId::parse(&candidate),
                Err(RegistryIdError::InvalidCharacters)
            );
        }

        /// Property: appending the computed digits to any base yields a valid ID,
        /// regardless of the letter case of the base.
        #[test]
        fn computed_digits_are_accepted(base in "[0-9A-Za-z]{12}") {
            let (first, second) = compute_check_digits(&base).unwrap();
            let candidate = format!("{base}{first}{second}");

            let id = RegistryId::parse(&candidate).unwrap();
            prop_assert_eq!(id.as_str(), candidate.to_ascii_uppercase());
        }

        /// Property: changing either check digit to any other digit is rejected.
        #[test]
        fn corrupted_check_digit_is_rejected(
            base in "[0-9A-Z]{12}",
            which in 0usize..2,
            offset in 1u8..10
        ) {
            let (first, second) = compute_check_digits(&base).unwrap();
            let (first, second) = if which == 0 {
                ((first + offset) % 10, second)
            } else {
                (first, (second + offset) % 10)
            };
            let candidate = format!("{base}{first}{second}");

            prop_assert_eq!(
                RegistryId::parse(&candidate),
                Err(RegistryIdError::CheckDigitMismatch)
            );
        }

        /// Property: re-validating a normalized ID is idempotent.
        #[test]
        fn revalidation_is_idempotent(base in "[0-9A-Za-z]{12}") {
            let id = RegistryId::from_base(&base).unwrap();
            let again = RegistryId::parse(id.as_str()).unwrap();
            prop_assert_eq!(&again, &id);
            prop_assert_eq!(RegistryId::parse(again.as_str()), Ok(id));
        }
    }
}
