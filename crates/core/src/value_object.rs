//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. A registry ID is the canonical example in this system:
//! two suppliers quoting the same 14 characters quote the same registry ID.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Constructors are expected to validate, so holding a value
/// object means holding a value that already passed its rules.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
