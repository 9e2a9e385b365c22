//! Entity trait: identity that survives state changes.
//!
//! A supplier keeps its storage-assigned id while its name, registry ID and
//! category are replaced by updates.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
