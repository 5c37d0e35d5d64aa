//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identity is optional: an entity built in memory has none until the store
/// assigns one, and keeps it for the rest of its life.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if one has been assigned.
    fn id(&self) -> Option<Self::Id>;

    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
