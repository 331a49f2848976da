//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalog entities are identified by their name; two entities with the same
/// identifier are the same entity regardless of their other attributes.
pub trait Entity {
    /// Identifier type (a name for every catalog entity).
    type Id: Clone + Ord + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
