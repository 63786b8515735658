//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Unlike a value object, an entity is defined by its identifier: two entities
/// with the same id are the same entity regardless of attribute values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
