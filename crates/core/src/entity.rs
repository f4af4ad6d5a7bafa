//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Inventory records (items, movement log entries) are entities: two
/// records with the same id are the same record, whatever their fields say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
