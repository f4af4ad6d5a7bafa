//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two with the
/// same attribute values are the same thing. Derived analytics outputs
/// (alerts, ABC entries, snapshots) are value objects: they have no
/// lifecycle of their own and are recomputed, never mutated in place.
///
/// The trait requires `Clone + PartialEq + Debug` so values can be copied,
/// compared and logged freely.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
