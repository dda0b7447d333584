//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own and is owned by the entity that
/// carries it; two value objects with the same attributes are equal. A movie's
/// director is the canonical example here: dropping the movie drops it too.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
