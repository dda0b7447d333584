//! Entity trait: records that keep their identity while their fields change.

/// Anything stored and addressed by an identifier.
///
/// A movie can be renamed or re-rated and is still the same record as long as
/// its id is unchanged.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// True once the record carries an assigned identifier.
    fn has_identity(&self) -> bool;
}
