//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Collections keyed by identity (e.g. the inventory, keyed by product code)
/// rely on `id()` being stable for the entity's whole lifetime.
pub trait Entity {
    /// Identifier type.
    type Id: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
