//! Entity trait: identity that survives state changes.

/// Something that is the same thing before and after it changes (a product
/// whose price and stock move is still the same product).
pub trait Entity {
    /// Typed identifier, printable for logs and storage keys.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;
}
