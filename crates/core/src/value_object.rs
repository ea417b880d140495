//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances with the same attributes are
/// the same value. They are immutable, so every "modifying" operation returns
/// a new instance (see `Money::add`).
///
/// Constructors are fallible and enforce the value's invariants, which means
/// any instance that exists is valid. Aggregates rely on this and do not
/// re-validate value objects they receive.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
