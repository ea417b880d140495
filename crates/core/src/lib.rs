//! `catalog-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, money, the value-object/aggregate traits and the clock seam.

pub mod aggregate;
pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use clock::{Clock, DefaultClock, ManualClock};
pub use entity::Entity;
pub use error::{IdError, MoneyError};
pub use money::{Currency, MINOR_UNITS_PER_UNIT, Money};
pub use value_object::ValueObject;
