//! Product-level error model.

use thiserror::Error;

use catalog_core::{IdError, MoneyError};

/// Product name validation failures. Lengths are character counts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("product name cannot be empty")]
    Empty,

    #[error("product name too short: {actual} characters (min {min})")]
    TooShort { min: usize, actual: usize },

    #[error("product name too long: {actual} characters (max {max})")]
    TooLong { max: usize, actual: usize },
}

/// Aggregate guard failures on `Product`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The resulting quantity would be below zero.
    #[error("quantity cannot be negative: {quantity}")]
    NegativeQuantity { quantity: i64 },

    #[error("quantity increase must be positive: {amount}")]
    InvalidQuantityIncrease { amount: i64 },

    #[error("quantity decrease must be positive: {amount}")]
    InvalidQuantityDecrease { amount: i64 },

    /// The resulting quantity does not fit the counter.
    #[error("quantity overflow: {quantity} + {amount}")]
    QuantityOverflow { quantity: i64, amount: i64 },
}

impl ProductError {
    pub fn negative_quantity(quantity: i64) -> Self {
        Self::NegativeQuantity { quantity }
    }
}

/// Any failure raised while building or changing catalog objects.
///
/// Lets application code chain value-object constructors and aggregate
/// operations with `?`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error(transparent)]
    Id(#[from] IdError),

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Product(#[from] ProductError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
