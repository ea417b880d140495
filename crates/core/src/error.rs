//! Domain error model for the shared value objects.

use thiserror::Error;

use crate::money::Currency;

/// Failure to build an identifier from external input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input is not a syntactically valid UUID.
    #[error("invalid {kind} format {value:?}: {reason}")]
    InvalidFormat {
        kind: &'static str,
        value: String,
        reason: String,
    },
}

impl IdError {
    pub fn invalid_format(
        kind: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidFormat {
            kind,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Money construction and arithmetic failures.
///
/// Amounts are reported in minor units where the failing value is already an
/// integer, and as the raw input otherwise.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoneyError {
    /// A negative amount was given to a constructor.
    #[error("amount cannot be negative: {amount}")]
    NegativeAmount { amount: f64 },

    /// The amount is NaN or infinite.
    #[error("amount must be a finite number: {amount}")]
    NonFiniteAmount { amount: f64 },

    /// The currency code is not in the allow-list.
    #[error("invalid currency {code:?} (allowed: {allowed})")]
    InvalidCurrency { code: String, allowed: String },

    /// Two amounts of different currencies were combined or compared.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: Currency, right: Currency },

    /// A subtraction would produce a negative amount.
    #[error("subtraction result cannot be negative: {minuend} - {subtrahend} (minor units)")]
    NegativeResult { minuend: i64, subtrahend: i64 },

    /// A multiplication was attempted with a negative factor.
    #[error("multiplier cannot be negative: {multiplier}")]
    NegativeMultiplier { multiplier: f64 },

    /// A multiplication was attempted with a NaN or infinite factor.
    #[error("multiplier must be a finite number: {multiplier}")]
    InvalidMultiplier { multiplier: f64 },

    /// The result does not fit into the minor-unit representation.
    #[error("amount overflows the supported range")]
    Overflow,
}

impl MoneyError {
    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrency {
            code: code.into(),
            allowed: Currency::ALL
                .iter()
                .map(|c| c.code())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    pub fn mismatch(left: Currency, right: Currency) -> Self {
        Self::CurrencyMismatch { left, right }
    }
}
