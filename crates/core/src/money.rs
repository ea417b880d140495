//! Currency-tagged fixed-point money.
//!
//! Amounts are stored as integer minor units (cents, kopecks) so arithmetic
//! never accumulates floating-point error. Floats only appear at the edges:
//! [`Money::from_float`], [`Money::multiply`] and [`Money::to_float`], and are
//! rounded through `Decimal` so `1.005` means one dollar and half a cent, not
//! the nearest binary fraction below it.

use core::cmp::Ordering;
use core::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::MoneyError;
use crate::value_object::ValueObject;

/// Minor units per major unit for every supported currency.
pub const MINOR_UNITS_PER_UNIT: i64 = 100;

/// Supported currencies (fixed allow-list).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Currency {
    Rub,
    #[default]
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Usd, Currency::Eur];

    /// ISO 4217 code, uppercase.
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Case-insensitive lookup in the allow-list.
    pub fn parse(code: &str) -> Result<Self, MoneyError> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| MoneyError::invalid_currency(code))
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Non-negative amount of money in one currency.
///
/// Serialized as `{"amount": <minor units>, "currency": "<CODE>"}`; the same
/// invariants are checked on deserialization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord")]
pub struct Money {
    #[serde(rename = "amount")]
    minor_units: i64,
    currency: Currency,
}

#[derive(Deserialize)]
struct MoneyRecord {
    amount: i64,
    currency: Currency,
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Money::new(record.amount, record.currency)
    }
}

impl ValueObject for Money {}

impl Money {
    /// Build from minor units and an already-validated currency.
    pub fn new(minor_units: i64, currency: Currency) -> Result<Self, MoneyError> {
        if minor_units < 0 {
            return Err(MoneyError::NegativeAmount {
                amount: minor_units as f64 / MINOR_UNITS_PER_UNIT as f64,
            });
        }
        Ok(Self {
            minor_units,
            currency,
        })
    }

    /// Build from a major-unit amount, rounding half away from zero to the
    /// nearest minor unit (`19.995` -> `2000`, `1.005` -> `101`).
    pub fn from_float(amount: f64, currency: &str) -> Result<Self, MoneyError> {
        if amount < 0.0 {
            return Err(MoneyError::NegativeAmount { amount });
        }
        if !amount.is_finite() {
            return Err(MoneyError::NonFiniteAmount { amount });
        }
        let currency = Currency::parse(currency)?;
        let minor_units = to_decimal(amount)?
            .checked_mul(Decimal::from(MINOR_UNITS_PER_UNIT))
            .ok_or(MoneyError::Overflow)
            .and_then(round_to_minor)?;
        Ok(Self {
            minor_units,
            currency,
        })
    }

    pub fn from_minor_units(minor_units: i64, currency: &str) -> Result<Self, MoneyError> {
        Self::new(minor_units, Currency::parse(currency)?)
    }

    pub fn zero(currency: &str) -> Result<Self, MoneyError> {
        Self::new(0, Currency::parse(currency)?)
    }

    /// Shorthand for `from_float(amount, "USD")`.
    pub fn usd(amount: f64) -> Result<Self, MoneyError> {
        Self::from_float(amount, Currency::Usd.code())
    }

    pub fn to_float(&self) -> f64 {
        self.minor_units as f64 / MINOR_UNITS_PER_UNIT as f64
    }

    pub fn to_minor_units(&self) -> i64 {
        self.minor_units
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let minor_units = self
            .minor_units
            .checked_add(other.minor_units)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            minor_units,
            currency: self.currency,
        })
    }

    pub fn subtract(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        if other.minor_units > self.minor_units {
            return Err(MoneyError::NegativeResult {
                minuend: self.minor_units,
                subtrahend: other.minor_units,
            });
        }
        Ok(Self {
            minor_units: self.minor_units - other.minor_units,
            currency: self.currency,
        })
    }

    /// Scale by a non-negative factor; the product is rounded half away from
    /// zero to the nearest minor unit. Accepts any type losslessly convertible
    /// to `f64` (`u32`, `i32`, `f32`, `f64`, ...); use
    /// [`Money::multiply_by_quantity`] for `i64` counts.
    pub fn multiply(&self, multiplier: impl Into<f64>) -> Result<Money, MoneyError> {
        let multiplier = multiplier.into();
        if multiplier < 0.0 {
            return Err(MoneyError::NegativeMultiplier { multiplier });
        }
        if !multiplier.is_finite() {
            return Err(MoneyError::InvalidMultiplier { multiplier });
        }
        let minor_units = Decimal::from(self.minor_units)
            .checked_mul(to_decimal(multiplier)?)
            .ok_or(MoneyError::Overflow)
            .and_then(round_to_minor)?;
        Ok(Self {
            minor_units,
            currency: self.currency,
        })
    }

    /// Exact integer scaling, e.g. unit price times stock quantity.
    pub fn multiply_by_quantity(&self, quantity: i64) -> Result<Money, MoneyError> {
        if quantity < 0 {
            return Err(MoneyError::NegativeMultiplier {
                multiplier: quantity as f64,
            });
        }
        let minor_units = self
            .minor_units
            .checked_mul(quantity)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            minor_units,
            currency: self.currency,
        })
    }

    pub fn greater_than(&self, other: &Money) -> Result<bool, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.minor_units > other.minor_units)
    }

    pub fn less_than(&self, other: &Money) -> Result<bool, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.minor_units < other.minor_units)
    }

    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    pub fn is_positive(&self) -> bool {
        self.minor_units > 0
    }

    /// `"<units>.<cents> <CODE>"`, always two decimal digits.
    pub fn format(&self) -> String {
        format!(
            "{}.{:02} {}",
            self.minor_units / MINOR_UNITS_PER_UNIT,
            self.minor_units % MINOR_UNITS_PER_UNIT,
            self.currency
        )
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::mismatch(self.currency, other.currency));
        }
        Ok(())
    }
}

/// Ordering is only defined within one currency.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.minor_units.cmp(&other.minor_units))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format())
    }
}

/// Decimal from the shortest text that round-trips the float, so `0.285`
/// becomes exactly `0.285`.
fn to_decimal(value: f64) -> Result<Decimal, MoneyError> {
    Decimal::from_str(&value.to_string())
        .or_else(|_| Decimal::try_from(value))
        .map_err(|_| MoneyError::Overflow)
}

fn round_to_minor(value: Decimal) -> Result<i64, MoneyError> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(MoneyError::Overflow)
}
