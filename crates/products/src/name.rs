//! Product name value object.

use serde::{Deserialize, Serialize};

use catalog_core::ValueObject;

use crate::error::NameError;

/// Trimmed product name, 2 to 255 characters.
///
/// Lengths count Unicode scalar values, so `"Çay"` is 3 characters even though
/// it is 4 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    pub const MIN_LENGTH: usize = 2;
    pub const MAX_LENGTH: usize = 255;

    pub fn new(value: impl AsRef<str>) -> Result<Self, NameError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }

        let actual = trimmed.chars().count();
        if actual < Self::MIN_LENGTH {
            return Err(NameError::TooShort {
                min: Self::MIN_LENGTH,
                actual,
            });
        }
        if actual > Self::MAX_LENGTH {
            return Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring search.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Never true for a constructed name.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for ProductName {}

impl core::fmt::Display for ProductName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.0
    }
}
