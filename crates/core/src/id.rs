//! Strongly-typed identifiers used across the domain.
//!
//! Identifier newtypes wrap a [`Uuid`] and get their behaviour from
//! [`uuid_identifier!`]:
//!
//! ```ignore
//! #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
//! #[serde(transparent)]
//! pub struct ProductId(Uuid);
//!
//! catalog_core::uuid_identifier!(ProductId, "ProductId");
//! ```

pub use uuid::Uuid;

pub use crate::error::IdError;

/// Implements generation, parsing and formatting for a `struct X(Uuid)` newtype.
///
/// Accepted text forms are the ones `Uuid::parse_str` understands: hyphenated,
/// simple (32 hex digits), braced and URN. Output is always the lowercase
/// hyphenated form.
#[macro_export]
macro_rules! uuid_identifier {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new random identifier (UUIDv4).
            pub fn generate() -> Self {
                Self($crate::id::Uuid::new_v4())
            }

            /// Parse an identifier from any standard UUID text form.
            pub fn parse(s: &str) -> Result<Self, $crate::id::IdError> {
                $crate::id::Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| $crate::id::IdError::invalid_format($name, s, e))
            }

            /// Wrap an existing UUID without validation.
            pub fn from_uuid(uuid: $crate::id::Uuid) -> Self {
                Self(uuid)
            }

            /// Borrow the underlying UUID.
            pub fn as_uuid(&self) -> &$crate::id::Uuid {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0.as_hyphenated(), f)
            }
        }

        impl From<$crate::id::Uuid> for $t {
            fn from(value: $crate::id::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for $crate::id::Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::id::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    struct SampleId(Uuid);

    uuid_identifier!(SampleId, "SampleId");

    const CANONICAL: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    #[test]
    fn generate_produces_distinct_v4_ids() {
        let a = SampleId::generate();
        let b = SampleId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn parse_accepts_standard_forms() {
        let forms = [
            CANONICAL.to_string(),
            CANONICAL.to_uppercase(),
            CANONICAL.replace('-', ""),
            format!("{{{CANONICAL}}}"),
            format!("urn:uuid:{CANONICAL}"),
        ];
        for form in forms {
            let id = SampleId::parse(&form).unwrap();
            assert_eq!(id.to_string(), CANONICAL, "form {form}");
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "not-a-uuid", "67e55044-10b1-426f-9247", "zze55044-10b1-426f-9247-bb680e5fe0c8"] {
            let err = input.parse::<SampleId>().unwrap_err();
            match err {
                IdError::InvalidFormat { kind, value, .. } => {
                    assert_eq!(kind, "SampleId");
                    assert_eq!(value, input);
                }
            }
        }
    }

    #[test]
    fn equality_is_by_value() {
        let a = SampleId::parse(CANONICAL).unwrap();
        let b: SampleId = Uuid::parse_str(CANONICAL).unwrap().into();
        assert_eq!(a, b);
        assert_eq!(Uuid::from(a), *b.as_uuid());
        assert_eq!(SampleId::from_uuid(*a.as_uuid()), b);
    }

    #[test]
    fn serializes_as_canonical_text() {
        let id = SampleId::parse(CANONICAL).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{CANONICAL}\""));
        let back: SampleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
