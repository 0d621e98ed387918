//! Strongly-typed, non-empty string identifiers used by identity records.
//!
//! Both types are opaque: the only rule is that the wrapped string is not empty.
//! Formats (provider subject ids, RFC 5322 addresses) are the producing
//! collaborator's concern.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Stable identifier of an authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

/// Email address as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

macro_rules! impl_string_newtype {
    ($t:ty, $field:literal) => {
        impl $t {
            /// Wrap `value`, rejecting the empty string.
            pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.is_empty() {
                    return Err(DomainError::empty($field));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl TryFrom<&str> for $t {
            type Error = DomainError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

impl_string_newtype!(UserId, "id");
impl_string_newtype!(EmailAddress, "email");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_rejected() {
        assert_eq!(UserId::parse(""), Err(DomainError::empty("id")));
    }

    #[test]
    fn empty_email_is_rejected() {
        let err = "".parse::<EmailAddress>().unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn whitespace_is_opaque_and_kept_verbatim() {
        let id = UserId::parse(" u1 ").unwrap();
        assert_eq!(id.as_str(), " u1 ");
    }

    #[test]
    fn serializes_as_bare_string() {
        let id = UserId::parse("u1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"u1\"");

        let back: UserId = serde_json::from_str("\"u1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserializing_empty_string_fails() {
        let err = serde_json::from_str::<EmailAddress>("\"\"").unwrap_err();
        assert!(err.to_string().contains("email must not be empty"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-empty string is accepted and kept byte-for-byte.
            #[test]
            fn non_empty_strings_are_accepted(raw in ".{1,64}") {
                let id = UserId::parse(raw.clone()).unwrap();
                prop_assert_eq!(id.as_str(), raw.as_str());
                prop_assert_eq!(String::from(id), raw);
            }
        }
    }
}
