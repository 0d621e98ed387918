//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Identity records have exactly one failure mode: a required field was
/// missing or empty when the record was built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required identity field was missing or empty.
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),
}

impl DomainError {
    pub fn invalid_identity(msg: impl Into<String>) -> Self {
        Self::InvalidIdentity(msg.into())
    }

    /// Shorthand for a required field that was never supplied.
    pub fn missing(field: &str) -> Self {
        Self::InvalidIdentity(format!("{field} is required"))
    }

    /// Shorthand for a required field supplied as an empty string.
    pub fn empty(field: &str) -> Self {
        Self::InvalidIdentity(format!("{field} must not be empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        assert_eq!(
            DomainError::missing("id").to_string(),
            "invalid identity: id is required"
        );
        assert_eq!(
            DomainError::empty("email").to_string(),
            "invalid identity: email must not be empty"
        );
    }
}
