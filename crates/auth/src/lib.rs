//! `authident-auth`: the authenticated user's identity record.
//!
//! This crate is intentionally decoupled from the identity provider, storage and
//! HTTP. It only defines the value those layers exchange.

pub mod claims;
pub mod identity;

pub use authident_core::{DomainError, DomainResult, EmailAddress, UserId, ValueObject};
pub use claims::IdentityClaims;
pub use identity::{NewUserIdentity, UserIdentity};
