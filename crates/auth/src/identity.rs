//! Identity record of an authenticated end user.
//!
//! A [`UserIdentity`] is built once per sign-in (or session refresh) by the
//! authentication layer and then handed around by value. It never changes after
//! construction: every "update" returns a new record.

use serde::{Deserialize, Serialize};

use authident_core::{DomainError, DomainResult, EmailAddress, UserId, ValueObject};

// ─────────────────────────────────────────────────────────────────────────────
// Input
// ─────────────────────────────────────────────────────────────────────────────

/// Raw construction input, as supplied by the producing collaborator.
///
/// Every field may be missing here; [`UserIdentity::try_from`] decides what is
/// required. This is also the shape identity records are deserialized through,
/// so stored records get the same checks as freshly issued ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserIdentity {
    pub id: Option<String>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub is_email_verified: Option<bool>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Identity
// ─────────────────────────────────────────────────────────────────────────────

/// Immutable identity of an authenticated user.
///
/// # Invariants
/// - `id` and `email` are never empty.
/// - `None` in an optional field means "unset"; `Some("")` is an explicit empty
///   value and is kept as such through updates and serialization.
/// - Two records are equal iff all five fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NewUserIdentity")]
pub struct UserIdentity {
    id: UserId,
    email: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_url: Option<String>,
    is_email_verified: bool,
}

impl ValueObject for UserIdentity {}

impl UserIdentity {
    /// Build a record from the two required fields.
    ///
    /// Display name and photo are unset and the email is not verified.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            id: UserId::parse(id)?,
            email: EmailAddress::parse(email)?,
            display_name: None,
            photo_url: None,
            is_email_verified: false,
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    pub fn is_email_verified(&self) -> bool {
        self.is_email_verified
    }

    /// Name to show for this user: the display name unless it is unset or blank,
    /// in which case the email address.
    pub fn display_label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.email.as_str())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Copy-with-changes
    // ─────────────────────────────────────────────────────────────────────────

    pub fn with_display_name(&self, display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..self.clone()
        }
    }

    pub fn without_display_name(&self) -> Self {
        Self {
            display_name: None,
            ..self.clone()
        }
    }

    pub fn with_photo_url(&self, photo_url: impl Into<String>) -> Self {
        Self {
            photo_url: Some(photo_url.into()),
            ..self.clone()
        }
    }

    pub fn without_photo_url(&self) -> Self {
        Self {
            photo_url: None,
            ..self.clone()
        }
    }

    pub fn with_email_verified(&self, is_email_verified: bool) -> Self {
        Self {
            is_email_verified,
            ..self.clone()
        }
    }

    pub fn mark_email_verified(&self) -> Self {
        self.with_email_verified(true)
    }

    /// Replace the email address.
    ///
    /// The verification flag is copied unchanged; callers that want a changed
    /// address to count as unverified chain `with_email_verified(false)`.
    pub fn with_email(&self, email: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            email: EmailAddress::parse(email)?,
            ..self.clone()
        })
    }
}

impl TryFrom<NewUserIdentity> for UserIdentity {
    type Error = DomainError;

    fn try_from(input: NewUserIdentity) -> Result<Self, Self::Error> {
        let id = input.id.ok_or_else(|| DomainError::missing("id"))?;
        let email = input.email.ok_or_else(|| DomainError::missing("email"))?;

        Ok(Self {
            id: UserId::parse(id)?,
            email: EmailAddress::parse(email)?,
            display_name: input.display_name,
            photo_url: input.photo_url,
            is_email_verified: input.is_email_verified.unwrap_or(false),
        })
    }
}

impl From<UserIdentity> for NewUserIdentity {
    fn from(identity: UserIdentity) -> Self {
        Self {
            id: Some(identity.id.into_inner()),
            email: Some(identity.email.into_inner()),
            display_name: identity.display_name,
            photo_url: identity.photo_url,
            is_email_verified: Some(identity.is_email_verified),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
