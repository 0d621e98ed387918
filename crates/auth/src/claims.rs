use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use authident_core::DomainError;

use crate::identity::{NewUserIdentity, UserIdentity};

/// OpenID Connect user-info claims (transport-agnostic).
///
/// This is what the identity provider hands over once the token has been
/// verified. Every claim is optional on the wire; the conversion into
/// [`UserIdentity`] decides which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject / stable principal identifier.
    pub sub: Option<String>,

    pub email: Option<String>,

    /// Full name, used as the display name.
    pub name: Option<String>,

    /// Profile picture URL.
    pub picture: Option<String>,

    /// Some providers send this as the string `"true"` / `"false"`.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub email_verified: Option<bool>,
}

impl From<IdentityClaims> for NewUserIdentity {
    fn from(claims: IdentityClaims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            display_name: claims.name,
            photo_url: claims.picture,
            is_email_verified: claims.email_verified,
        }
    }
}

impl TryFrom<IdentityClaims> for UserIdentity {
    type Error = DomainError;

    fn try_from(claims: IdentityClaims) -> Result<Self, Self::Error> {
        match UserIdentity::try_from(NewUserIdentity::from(claims)) {
            Ok(identity) => {
                tracing::debug!(
                    user_id = %identity.id(),
                    email_verified = identity.is_email_verified(),
                    "issued identity from provider claims"
                );
                Ok(identity)
            }
            Err(err) => {
                tracing::warn!(error = %err, "rejected provider claims");
                Err(err)
            }
        }
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(value)) => Ok(Some(value)),
        Some(Flag::Text(text)) if text.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(Flag::Text(text)) if text.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(Flag::Text(text)) => Err(D::Error::custom(format!(
            "invalid email_verified value: {text:?}"
        ))),
    }
}
