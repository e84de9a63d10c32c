use std::fmt;

use hrms_access::Credential;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub role: Option<String>,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Decides whether an extracted credential counts as present.
pub enum TokenVerifier {
    /// Any non-empty token is accepted.
    PresenceOnly,
    /// Token must be an HS256 JWT with a valid signature and unexpired `exp`.
    Jwt {
        key: DecodingKey,
        validation: Validation,
    },
}

impl TokenVerifier {
    pub fn from_secret(secret: Option<&str>) -> Self {
        match secret {
            Some(secret) => TokenVerifier::Jwt {
                key: DecodingKey::from_secret(secret.as_bytes()),
                validation: Validation::default(),
            },
            None => TokenVerifier::PresenceOnly,
        }
    }

    pub fn verify(
        &self,
        credential: &Credential,
    ) -> Result<Option<Claims>, jsonwebtoken::errors::Error> {
        match self {
            TokenVerifier::PresenceOnly => Ok(None),
            TokenVerifier::Jwt { key, validation } => {
                let data = decode::<Claims>(credential.token(), key, validation)?;
                Ok(Some(data.claims))
            }
        }
    }

    pub fn accepts(&self, credential: &Credential) -> bool {
        match self.verify(credential) {
            Ok(Some(claims)) => {
                tracing::trace!(sub = %claims.sub, role = ?claims.role, "credential verified");
                true
            }
            Ok(None) => true,
            Err(err) => {
                tracing::debug!(source = ?credential.source(), error = %err, "credential rejected");
                false
            }
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            TokenVerifier::PresenceOnly => "presence-only",
            TokenVerifier::Jwt { .. } => "jwt-hs256",
        }
    }
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TokenVerifier").field(&self.mode()).finish()
    }
}
