use std::fmt;

pub const SESSION_COOKIE_NAME: &str = "session_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Cookie,
    BearerHeader,
}

/// An opaque bearer token. Only its presence matters to the gates.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    source: CredentialSource,
}

impl Credential {
    /// Reads the session cookie first and falls back to the `Authorization` header.
    pub fn extract(
        cookie_header: Option<&str>,
        authorization: Option<&str>,
        cookie_name: &str,
    ) -> Option<Self> {
        if let Some(token) = cookie_header.and_then(|raw| cookie_value(raw, cookie_name)) {
            return Some(Self {
                token: token.to_string(),
                source: CredentialSource::Cookie,
            });
        }
        authorization.and_then(bearer_token).map(|token| Self {
            token: token.to_string(),
            source: CredentialSource::BearerHeader,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &format_args!("<{} bytes>", self.token.len()))
            .field("source", &self.source)
            .finish()
    }
}

/// Value of the named cookie in a `Cookie` header. Empty values count as absent.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        let value = value.trim();
        (key.trim() == name && !value.is_empty()).then_some(value)
    })
}

/// Token after the first space of a `Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim();
    (!token.is_empty()).then_some(token)
}
