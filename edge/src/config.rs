use std::{env, net::SocketAddr, path::PathBuf};

use hrms_access::SESSION_COOKIE_NAME;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid EDGE_BIND_ADDR value {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("SESSION_COOKIE_NAME must not be empty")]
    EmptyCookieName,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub session_cookie_name: String,
    /// When set, credentials must be HS256 tokens signed with this secret.
    pub jwt_secret: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_value = lookup("EDGE_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let bind_addr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let static_dir = lookup("EDGE_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./frontend/dist"));

        let session_cookie_name =
            lookup("SESSION_COOKIE_NAME").unwrap_or_else(|| SESSION_COOKIE_NAME.to_string());
        if session_cookie_name.trim().is_empty() {
            return Err(ConfigError::EmptyCookieName);
        }

        let jwt_secret = lookup("EDGE_JWT_SECRET").filter(|secret| !secret.is_empty());

        Ok(Config {
            bind_addr,
            static_dir,
            session_cookie_name,
            jwt_secret,
        })
    }
}
