use std::sync::Arc;

use hrms_access::RoutePolicy;

use crate::{auth::TokenVerifier, config::Config};

/// Immutable per-process state shared by every request.
#[derive(Debug, Clone)]
pub struct EdgeState {
    pub policy: Arc<RoutePolicy>,
    pub cookie_name: Arc<str>,
    pub verifier: Arc<TokenVerifier>,
}

impl EdgeState {
    pub fn new(policy: RoutePolicy, cookie_name: &str, verifier: TokenVerifier) -> Self {
        Self {
            policy: Arc::new(policy),
            cookie_name: Arc::from(cookie_name),
            verifier: Arc::new(verifier),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            RoutePolicy::default(),
            &config.session_cookie_name,
            TokenVerifier::from_secret(config.jwt_secret.as_deref()),
        )
    }
}
