//! Request-time access decision, made before any page renders.

use crate::policy::{RoutePolicy, DEFAULT_AUTHENTICATED_PATH, LOGIN_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDecision {
    Continue,
    RedirectTo(&'static str),
}

/// Decides a request from its path and whether it carries a usable credential.
///
/// Only presence is considered here; callers that verify tokens pass the
/// verification result instead of raw presence.
pub fn evaluate(policy: &RoutePolicy, path: &str, has_credential: bool) -> EdgeDecision {
    let Some(rule) = policy.lookup(path) else {
        return EdgeDecision::Continue;
    };
    match (has_credential, rule.is_public()) {
        (false, false) => EdgeDecision::RedirectTo(LOGIN_PATH),
        (false, true) => EdgeDecision::Continue,
        (true, false) => EdgeDecision::Continue,
        (true, true) => EdgeDecision::RedirectTo(DEFAULT_AUTHENTICATED_PATH),
    }
}
