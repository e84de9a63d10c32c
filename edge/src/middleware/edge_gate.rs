use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use hrms_access::{edge, Credential, EdgeDecision};

use crate::{middleware::request_id::RequestId, state::EdgeState};

/// Coarse request-time gate in front of every page.
///
/// Ungated paths pass straight through. Gated paths are decided from the
/// route policy and whether the request carries an accepted credential.
pub async fn edge_gate(State(state): State<EdgeState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    // Ungated paths never consult the credential, so skip verifying it.
    let has_credential =
        state.policy.is_gated(&path) && has_accepted_credential(&state, request.headers());
    match edge::evaluate(&state.policy, &path, has_credential) {
        EdgeDecision::Continue => next.run(request).await,
        EdgeDecision::RedirectTo(target) => {
            let request_id = request
                .extensions()
                .get::<RequestId>()
                .map(|id| id.0.as_str())
                .unwrap_or("-");
            tracing::debug!(
                request_id,
                path = %path,
                has_credential,
                location = target,
                "edge gate redirect"
            );
            Redirect::temporary(target).into_response()
        }
    }
}

fn has_accepted_credential(state: &EdgeState, headers: &HeaderMap) -> bool {
    let cookie_header = joined_cookie_header(headers);
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    Credential::extract(cookie_header.as_deref(), auth_header, &state.cookie_name)
        .is_some_and(|credential| state.verifier.accepts(&credential))
}

/// HTTP/2 clients may split cookies across several `cookie` fields; they are
/// rejoined the way RFC 9113 §8.2.3 describes.
fn joined_cookie_header(headers: &HeaderMap) -> Option<String> {
    let parts: Vec<&str> = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}
