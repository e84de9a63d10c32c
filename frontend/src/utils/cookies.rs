//! Browser-side storage for the session credential.
//!
//! The token lives in a regular (script-readable) cookie so the edge server
//! sees it on every page request.

use hrms_access::{credential::cookie_value, SESSION_COOKIE_NAME};

pub trait CredentialStore {
    fn read(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);

    fn take(&self) -> Option<String> {
        let token = self.read();
        self.clear();
        token
    }
}

pub fn session_cookie(name: &str, token: &str, secure: bool) -> String {
    let mut cookie = format!("{}={}; Path=/; SameSite=Lax", name, token);
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub fn clear_cookie(name: &str) -> String {
    format!("{}=; Path=/; Max-Age=0; SameSite=Lax", name)
}

#[derive(Debug, Clone)]
pub struct CookieCredentialStore {
    name: String,
}

impl CookieCredentialStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for CookieCredentialStore {
    fn default() -> Self {
        Self::new(SESSION_COOKIE_NAME)
    }
}

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn is_secure_origin() -> bool {
    web_sys::window()
        .and_then(|w| w.location().protocol().ok())
        .map(|protocol| protocol == "https:")
        .unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
impl CredentialStore for CookieCredentialStore {
    fn read(&self) -> Option<String> {
        let raw = html_document()?.cookie().ok()?;
        token_from_cookie_string(&raw, &self.name)
    }

    fn store(&self, token: &str) {
        if let Some(doc) = html_document() {
            let cookie = session_cookie(&self.name, token, is_secure_origin());
            if doc.set_cookie(&cookie).is_err() {
                log::warn!("Failed to persist session cookie");
            }
        }
    }

    fn clear(&self) {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&clear_cookie(&self.name));
        }
    }
}

// Outside the browser there is no cookie jar; the store is always empty.
#[cfg(not(target_arch = "wasm32"))]
impl CredentialStore for CookieCredentialStore {
    fn read(&self) -> Option<String> {
        None
    }

    fn store(&self, _token: &str) {
        log::debug!("No cookie jar outside the browser; dropping {} token", self.name);
    }

    fn clear(&self) {}
}

/// Reads the token back out of a raw `document.cookie` string.
pub fn token_from_cookie_string(raw: &str, name: &str) -> Option<String> {
    cookie_value(raw, name).map(str::to_owned)
}
