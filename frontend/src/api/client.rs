use std::rc::Rc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport},
    types::ApiError,
};
use crate::{
    config,
    utils::{
        cookies::{CookieCredentialStore, CredentialStore},
        navigation::{redirect_to_login_if_needed, BrowserNavigator, Navigator},
    },
};

#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    base_url: Option<String>,
    credentials: Rc<dyn CredentialStore>,
    navigator: Rc<dyn Navigator>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_parts(
            Rc::new(ReqwestTransport::default()),
            None,
            Rc::new(CookieCredentialStore::default()),
            Rc::new(BrowserNavigator),
        )
    }

    pub fn with_parts(
        transport: Rc<dyn Transport>,
        base_url: Option<String>,
        credentials: Rc<dyn CredentialStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            base_url,
            credentials,
            navigator,
        }
    }

    pub fn credentials(&self) -> &dyn CredentialStore {
        self.credentials.as_ref()
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) async fn send(
        &self,
        method: Method,
        path: &str,
        bearer: Option<String>,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        self.transport
            .execute(ApiRequest {
                method,
                url: format!("{}{}", base_url, path),
                bearer,
                body,
            })
            .await
    }

    /// Authenticated call with the stored credential attached.
    ///
    /// A 401 clears the credential and sends the browser to `/login` before
    /// the error is returned.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let bearer = self.credentials.read();
        let response = self.send(method, path, bearer.clone(), body).await?;
        self.check_status(&response, bearer.as_deref())?;
        decode(&response)
    }

    pub(super) fn check_status(
        &self,
        response: &ApiResponse,
        sent: Option<&str>,
    ) -> Result<(), ApiError> {
        if response.is_success() {
            return Ok(());
        }
        let error = ApiError::from_response(response.status, &response.body);
        if response.status == 401 {
            self.handle_unauthorized(sent);
        }
        Err(error)
    }

    // A 401 for a token that has since been replaced says nothing about the
    // current session.
    fn handle_unauthorized(&self, sent: Option<&str>) {
        if self.credentials.read().as_deref() != sent {
            log::debug!("Ignoring 401 for a superseded credential");
            return;
        }
        log::info!("Upstream rejected the session credential; clearing it");
        self.credentials.clear();
        redirect_to_login_if_needed(self.navigator.as_ref());
    }
}

pub(super) fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    serde_json::from_slice(&response.body)
        .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
}
