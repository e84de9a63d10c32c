use hrms_access::SessionUser;
use reqwest::Method;

use super::{
    client::{decode, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// Exchanges credentials for a token and persists it for later requests.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::validation(format!("Invalid login payload: {}", e)))?;
        let response = self.send(Method::POST, "/auth/login", None, Some(body)).await?;
        self.check_status(&response, None)?;
        let login: LoginResponse = decode(&response)?;
        self.credentials().store(&login.token);
        Ok(login)
    }

    pub async fn get_me(&self) -> Result<SessionUser, ApiError> {
        self.request(Method::GET, "/auth/me", None).await
    }

    /// Server-side invalidation of a token the caller already dropped locally.
    /// Errors are returned but never redirect.
    pub async fn invalidate_session(&self, token: String) -> Result<(), ApiError> {
        let response = self
            .send(Method::POST, "/auth/logout", Some(token), None)
            .await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_response(response.status, &response.body))
        }
    }
}
