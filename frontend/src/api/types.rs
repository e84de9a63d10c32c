use hrms_access::SessionUser;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

pub const UNAUTHORIZED_CODE: &str = "UNAUTHORIZED";

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: UNAUTHORIZED_CODE.to_string(),
            details: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == UNAUTHORIZED_CODE
    }

    /// Builds the error for a non-success response, preferring the server's
    /// `message` or `error` field over the generic status text.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<Value>(body).ok();
        let message = parsed.as_ref().and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(Value::as_str))
                .filter(|msg| !msg.trim().is_empty())
                .map(str::to_owned)
        });
        let code = parsed
            .as_ref()
            .and_then(|value| value.get("code").and_then(Value::as_str))
            .map(str::to_owned);
        let details = parsed.as_ref().and_then(|value| value.get("details")).cloned();

        let error = message.unwrap_or_else(|| format!("Request failed with status {}", status));
        let code = code.unwrap_or_else(|| {
            if status == 401 {
                UNAUTHORIZED_CODE.to_string()
            } else {
                format!("HTTP_{}", status)
            }
        });
        Self {
            error,
            code,
            details,
        }
    }
}
