use serde::{Deserialize, Serialize};
use std::{sync::OnceLock, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub session_timeout_ms: Option<u64>,
}

impl RuntimeConfig {
    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn session_timeout(&self) -> Duration {
        self.session_timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SESSION_TIMEOUT)
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn is_empty(&self) -> bool {
        self.api_base_url.is_none() && self.session_timeout_ms.is_none()
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn cache(config: RuntimeConfig) -> RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(|| config).clone()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_key(obj: &JsValue, keys: &[&str]) -> Option<JsValue> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        })
    }

    // Expects an optional global object such as
    // window.__HRMS_ENV = { API_BASE_URL: "...", SESSION_TIMEOUT_MS: 8000 }
    fn from_global(name: &str) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let obj = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if obj.is_undefined() || obj.is_null() {
            return None;
        }
        Some(RuntimeConfig {
            api_base_url: read_key(&obj, &["API_BASE_URL", "api_base_url"])
                .and_then(|v| v.as_string()),
            session_timeout_ms: read_key(&obj, &["SESSION_TIMEOUT_MS", "session_timeout_ms"])
                .and_then(|v| v.as_f64())
                .filter(|ms| *ms > 0.0)
                .map(|ms| ms as u64),
        })
    }

    pub fn snapshot_from_globals() -> Option<RuntimeConfig> {
        from_global("__HRMS_ENV")
            .filter(|cfg| !cfg.is_empty())
            .or_else(|| from_global("__HRMS_CONFIG").filter(|cfg| !cfg.is_empty()))
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

/// Resolves runtime configuration once: `window.__HRMS_ENV`, then
/// `window.__HRMS_CONFIG`, then `./config.json`, then built-in defaults.
pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(existing) = browser::snapshot_from_globals() {
            return cache(existing);
        }
        if let Some(fetched) = browser::fetch_runtime_config().await {
            return cache(fetched);
        }
    }
    cache(RuntimeConfig::default())
}

pub async fn await_api_base_url() -> String {
    await_runtime_config().await.api_base_url().to_string()
}

pub async fn init() {
    let config = await_runtime_config().await;
    log::info!(
        "Runtime config initialized (api_base_url={}, session_timeout={:?})",
        config.api_base_url(),
        config.session_timeout()
    );
}
