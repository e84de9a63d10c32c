mod auth;
pub mod client;
pub mod transport;
pub mod types;

pub use client::*;
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
