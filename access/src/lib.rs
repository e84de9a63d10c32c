//! Access-control core shared by the HRMS edge server and frontend.

pub mod credential;
pub mod edge;
pub mod error;
pub mod gate;
pub mod policy;
pub mod role;
pub mod session;

pub use credential::{Credential, CredentialSource, SESSION_COOKIE_NAME};
pub use edge::EdgeDecision;
pub use error::{PolicyError, RoleParseError};
pub use gate::GateState;
pub use policy::{
    Access, RoutePattern, RoutePolicy, RouteRule, DEFAULT_AUTHENTICATED_PATH, LOGIN_PATH,
    UNAUTHORIZED_PATH,
};
pub use role::{AllowList, Role};
pub use session::{SessionSnapshot, SessionUser};
