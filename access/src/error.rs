use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleParseError {
    #[error("unknown role: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("route pattern must start with '/': {0}")]
    RelativePattern(String),
    #[error("route pattern declared twice: {0}")]
    DuplicatePattern(String),
}
