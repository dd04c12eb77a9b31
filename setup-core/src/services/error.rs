use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected response: {0}")]
    Response(String),

    #[error("Token storage error: {0}")]
    Storage(String),
}
