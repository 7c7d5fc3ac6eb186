/// Structured error types for provider adapters
///
/// Every adapter returns `ApiError` from its `scan` call. The aggregated scan path never
/// surfaces these errors; they are logged and replaced by a zero-valued token report.
/// Only the single-provider CLI modes print them.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("API disabled")]
    Disabled,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("scan failed: {0}")]
    Provider(String),

    #[error("Not found")]
    NotFound,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidResponse(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
