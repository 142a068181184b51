// Service Errors
// Failures of user API calls, whichever backend serves them

use reqwest::{Method, StatusCode};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {method} {url}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
    },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Base URL cannot carry path segments: {0}")]
    UnsupportedUrl(String),

    #[error("User with id {0} not found")]
    NotFound(String),

    #[error("Invalid user id: {0}")]
    InvalidId(String),
}
