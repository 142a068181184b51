// Client Configuration
// Where the REST backend lives and how long to wait for it

use std::time::Duration;

/// Origin used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend path segment used when nothing else is configured
pub const DEFAULT_BACKEND: &str = "go";

/// Per-request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP user API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8000`
    pub api_url: String,

    /// Backend name, used as the path segment in `/api/{backend}/users`
    pub backend: String,

    /// Timeout applied to every request
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            backend: backend.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_BACKEND)
    }
}
