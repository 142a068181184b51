// Connection settings shared by the TUI and the one-shot commands

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use color_eyre::Result;

use userboard_service::{ClientConfig, HttpUserApi, MemoryUserApi, UserApi, UserDraft};

/// Where to find the users backend
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Origin of the REST backend
    #[arg(
        long,
        global = true,
        env = "USERBOARD_API_URL",
        value_name = "URL",
        default_value = userboard_service::config::DEFAULT_API_URL
    )]
    pub api_url: String,

    /// Backend name, used as the path segment in /api/{backend}/users
    #[arg(
        long,
        global = true,
        env = "USERBOARD_BACKEND",
        value_name = "NAME",
        default_value = userboard_service::config::DEFAULT_BACKEND
    )]
    pub backend: String,

    /// Request timeout in seconds
    #[arg(
        long = "timeout",
        global = true,
        env = "USERBOARD_TIMEOUT_SECS",
        value_name = "SECS",
        default_value_t = 10
    )]
    pub timeout_secs: u64,

    /// Serve sample users from memory instead of talking to a backend
    #[arg(long, global = true)]
    pub offline: bool,
}

impl ConnectionArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url, &self.backend)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub fn build_api(&self) -> Result<Arc<dyn UserApi>> {
        if self.offline {
            return Ok(Arc::new(MemoryUserApi::with_users(sample_users())));
        }
        Ok(Arc::new(HttpUserApi::new(&self.client_config())?))
    }

    /// Header line for the TUI
    pub fn title(&self) -> String {
        if self.offline {
            "Userboard - offline".to_string()
        } else {
            format!("Userboard - {} @ {}", self.backend, self.api_url)
        }
    }
}

fn sample_users() -> Vec<UserDraft> {
    vec![
        UserDraft::new("John Doe", "john@example.com"),
        UserDraft::new("Jane Doe", "jane@example.com"),
    ]
}
