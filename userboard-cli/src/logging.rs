// Tracing setup. The TUI owns the terminal, so it logs to a file; one-shot
// commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `~/.userboard/userboard.log`, or `./.userboard/userboard.log` without a home
pub fn default_log_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".userboard")
        .join("userboard.log")
}

/// Install the global subscriber. `RUST_LOG` overrides the default level.
pub fn init(target: &LogTarget) -> Result<()> {
    let result = match target {
        LogTarget::Stderr => fmt()
            .with_env_filter(filter("warn"))
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            fmt()
                .with_env_filter(filter("info"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    result.map_err(|e| eyre!("failed to initialise logging: {}", e))
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_file_name() {
        let path = default_log_file();
        assert!(path.ends_with(".userboard/userboard.log"));
    }
}
