mod commands;
mod config;
mod logging;
mod output;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use tracing::info;

use commands::users::{self, UserCommand};
use config::ConnectionArgs;
use logging::LogTarget;

/// Browse and edit the users of a REST backend
#[derive(Parser, Debug)]
#[command(name = "userboard", version, about)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Log file for the terminal UI (default: ~/.userboard/userboard.log)
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Run a single request instead of starting the terminal UI
    #[command(subcommand)]
    command: Option<UserCommand>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let api = cli.connection.build_api()?;

    match cli.command {
        Some(command) => {
            logging::init(&LogTarget::Stderr)?;
            users::execute(api.as_ref(), command).await
        }
        None => {
            let log_file = cli.log_file.unwrap_or_else(logging::default_log_file);
            logging::init(&LogTarget::File(log_file.clone()))?;
            info!(
                api_url = %cli.connection.api_url,
                backend = %cli.connection.backend,
                offline = cli.connection.offline,
                log_file = %log_file.display(),
                "starting terminal UI"
            );
            let result = userboard_tui::run(api, cli.connection.title()).await;
            info!("terminal UI closed");
            result
        }
    }
}
