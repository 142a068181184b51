use crate::output;

use clap::Subcommand;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing::debug;

use userboard_service::{UserApi, UserDraft};

/// One-shot requests against the users endpoint
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// List all users
    List,

    /// Show a single user
    Get {
        /// User id, sent as-is
        id: String,
    },

    /// Create a user
    Create { name: String, email: String },

    /// Replace a user's name and email
    Update {
        /// User id, sent as-is
        id: String,
        name: String,
        email: String,
    },

    /// Delete a user
    Delete {
        /// User id, sent as-is
        id: String,
    },
}

pub async fn execute(api: &dyn UserApi, command: UserCommand) -> Result<()> {
    debug!(?command, "running command");
    match command {
        UserCommand::List => {
            let users = api.list_users().await.wrap_err("failed to list users")?;
            if users.is_empty() {
                output::info("No users");
            } else {
                output::user_table(&users);
            }
        }
        UserCommand::Get { id } => {
            let user = api
                .get_user(&id)
                .await
                .wrap_err_with(|| format!("failed to fetch user {}", id))?;
            output::user_table(std::slice::from_ref(&user));
        }
        UserCommand::Create { name, email } => {
            output::status("Creating", &name);
            let user = api
                .create_user(&UserDraft::new(name, email))
                .await
                .wrap_err("failed to create user")?;
            output::success(&format!("Created user {} ({})", user.id, user.name));
        }
        UserCommand::Update { id, name, email } => {
            output::status("Updating", &id);
            api.update_user(&id, &UserDraft::new(name, email))
                .await
                .wrap_err_with(|| format!("failed to update user {}", id))?;
            output::success(&format!("Updated user {}", id));
        }
        UserCommand::Delete { id } => {
            output::status("Deleting", &id);
            api.delete_user(&id)
                .await
                .wrap_err_with(|| format!("failed to delete user {}", id))?;
            output::success(&format!("Deleted user {}", id));
        }
    }
    Ok(())
}
