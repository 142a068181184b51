// Userboard Service Library
// REST access to the user directory and the client-side cache that mirrors it

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod events;
pub mod models;

pub use api::{HttpUserApi, MemoryUserApi, UserApi};
pub use config::ClientConfig;
pub use directory::UserDirectory;
pub use error::{ApiError, ApiResult};
pub use events::{api_channel, ApiEvent, ApiEventReceiver, ApiEventSender, EventSender};
pub use models::{Mutation, User, UserDraft};
