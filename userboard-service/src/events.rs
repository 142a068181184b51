// API Events
// Completion notices sent from request tasks back to the owning directory

use crate::error::ApiResult;
use crate::models::{Mutation, User};

use tokio::sync::mpsc;

/// Sender half handed to each request task
pub type ApiEventSender = mpsc::UnboundedSender<ApiEvent>;

/// Receiver half drained by the directory
pub type ApiEventReceiver = mpsc::UnboundedReceiver<ApiEvent>;

/// Create a new event channel
pub fn api_channel() -> (ApiEventSender, ApiEventReceiver) {
    mpsc::unbounded_channel()
}

/// Outcome of one request. Every request task sends exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    /// The collection endpoint answered
    Listed { users: Vec<User> },

    /// The collection request failed; the current collection stays
    ListFailed { error: String },

    /// The backend accepted a new record
    Created { user: User },

    /// The backend acknowledged a full-field update
    Updated { id: String },

    /// The backend acknowledged a delete
    Deleted { id: String },

    /// A write failed; nothing is refreshed
    MutationFailed { mutation: Mutation, error: String },
}

impl ApiEvent {
    pub fn listed(result: ApiResult<Vec<User>>) -> Self {
        match result {
            Ok(users) => Self::Listed { users },
            Err(e) => Self::ListFailed {
                error: e.to_string(),
            },
        }
    }

    pub fn created(result: ApiResult<User>) -> Self {
        match result {
            Ok(user) => Self::Created { user },
            Err(e) => Self::mutation_failed(Mutation::Create, e),
        }
    }

    pub fn updated(id: String, result: ApiResult<()>) -> Self {
        match result {
            Ok(()) => Self::Updated { id },
            Err(e) => Self::mutation_failed(Mutation::Update, e),
        }
    }

    pub fn deleted(id: String, result: ApiResult<()>) -> Self {
        match result {
            Ok(()) => Self::Deleted { id },
            Err(e) => Self::mutation_failed(Mutation::Delete, e),
        }
    }

    fn mutation_failed(mutation: Mutation, error: impl ToString) -> Self {
        Self::MutationFailed {
            mutation,
            error: error.to_string(),
        }
    }

    /// Whether this event reports a successful write
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Created { .. } | Self::Updated { .. } | Self::Deleted { .. }
        )
    }
}

/// Helper trait for sending events, ignoring a closed receiver
pub trait EventSender {
    fn send_event(&self, event: ApiEvent);
}

impl EventSender for ApiEventSender {
    fn send_event(&self, event: ApiEvent) {
        let _ = self.send(event);
    }
}
