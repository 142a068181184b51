// User Directory
// Client-side cache of the backend's user collection.
//
// Every write is followed by a fresh list request instead of patching the
// cache locally; the collection is always the last list response received.

use crate::api::UserApi;
use crate::events::{api_channel, ApiEvent, ApiEventReceiver, ApiEventSender, EventSender};
use crate::models::{Mutation, User, UserDraft};

use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct UserDirectory {
    api: Arc<dyn UserApi>,
    users: Vec<User>,
    loaded: bool,
    in_flight: usize,
    sender: ApiEventSender,
    receiver: ApiEventReceiver,
}

impl UserDirectory {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        let (sender, receiver) = api_channel();
        Self {
            api,
            users: Vec::new(),
            loaded: false,
            in_flight: 0,
            sender,
            receiver,
        }
    }

    /// Records from the last successful list response, in backend order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Whether any list response has arrived yet
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of requests whose outcome has not been applied yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Issue `GET /users`. Overlapping refreshes are allowed; whichever
    /// response arrives last wins.
    pub fn refresh(&mut self) {
        debug!("refreshing user list");
        let api = Arc::clone(&self.api);
        self.spawn(
            async move { ApiEvent::listed(api.list_users().await) },
            |error| ApiEvent::ListFailed { error },
        );
    }

    pub fn create(&mut self, draft: UserDraft) {
        debug!(name = %draft.name, "creating user");
        let api = Arc::clone(&self.api);
        self.spawn(
            async move { ApiEvent::created(api.create_user(&draft).await) },
            |error| ApiEvent::MutationFailed {
                mutation: Mutation::Create,
                error,
            },
        );
    }

    /// Full-field update. `id` is forwarded verbatim as the path segment.
    pub fn update(&mut self, id: impl Into<String>, draft: UserDraft) {
        let id = id.into();
        debug!(%id, "updating user");
        let api = Arc::clone(&self.api);
        self.spawn(
            async move {
                let result = api.update_user(&id, &draft).await;
                ApiEvent::updated(id, result)
            },
            |error| ApiEvent::MutationFailed {
                mutation: Mutation::Update,
                error,
            },
        );
    }

    /// `id` is forwarded verbatim as the path segment.
    pub fn delete(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!(%id, "deleting user");
        let api = Arc::clone(&self.api);
        self.spawn(
            async move {
                let result = api.delete_user(&id).await;
                ApiEvent::deleted(id, result)
            },
            |error| ApiEvent::MutationFailed {
                mutation: Mutation::Delete,
                error,
            },
        );
    }

    /// Run `request` on its own task. A task that panics still reports
    /// back, through `failed`, so `in_flight` always returns to zero.
    fn spawn<F>(&mut self, request: F, failed: fn(String) -> ApiEvent)
    where
        F: std::future::Future<Output = ApiEvent> + Send + 'static,
    {
        self.in_flight += 1;
        let sender = self.sender.clone();
        let handle = tokio::spawn(request);
        tokio::spawn(async move {
            let event = match handle.await {
                Ok(event) => event,
                Err(e) => failed(format!("request task failed: {}", e)),
            };
            sender.send_event(event);
        });
    }

    // =========================================================================
    // Reconciliation
    // =========================================================================

    /// Fold one request outcome into the directory
    pub fn apply(&mut self, event: ApiEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match event {
            ApiEvent::Listed { users } => {
                debug!(count = users.len(), "user list replaced");
                self.users = users;
                self.loaded = true;
            }
            ApiEvent::ListFailed { error } => {
                warn!(%error, "failed to fetch users");
            }
            ApiEvent::Created { user } => {
                info!(id = user.id, name = %user.name, "user created");
                self.refresh();
            }
            ApiEvent::Updated { id } => {
                info!(%id, "user updated");
                self.refresh();
            }
            ApiEvent::Deleted { id } => {
                info!(%id, "user deleted");
                self.refresh();
            }
            ApiEvent::MutationFailed { mutation, error } => {
                warn!(%mutation, %error, "failed to write user");
            }
        }
    }

    /// Apply every outcome that has already arrived, without waiting.
    /// Returns the number of events applied.
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.receiver.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait until every request, including the refreshes that successful
    /// writes trigger, has been applied
    pub async fn wait_idle(&mut self) {
        while self.in_flight > 0 {
            match self.receiver.recv().await {
                Some(event) => self.apply(event),
                None => break,
            }
        }
    }
}
