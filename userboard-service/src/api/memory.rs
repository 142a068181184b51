// In-Process User Store
// Serves the user API from memory, assigning ids the way the backend does

use crate::api::UserApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{User, UserDraft};

use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Debug)]
struct Store {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

/// User API backed by an in-memory map, listed in id order
#[derive(Debug)]
pub struct MemoryUserApi {
    store: Mutex<Store>,
}

impl MemoryUserApi {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with the given drafts, ids starting at 1
    pub fn with_users(drafts: impl IntoIterator<Item = UserDraft>) -> Self {
        let mut users = BTreeMap::new();
        let mut next_id = 1;
        for draft in drafts {
            users.insert(next_id, draft.into_user(next_id));
            next_id += 1;
        }
        Self {
            store: Mutex::new(Store { users, next_id }),
        }
    }
}

impl Default for MemoryUserApi {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_id(id: &str) -> ApiResult<i64> {
    id.trim()
        .parse()
        .map_err(|_| ApiError::InvalidId(id.to_string()))
}

#[async_trait::async_trait]
impl UserApi for MemoryUserApi {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        let store = self.store.lock().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn get_user(&self, id: &str) -> ApiResult<User> {
        let key = parse_id(id)?;
        let store = self.store.lock().await;
        store
            .users
            .get(&key)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn create_user(&self, draft: &UserDraft) -> ApiResult<User> {
        let mut store = self.store.lock().await;
        let id = store.next_id;
        let user = draft.clone().into_user(id);
        store.users.insert(id, user.clone());
        store.next_id += 1;
        Ok(user)
    }

    async fn update_user(&self, id: &str, draft: &UserDraft) -> ApiResult<()> {
        let key = parse_id(id)?;
        let mut store = self.store.lock().await;
        let user = store
            .users
            .get_mut(&key)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        user.name = draft.name.clone();
        user.email = draft.email.clone();
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> ApiResult<()> {
        let key = parse_id(id)?;
        let mut store = self.store.lock().await;
        store
            .users
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }
}
