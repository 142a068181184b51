// User API
// The REST surface the directory talks to, and the backends that serve it

pub mod http;
pub mod memory;

pub use http::HttpUserApi;
pub use memory::MemoryUserApi;

use crate::error::ApiResult;
use crate::models::{User, UserDraft};

/// Operations exposed by a user backend.
///
/// Ids are taken as raw path segments: whatever the user typed is forwarded
/// without checking that it names an existing record, or even a number.
#[async_trait::async_trait]
pub trait UserApi: Send + Sync {
    /// `GET /api/{backend}/users`
    async fn list_users(&self) -> ApiResult<Vec<User>>;

    /// `GET /api/{backend}/users/{id}`
    async fn get_user(&self, id: &str) -> ApiResult<User>;

    /// `POST /api/{backend}/users`, returns the record with its assigned id
    async fn create_user(&self, draft: &UserDraft) -> ApiResult<User>;

    /// `PUT /api/{backend}/users/{id}`, acknowledgement only
    async fn update_user(&self, id: &str, draft: &UserDraft) -> ApiResult<()>;

    /// `DELETE /api/{backend}/users/{id}`, acknowledgement only
    async fn delete_user(&self, id: &str) -> ApiResult<()>;
}
