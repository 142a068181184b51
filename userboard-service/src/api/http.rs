// HTTP User API
// reqwest-backed adapter for the `/api/{backend}/users` endpoints

use crate::api::UserApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{User, UserDraft};

use reqwest::{Client, Method, Response, Url};
use tracing::debug;

/// User API that talks to a REST backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: Client,
    users_url: Url,
}

impl HttpUserApi {
    /// Build an adapter from the configured origin and backend name.
    ///
    /// # Errors
    ///
    /// Returns an error when the origin does not parse as a base URL or the
    /// reqwest client cannot be constructed.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let users_url = users_url(&config.api_url, &config.backend)?;
        Ok(Self { client, users_url })
    }

    /// Collection endpoint, `{origin}/api/{backend}/users`
    pub fn users_url(&self) -> &Url {
        &self.users_url
    }

    /// Item endpoint, `{origin}/api/{backend}/users/{id}`
    pub fn user_url(&self, id: &str) -> ApiResult<Url> {
        let mut url = self.users_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::UnsupportedUrl(self.users_url.to_string()))?
            .push(id);
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&UserDraft>,
    ) -> ApiResult<Response> {
        debug!(%method, %url, "sending request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(draft) = body {
            request = request.json(draft);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }
}

fn users_url(api_url: &str, backend: &str) -> ApiResult<Url> {
    let mut url = Url::parse(api_url)?;
    url.path_segments_mut()
        .map_err(|_| ApiError::UnsupportedUrl(api_url.to_string()))?
        .pop_if_empty()
        .extend(["api", backend, "users"]);
    Ok(url)
}

#[async_trait::async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        let response = self.send(Method::GET, self.users_url.clone(), None).await?;
        Ok(response.json().await?)
    }

    async fn get_user(&self, id: &str) -> ApiResult<User> {
        let url = self.user_url(id)?;
        let response = self.send(Method::GET, url, None).await?;
        Ok(response.json().await?)
    }

    async fn create_user(&self, draft: &UserDraft) -> ApiResult<User> {
        let response = self
            .send(Method::POST, self.users_url.clone(), Some(draft))
            .await?;
        Ok(response.json().await?)
    }

    async fn update_user(&self, id: &str, draft: &UserDraft) -> ApiResult<()> {
        let url = self.user_url(id)?;
        self.send(Method::PUT, url, Some(draft)).await?;
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> ApiResult<()> {
        let url = self.user_url(id)?;
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }
}
