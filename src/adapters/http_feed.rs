//! HTTP feed service adapter.
//!
//! Talks to the Stride REST API with JSON bodies and bearer-token auth,
//! implementing [`FeedService`] from `crate::traits`.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{
    classify_reqwest_error, ErrorContext, FeedError, NetworkError, ResultExt, StrideError,
    StrideResult,
};
use crate::models::{
    Author, Comment, FeedPage, Friend, NewComment, NewPost, PostId, PostWithAuthor,
};
use crate::traits::FeedService;

/// Default API endpoint when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://api.stride.fit";

/// Request timeout applied to every call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Feed service backed by the Stride REST API.
///
/// # Example
///
/// ```ignore
/// use stride::adapters::HttpFeedService;
///
/// let service = HttpFeedService::new("https://api.stride.fit").with_auth("token");
/// let page = service.fetch_feed(None, 20).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpFeedService {
    base_url: String,
    auth_token: Option<String>,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFeedService {
    /// Create a service for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Self::build_client(REQUEST_TIMEOUT))
    }

    /// Create a service with a preconfigured reqwest client. Its timeout is
    /// assumed to be [`REQUEST_TIMEOUT`].
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
            client,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Rebuild the client with a different per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Self::build_client(timeout);
        self.timeout = timeout;
        self
    }

    fn build_client(timeout: Duration) -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default()
    }

    /// Attach a bearer token to every request.
    pub fn with_auth(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .header("Accept", "application/json");
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and turn non-2xx responses into errors.
    ///
    /// 404 on a post route means the post is gone, 403 on delete means the
    /// server refused because the caller is not the author.
    async fn send(
        &self,
        builder: RequestBuilder,
        operation: &str,
        post_id: Option<&PostId>,
    ) -> StrideResult<Response> {
        let response = builder.send().await.map_err(|e| {
            let url = e.url().map(|u| u.to_string()).unwrap_or_default();
            classify_reqwest_error(&e, &url, Some(self.timeout))
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::warn!(operation, status = status.as_u16(), "feed API returned error");

        let err: StrideError = match (status, post_id) {
            (StatusCode::NOT_FOUND, Some(post_id)) => FeedError::PostNotFound {
                post_id: post_id.clone(),
            }
            .into(),
            (StatusCode::FORBIDDEN, Some(post_id)) if operation == "delete_post" => {
                FeedError::NotAuthor {
                    post_id: post_id.clone(),
                }
                .into()
            }
            (StatusCode::TOO_MANY_REQUESTS, _) => NetworkError::RateLimited {
                retry_after_secs: None,
            }
            .into(),
            _ => NetworkError::HttpStatus {
                status: status.as_u16(),
                message,
            }
            .into(),
        };
        Err(err)
    }

    async fn json<T: DeserializeOwned>(response: Response) -> StrideResult<T> {
        Ok(response.json::<T>().await?)
    }

    fn context(operation: &str, post_id: Option<&PostId>) -> ErrorContext {
        let ctx = ErrorContext::new(operation).with_component("http_feed");
        match post_id {
            Some(id) => ctx.with_post_id(id.as_str()),
            None => ctx,
        }
    }
}

#[async_trait]
impl FeedService for HttpFeedService {
    async fn current_user(&self) -> StrideResult<Author> {
        let response = self
            .send(self.request(Method::GET, "/v1/me"), "current_user", None)
            .await
            .context(Self::context("current_user", None))?;
        Self::json(response).await
    }

    async fn fetch_feed(&self, cursor: Option<&str>, limit: usize) -> StrideResult<FeedPage> {
        let mut builder = self
            .request(Method::GET, "/v1/feed")
            .query(&[("limit", limit.to_string())]);
        if let Some(cursor) = cursor {
            builder = builder.query(&[("cursor", cursor)]);
        }

        let response = self
            .send(builder, "fetch_feed", None)
            .await
            .context(Self::context("fetch_feed", None))?;
        Self::json(response).await
    }

    async fn like_post(&self, post_id: &PostId) -> StrideResult<()> {
        let path = format!("/v1/posts/{}/like", post_id);
        self.send(self.request(Method::POST, &path), "like_post", Some(post_id))
            .await
            .context(Self::context("like_post", Some(post_id)))?;
        Ok(())
    }

    async fn unlike_post(&self, post_id: &PostId) -> StrideResult<()> {
        let path = format!("/v1/posts/{}/like", post_id);
        self.send(self.request(Method::DELETE, &path), "unlike_post", Some(post_id))
            .await
            .context(Self::context("unlike_post", Some(post_id)))?;
        Ok(())
    }

    async fn delete_post(&self, post_id: &PostId) -> StrideResult<()> {
        let path = format!("/v1/posts/{}", post_id);
        self.send(self.request(Method::DELETE, &path), "delete_post", Some(post_id))
            .await
            .context(Self::context("delete_post", Some(post_id)))?;
        Ok(())
    }

    async fn create_post(&self, post: &NewPost) -> StrideResult<PostWithAuthor> {
        let builder = self.request(Method::POST, "/v1/posts").json(post);
        let response = self
            .send(builder, "create_post", None)
            .await
            .context(Self::context("create_post", None))?;
        Self::json(response).await
    }

    async fn fetch_comments(&self, post_id: &PostId) -> StrideResult<Vec<Comment>> {
        let path = format!("/v1/posts/{}/comments", post_id);
        let response = self
            .send(self.request(Method::GET, &path), "fetch_comments", Some(post_id))
            .await
            .context(Self::context("fetch_comments", Some(post_id)))?;
        Self::json(response).await
    }

    async fn add_comment(&self, post_id: &PostId, comment: &NewComment) -> StrideResult<Comment> {
        let path = format!("/v1/posts/{}/comments", post_id);
        let builder = self.request(Method::POST, &path).json(comment);
        let response = self
            .send(builder, "add_comment", Some(post_id))
            .await
            .context(Self::context("add_comment", Some(post_id)))?;
        Self::json(response).await
    }

    async fn fetch_friends(&self) -> StrideResult<Vec<Friend>> {
        let response = self
            .send(self.request(Method::GET, "/v1/friends"), "fetch_friends", None)
            .await
            .context(Self::context("fetch_friends", None))?;
        Self::json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let service = HttpFeedService::new("http://localhost:8080/");
        assert_eq!(service.base_url(), "http://localhost:8080");
    }
}
