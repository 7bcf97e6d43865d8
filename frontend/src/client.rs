//! Browser HTTP client implementation using gloo-net

use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use session_core::config::TOKEN_KEY;
use session_core::KeyValueSlot;
use shared::api::{bearer, endpoints, ApiClientConfig, ApiError, MddApi};
use shared::{
    Article, ArticleListResponse, AuthResponse, Comment, CreateArticleRequest,
    CreateCommentRequest, LoginRequest, RegisterRequest, Subject, UpdateProfileRequest,
    UserProfile,
};

/// API client for the browser. Every request carries the stored token as a
/// bearer header when one is present.
pub struct GlooApiClient {
    config: ApiClientConfig,
    slot: Rc<dyn KeyValueSlot>,
}

impl GlooApiClient {
    pub fn new(base_url: &str, slot: Rc<dyn KeyValueSlot>) -> Self {
        Self {
            config: ApiClientConfig::new(base_url),
            slot,
        }
    }

    fn add_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match self.slot.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
            Some(token) => req.header("Authorization", &bearer(&token)),
            None => req,
        }
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        log::warn!("{} -> {}", response.url(), status);
        let text = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &text))
    }

    async fn fetch(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let response = self
            .add_auth(req)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    async fn fetch_json<B: Serialize>(
        &self,
        req: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let request = self
            .add_auth(req)
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn url(&self, endpoint: &str) -> String {
        self.config.url(endpoint)
    }
}

impl MddApi for GlooApiClient {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .fetch_json(Request::post(&self.url(endpoints::AUTH_LOGIN)), req)
            .await?;
        Self::decode(response).await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .fetch_json(Request::post(&self.url(endpoints::AUTH_REGISTER)), req)
            .await?;
        Self::decode(response).await
    }

    async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        let response = self.fetch(Request::get(&self.url(endpoints::AUTH_ME))).await?;
        Self::decode(response).await
    }

    async fn update_profile(&self, req: &UpdateProfileRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .fetch_json(Request::put(&self.url(endpoints::AUTH_ME)), req)
            .await?;
        Self::decode(response).await
    }

    async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        let response = self.fetch(Request::get(&self.url(endpoints::ARTICLES))).await?;
        let list: ArticleListResponse = Self::decode(response).await?;
        Ok(list.into_articles())
    }

    async fn get_article(&self, id: i64) -> Result<Article, ApiError> {
        let response = self
            .fetch(Request::get(&self.url(&endpoints::article(id))))
            .await?;
        Self::decode(response).await
    }

    async fn add_comment(
        &self,
        article_id: i64,
        req: &CreateCommentRequest,
    ) -> Result<Comment, ApiError> {
        let url = self.url(&endpoints::article_comments(article_id));
        let response = self.fetch_json(Request::post(&url), req).await?;
        Self::decode(response).await
    }

    async fn create_article(&self, req: &CreateArticleRequest) -> Result<Article, ApiError> {
        let response = self
            .fetch_json(Request::post(&self.url(endpoints::ARTICLES)), req)
            .await?;
        Self::decode(response).await
    }

    async fn list_subjects(&self, subscribed: Option<bool>) -> Result<Vec<Subject>, ApiError> {
        let response = self
            .fetch(Request::get(&self.url(&endpoints::subjects(subscribed))))
            .await?;
        Self::decode(response).await
    }

    async fn subscribe(&self, subject_id: i64) -> Result<(), ApiError> {
        let url = self.url(&endpoints::subject_subscribe(subject_id));
        self.fetch_json(Request::post(&url), &serde_json::json!({}))
            .await?;
        Ok(())
    }

    async fn unsubscribe(&self, subject_id: i64) -> Result<(), ApiError> {
        let url = self.url(&endpoints::subject_unsubscribe(subject_id));
        self.fetch_json(Request::post(&url), &serde_json::json!({}))
            .await?;
        Ok(())
    }
}
