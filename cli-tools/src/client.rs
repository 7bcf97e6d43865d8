//! Native HTTP client implementation using reqwest

use std::rc::Rc;

use reqwest::Client;
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

/// Native API client using reqwest.
///
/// The bearer token is read from the slot on every request, so a login or
/// logout performed through the session store applies to the next call.
pub struct NativeApiClient {
    client: Client,
    config: ApiClientConfig,
    slot: Rc<dyn KeyValueSlot>,
}

impl NativeApiClient {
    pub fn new(base_url: &str, slot: Rc<dyn KeyValueSlot>) -> reqwest::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!("mdd-api/", env!("CARGO_PKG_VERSION")))
                .build()?,
            config: ApiClientConfig::new(base_url),
            slot,
        })
    }

    fn add_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.slot.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
            Some(token) => req.header("Authorization", bearer(&token)),
            None => req,
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = self
            .add_auth(req)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "Request failed");
        Err(ApiError::from_status(status.as_u16(), &text))
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.config.url(endpoint);
        let response = self.send(self.client.get(&url)).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.config.url(endpoint);
        let response = self.send(self.client.post(&url).json(body)).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl MddApi for NativeApiClient {
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(endpoints::AUTH_LOGIN, req).await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(endpoints::AUTH_REGISTER, req).await
    }

    async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.get_json(endpoints::AUTH_ME).await
    }

    async fn update_profile(&self, req: &UpdateProfileRequest) -> Result<AuthResponse, ApiError> {
        let url = self.config.url(endpoints::AUTH_ME);
        let response = self.send(self.client.put(&url).json(req)).await?;
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        let list: ArticleListResponse = self.get_json(endpoints::ARTICLES).await?;
        Ok(list.into_articles())
    }

    async fn get_article(&self, id: i64) -> Result<Article, ApiError> {
        self.get_json(&endpoints::article(id)).await
    }

    async fn add_comment(
        &self,
        article_id: i64,
        req: &CreateCommentRequest,
    ) -> Result<Comment, ApiError> {
        self.post_json(&endpoints::article_comments(article_id), req)
            .await
    }

    async fn create_article(&self, req: &CreateArticleRequest) -> Result<Article, ApiError> {
        self.post_json(endpoints::ARTICLES, req).await
    }

    async fn list_subjects(&self, subscribed: Option<bool>) -> Result<Vec<Subject>, ApiError> {
        self.get_json(&endpoints::subjects(subscribed)).await
    }

    async fn subscribe(&self, subject_id: i64) -> Result<(), ApiError> {
        let url = self.config.url(&endpoints::subject_subscribe(subject_id));
        self.send(self.client.post(&url).json(&serde_json::json!({})))
            .await?;
        Ok(())
    }

    async fn unsubscribe(&self, subject_id: i64) -> Result<(), ApiError> {
        let url = self.config.url(&endpoints::subject_unsubscribe(subject_id));
        self.send(self.client.post(&url).json(&serde_json::json!({})))
            .await?;
        Ok(())
    }
}
