//! API client types and trait definitions
//!
//! This module defines the API contract that can be implemented
//! by both native (reqwest) and WASM (gloo-net) HTTP clients.

use serde::{Deserialize, Serialize};

pub use crate::{
    Article, AuthResponse, Comment, CreateArticleRequest, CreateCommentRequest, LoginRequest,
    RegisterRequest, Subject, UpdateProfileRequest, UserProfile,
};

/// API error types
///
/// `body` carries the decoded failure payload when the server sent one.
/// It is kept as raw JSON because the backend's error shapes differ by
/// endpoint; interpretation happens in the client core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ApiError {
    /// Network or connection error
    Network(String),
    /// Server returned an error status
    Server {
        status: u16,
        body: Option<serde_json::Value>,
    },
    /// Failed to parse response
    Parse(String),
    /// Authentication required or failed
    Auth { body: Option<serde_json::Value> },
    /// Resource not found
    NotFound { body: Option<serde_json::Value> },
}

impl ApiError {
    /// Map an HTTP failure status and its (possibly empty) body text
    /// into an error variant.
    pub fn from_status(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            None
        } else {
            Some(
                serde_json::from_str(text)
                    .unwrap_or_else(|_| serde_json::Value::String(text.to_string())),
            )
        };
        match status {
            401 => ApiError::Auth { body },
            404 => ApiError::NotFound { body },
            _ => ApiError::Server { status, body },
        }
    }

    /// The failure payload sent by the server, if any
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::Server { body, .. }
            | ApiError::Auth { body }
            | ApiError::NotFound { body } => body.as_ref(),
            ApiError::Network(_) | ApiError::Parse(_) => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Server { status, body } => match body {
                Some(body) => write!(f, "Server error ({}): {}", status, body),
                None => write!(f, "Server error ({})", status),
            },
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Auth { .. } => write!(f, "Auth error: unauthorized"),
            ApiError::NotFound { .. } => write!(f, "Not found"),
        }
    }
}

impl std::error::Error for ApiError {}

/// API endpoint definitions
pub mod endpoints {
    pub const AUTH_LOGIN: &str = "/api/auth/login";
    pub const AUTH_REGISTER: &str = "/api/auth/register";
    pub const AUTH_ME: &str = "/api/auth/me";
    pub const ARTICLES: &str = "/api/articles";
    pub const SUBJECTS: &str = "/api/subjects";

    pub fn article(id: i64) -> String {
        format!("/api/articles/{}", id)
    }

    pub fn article_comments(id: i64) -> String {
        format!("/api/articles/{}/comments", id)
    }

    /// Subject list, optionally filtered on the caller's subscription state
    pub fn subjects(subscribed: Option<bool>) -> String {
        match subscribed {
            Some(true) => format!("{}?subscribed=true", SUBJECTS),
            Some(false) => format!("{}?subscribed=false", SUBJECTS),
            None => SUBJECTS.to_string(),
        }
    }

    pub fn subject_subscribe(id: i64) -> String {
        format!("/api/subjects/{}/subscribe", id)
    }

    pub fn subject_unsubscribe(id: i64) -> String {
        format!("/api/subjects/{}/unsubscribe", id)
    }
}

/// Trait defining the MDD backend API
///
/// This trait can be implemented by both native and WASM HTTP clients.
/// All methods are async and return Result<T, ApiError>. Implementations
/// attach the stored bearer token to every request when one is present.
#[allow(async_fn_in_trait)]
pub trait MddApi {
    /// Exchange credentials for a token
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// Create an account; returns a token for the new user
    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// Get the current user's profile and subscriptions
    async fn get_profile(&self) -> Result<UserProfile, ApiError>;

    /// Update the current user's profile; returns a renewed token
    async fn update_profile(&self, req: &UpdateProfileRequest) -> Result<AuthResponse, ApiError>;

    /// List the feed articles
    async fn list_articles(&self) -> Result<Vec<Article>, ApiError>;

    /// Get one article with its comments
    async fn get_article(&self, id: i64) -> Result<Article, ApiError>;

    /// Append a comment to an article
    async fn add_comment(
        &self,
        article_id: i64,
        req: &CreateCommentRequest,
    ) -> Result<Comment, ApiError>;

    /// Publish a new article
    async fn create_article(&self, req: &CreateArticleRequest) -> Result<Article, ApiError>;

    /// List subjects, optionally filtered on subscription state
    async fn list_subjects(&self, subscribed: Option<bool>) -> Result<Vec<Subject>, ApiError>;

    /// Subscribe the current user to a subject
    async fn subscribe(&self, subject_id: i64) -> Result<(), ApiError>;

    /// Unsubscribe the current user from a subject
    async fn unsubscribe(&self, subject_id: i64) -> Result<(), ApiError>;
}

/// Configuration for creating an API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the server (e.g., "http://localhost:8080")
    pub base_url: String,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

/// Build the `Authorization` header value for a stored token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subjects_endpoint_filters() {
        assert_eq!(endpoints::subjects(None), "/api/subjects");
        assert_eq!(
            endpoints::subjects(Some(true)),
            "/api/subjects?subscribed=true"
        );
        assert_eq!(
            endpoints::subjects(Some(false)),
            "/api/subjects?subscribed=false"
        );
    }

    #[test]
    fn config_strips_trailing_slash() {
        let config = ApiClientConfig::new("http://localhost:8080/");
        assert_eq!(
            config.url(&endpoints::article_comments(4)),
            "http://localhost:8080/api/articles/4/comments"
        );
    }

    #[test]
    fn from_status_decodes_json_body() {
        let err = ApiError::from_status(400, r#"{"status":400,"message":"Invalid request"}"#);
        match &err {
            ApiError::Server { status, body } => {
                assert_eq!(*status, 400);
                assert_eq!(body.as_ref().unwrap()["message"], "Invalid request");
            }
            _ => panic!("Wrong variant"),
        }
        assert!(err.payload().is_some());
    }

    #[test]
    fn from_status_keeps_plain_text_as_string_payload() {
        let err = ApiError::from_status(502, "Bad Gateway");
        assert_eq!(
            err.payload(),
            Some(&serde_json::Value::String("Bad Gateway".into()))
        );
    }

    #[test]
    fn from_status_maps_auth_and_not_found() {
        assert!(matches!(
            ApiError::from_status(401, ""),
            ApiError::Auth { body: None }
        ));
        assert!(matches!(
            ApiError::from_status(404, "{}"),
            ApiError::NotFound { body: Some(_) }
        ));
    }

    #[test]
    fn network_error_has_no_payload() {
        let err = ApiError::Network("connection refused".into());
        assert!(err.payload().is_none());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
