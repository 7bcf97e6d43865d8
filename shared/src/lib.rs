use serde::{Deserialize, Serialize};

pub mod api;

pub use api::{ApiClientConfig, ApiError, MddApi};

// ============================================================================
// Articles & Comments
// ============================================================================

/// Author summary embedded in an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub user_id: i64,
    pub email: String,
    pub username: String,
}

/// A comment as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: i64,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub author: String,
}

/// An article with its subject and full comment thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub content: String,
    /// ISO-8601 instant, e.g. "2025-03-02T10:15:30Z"
    pub created_at: String,
    pub author: Author,
    pub subject: Subject,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Article {
    /// Parsed creation time, if the backend sent an RFC 3339 timestamp
    pub fn created_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }
}

/// Feed response. The backend wraps the list in `{"articles": [...]}`,
/// older deployments return a bare array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleListResponse {
    Wrapped { articles: Vec<Article> },
    Bare(Vec<Article>),
}

impl ArticleListResponse {
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            ArticleListResponse::Wrapped { articles } => articles,
            ArticleListResponse::Bare(articles) => articles,
        }
    }
}

/// Request body for POST /api/articles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub subject_id: i64,
}

/// Request body for POST /api/articles/{id}/comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

// ============================================================================
// Subjects
// ============================================================================

/// A subject (theme) users can subscribe to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub subject_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subscribed: bool,
}

// ============================================================================
// Auth & Profile
// ============================================================================

/// Request body for POST /api/auth/login
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Request body for POST /api/auth/register
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Request body for PUT /api/auth/me
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Token returned by login, register and profile update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// One of the current user's subscriptions, as listed on the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscription {
    pub subscription_id: i64,
    pub subject_id: i64,
    pub subject_name: String,
    #[serde(default)]
    pub subject_description: String,
}

/// Response for GET /api/auth/me
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: i64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub subscriptions: Vec<UserSubscription>,
}

// ============================================================================
// Errors
// ============================================================================

/// Error body produced by the backend's global exception handler.
///
/// `errors` maps field names to validation messages and is `null` for
/// non-validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
