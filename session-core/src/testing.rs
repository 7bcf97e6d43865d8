//! In-memory doubles for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use futures_channel::oneshot;
use shared::api::MddApi;
use shared::{
    ApiError, Article, AuthResponse, Author, Comment, CreateArticleRequest,
    CreateCommentRequest, LoginRequest, RegisterRequest, Subject, UpdateProfileRequest,
    UserProfile, UserSubscription,
};

use crate::surface::{ConfirmPrompt, Notifier};

/// Scriptable fake backend. Every call is recorded by name; a queued
/// failure for a name is returned by the next call with that name.
#[derive(Default)]
pub struct FakeApi {
    pub subjects: RefCell<Vec<Subject>>,
    pub articles: RefCell<Vec<Article>>,
    pub profile: RefCell<Option<UserProfile>>,
    pub token: RefCell<String>,
    calls: RefCell<Vec<String>>,
    failures: RefCell<HashMap<&'static str, VecDeque<ApiError>>>,
    comment_gate: RefCell<Option<oneshot::Receiver<()>>>,
    next_comment_id: Cell<i64>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        *api.token.borrow_mut() = "fresh-token".to_string();
        api
    }

    pub fn fail_next(&self, call: &'static str, err: ApiError) {
        self.failures
            .borrow_mut()
            .entry(call)
            .or_default()
            .push_back(err);
    }

    /// Hold the next `add_comment` response until the returned sender fires
    pub fn hold_next_comment(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.comment_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == name).count()
    }

    fn record(&self, name: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(name.to_string());
        let queued = self
            .failures
            .borrow_mut()
            .get_mut(name)
            .and_then(|q| q.pop_front());
        match queued {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn find_article(&self, id: i64) -> Result<Article, ApiError> {
        self.articles
            .borrow()
            .iter()
            .find(|a| a.article_id == id)
            .cloned()
            .ok_or(ApiError::NotFound { body: None })
    }
}

impl MddApi for FakeApi {
    async fn login(&self, _req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.record("login")?;
        Ok(AuthResponse {
            token: self.token.borrow().clone(),
        })
    }

    async fn register(&self, _req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.record("register")?;
        Ok(AuthResponse {
            token: self.token.borrow().clone(),
        })
    }

    async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.record("get_profile")?;
        self.profile
            .borrow()
            .clone()
            .ok_or(ApiError::Auth { body: None })
    }

    async fn update_profile(&self, req: &UpdateProfileRequest) -> Result<AuthResponse, ApiError> {
        self.record("update_profile")?;
        if let Some(profile) = self.profile.borrow_mut().as_mut() {
            profile.username = req.username.clone();
            profile.email = req.email.clone();
        }
        Ok(AuthResponse {
            token: self.token.borrow().clone(),
        })
    }

    async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.record("list_articles")?;
        Ok(self.articles.borrow().clone())
    }

    async fn get_article(&self, id: i64) -> Result<Article, ApiError> {
        self.record("get_article")?;
        self.find_article(id)
    }

    async fn add_comment(
        &self,
        article_id: i64,
        req: &CreateCommentRequest,
    ) -> Result<Comment, ApiError> {
        self.record("add_comment")?;
        let gate = self.comment_gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        let id = self.next_comment_id.get() + 100;
        self.next_comment_id.set(self.next_comment_id.get() + 1);
        let comment = Comment {
            comment_id: id,
            content: req.content.clone(),
            created_at: None,
            author: "me".to_string(),
        };
        let mut articles = self.articles.borrow_mut();
        let article = articles
            .iter_mut()
            .find(|a| a.article_id == article_id)
            .ok_or(ApiError::NotFound { body: None })?;
        article.comments.push(comment.clone());
        Ok(comment)
    }

    async fn create_article(&self, req: &CreateArticleRequest) -> Result<Article, ApiError> {
        self.record("create_article")?;
        let subject = self
            .subjects
            .borrow()
            .iter()
            .find(|s| s.subject_id == req.subject_id)
            .cloned()
            .ok_or(ApiError::NotFound { body: None })?;
        let id = self.articles.borrow().len() as i64 + 1;
        let article = Article {
            article_id: id,
            title: req.title.clone(),
            content: req.content.clone(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            author: author(),
            subject,
            comments: Vec::new(),
        };
        self.articles.borrow_mut().push(article.clone());
        Ok(article)
    }

    async fn list_subjects(&self, subscribed: Option<bool>) -> Result<Vec<Subject>, ApiError> {
        self.record("list_subjects")?;
        Ok(self
            .subjects
            .borrow()
            .iter()
            .filter(|s| subscribed.map_or(true, |want| s.subscribed == want))
            .cloned()
            .collect())
    }

    async fn subscribe(&self, subject_id: i64) -> Result<(), ApiError> {
        self.record("subscribe")?;
        for subject in self.subjects.borrow_mut().iter_mut() {
            if subject.subject_id == subject_id {
                subject.subscribed = true;
            }
        }
        Ok(())
    }

    async fn unsubscribe(&self, subject_id: i64) -> Result<(), ApiError> {
        self.record("unsubscribe")?;
        if let Some(profile) = self.profile.borrow_mut().as_mut() {
            profile.subscriptions.retain(|s| s.subject_id != subject_id);
        }
        Ok(())
    }
}

/// Records every toast
#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

/// Answers every prompt with a fixed choice and records what was asked
pub struct ScriptedPrompt {
    answer: bool,
    pub asked: RefCell<Vec<(String, String)>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        self.asked
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
        self.answer
    }
}

pub fn author() -> Author {
    Author {
        user_id: 1,
        email: "alice@example.com".to_string(),
        username: "alice".to_string(),
    }
}

pub fn subject(id: i64, name: &str, subscribed: bool) -> Subject {
    Subject {
        subject_id: id,
        name: name.to_string(),
        description: format!("All about {}", name),
        subscribed,
    }
}

pub fn comment(id: i64, author: &str, content: &str) -> Comment {
    Comment {
        comment_id: id,
        content: content.to_string(),
        created_at: None,
        author: author.to_string(),
    }
}

pub fn article(id: i64, created_at: &str, comments: Vec<Comment>) -> Article {
    Article {
        article_id: id,
        title: format!("Article {}", id),
        content: "Body".to_string(),
        created_at: created_at.to_string(),
        author: author(),
        subject: subject(1, "Rust", true),
        comments,
    }
}

pub fn profile(subscriptions: &[(i64, &str)]) -> UserProfile {
    UserProfile {
        user_id: 1,
        email: "alice@example.com".to_string(),
        username: "alice".to_string(),
        subscriptions: subscriptions
            .iter()
            .enumerate()
            .map(|(i, (id, name))| UserSubscription {
                subscription_id: i as i64 + 1,
                subject_id: *id,
                subject_name: name.to_string(),
                subject_description: String::new(),
            })
            .collect(),
    }
}

pub fn validation_error(field: &str, message: &str) -> ApiError {
    ApiError::Server {
        status: 400,
        body: Some(serde_json::json!({
            "status": 400,
            "message": "Invalid request",
            "errors": { field: message },
        })),
    }
}
