//! New article form.

use shared::api::MddApi;
use shared::{CreateArticleRequest, Subject};

use crate::features::forms::{has_min_chars, MIN_ARTICLE_LENGTH, MIN_TITLE_LENGTH};
use crate::view::{commit_after, Outcome, Rejection, ViewRef};

pub const LOAD_ERROR: &str = "Could not load your subjects";

#[derive(Debug, Clone, PartialEq)]
pub struct ComposeState {
    /// Subjects the user may post to (their subscriptions)
    pub subjects: Vec<Subject>,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for ComposeState {
    fn default() -> Self {
        Self {
            subjects: Vec::new(),
            loading: true,
            submitting: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleDraft {
    pub subject_id: Option<i64>,
    pub title: String,
    pub content: String,
}

impl ArticleDraft {
    pub fn validate(&self) -> Result<CreateArticleRequest, Rejection> {
        let Some(subject_id) = self.subject_id else {
            return Err(Rejection::Invalid("subjectId"));
        };
        let title = self.title.trim();
        if !has_min_chars(title, MIN_TITLE_LENGTH) {
            return Err(Rejection::Invalid("title"));
        }
        let content = self.content.trim();
        if !has_min_chars(content, MIN_ARTICLE_LENGTH) {
            return Err(Rejection::Invalid("content"));
        }
        Ok(CreateArticleRequest {
            title: title.to_string(),
            content: content.to_string(),
            subject_id,
        })
    }
}

pub async fn load_subscribed_subjects<A: MddApi>(
    api: &A,
    view: &ViewRef<ComposeState>,
) -> Outcome {
    if view.update(|s| s.loading = true).is_none() {
        return Outcome::Detached;
    }
    commit_after(
        view,
        api.list_subjects(Some(true)),
        |s, subjects| {
            s.subjects = subjects;
            s.loading = false;
        },
        |s, _| {
            s.error = Some(LOAD_ERROR.to_string());
            s.loading = false;
        },
    )
    .await
}

/// Create the article. `Committed` carries the new article's id for
/// navigation; a failure re-enables the form.
pub async fn publish<A: MddApi>(
    api: &A,
    view: &ViewRef<ComposeState>,
    draft: &ArticleDraft,
) -> Outcome<i64> {
    let request = match draft.validate() {
        Ok(request) => request,
        Err(rejection) => return Outcome::Rejected(rejection),
    };
    let started = view.update(|s| {
        if s.submitting {
            return false;
        }
        s.submitting = true;
        s.error = None;
        true
    });
    match started {
        None => return Outcome::Detached,
        Some(false) => return Outcome::Rejected(Rejection::InFlight),
        Some(true) => {}
    }

    commit_after(
        view,
        api.create_article(&request),
        |s, article| {
            s.submitting = false;
            article.article_id
        },
        |s, err| {
            s.submitting = false;
            s.error = Some(err.message.clone());
        },
    )
    .await
}
