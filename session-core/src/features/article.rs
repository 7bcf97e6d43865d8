//! Article detail page: the article, its comment carousel and the comment
//! form.

use shared::api::MddApi;
use shared::{Article, CreateCommentRequest};

use crate::config::MIN_COMMENT_LENGTH;
use crate::cursor::{CommentCursor, CommentEntry};
use crate::surface::Notifier;
use crate::view::{commit_after, Outcome, Rejection, ViewRef};

pub const LOAD_ERROR: &str = "Could not load article";
pub const COMMENT_ADDED: &str = "Comment added";

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleState {
    pub article: Option<Article>,
    pub cursor: CommentCursor,
    /// Comment form input
    pub draft: String,
    pub submitting: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ArticleState {
    fn default() -> Self {
        Self {
            article: None,
            cursor: CommentCursor::default(),
            draft: String::new(),
            submitting: false,
            loading: true,
            error: None,
        }
    }
}

impl ArticleState {
    /// Whether the submit button should be enabled
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.article.is_some() && comment_long_enough(&self.draft)
    }
}

/// Route parameter to article id. `None` (missing, zero or garbage) means
/// the page should redirect back to the feed.
pub fn parse_article_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id != 0)
}

pub fn comment_long_enough(draft: &str) -> bool {
    draft.trim().chars().count() > MIN_COMMENT_LENGTH
}

fn thread_of(article: &Article) -> Vec<CommentEntry> {
    article.comments.iter().map(CommentEntry::from).collect()
}

pub async fn load_article<A: MddApi>(api: &A, view: &ViewRef<ArticleState>, id: i64) -> Outcome {
    if view.update(|s| s.loading = true).is_none() {
        return Outcome::Detached;
    }
    commit_after(
        view,
        api.get_article(id),
        |s, article| {
            s.cursor.load(thread_of(&article));
            s.article = Some(article);
            s.error = None;
            s.loading = false;
        },
        |s, _| {
            s.error = Some(LOAD_ERROR.to_string());
            s.loading = false;
        },
    )
    .await
}

/// Post the draft as a comment.
///
/// Single-flight per view: a second call while one is pending is rejected
/// without a request. On success the draft is cleared, the article is
/// re-fetched and the cursor moves to the newest comment. On failure the
/// draft stays as typed.
pub async fn submit_comment<A: MddApi, N: Notifier>(
    api: &A,
    notifier: &N,
    view: &ViewRef<ArticleState>,
) -> Outcome {
    let started = view.update(|s| {
        let Some(article_id) = s.article.as_ref().map(|a| a.article_id) else {
            return Err(Rejection::NotReady);
        };
        if s.submitting {
            return Err(Rejection::InFlight);
        }
        if !comment_long_enough(&s.draft) {
            return Err(Rejection::TooShort);
        }
        s.submitting = true;
        Ok((article_id, s.draft.trim().to_string()))
    });
    let (article_id, content) = match started {
        None => return Outcome::Detached,
        Some(Err(rejection)) => {
            log::debug!("Comment not submitted: {:?}", rejection);
            return Outcome::Rejected(rejection);
        }
        Some(Ok(started)) => started,
    };

    let request = CreateCommentRequest { content };
    let outcome = commit_after(
        view,
        api.add_comment(article_id, &request),
        |s, _| {
            s.submitting = false;
            s.draft.clear();
        },
        |s, _| s.submitting = false,
    )
    .await;

    match outcome {
        Outcome::Committed(()) => {
            match api.get_article(article_id).await {
                Ok(article) => {
                    let updated = view.update(|s| {
                        s.cursor.load_latest(thread_of(&article));
                        s.article = Some(article);
                    });
                    if updated.is_none() {
                        return Outcome::Detached;
                    }
                }
                Err(err) => log::warn!("Comment posted but reload failed: {}", err),
            }
            if !view.is_alive() {
                return Outcome::Detached;
            }
            notifier.success(COMMENT_ADDED);
            Outcome::Committed(())
        }
        Outcome::Failed(err) => {
            notifier.error(&err.message);
            Outcome::Failed(err)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{article, comment, FakeApi, RecordingNotifier};
    use crate::view::ViewCell;
    use shared::ApiError;

    fn api_with_article() -> FakeApi {
        let api = FakeApi::new();
        *api.articles.borrow_mut() = vec![article(
            7,
            "2025-01-01T00:00:00Z",
            vec![comment(1, "bob", "First!"), comment(2, "carol", "Nice read")],
        )];
        api
    }

    async fn loaded(api: &FakeApi) -> ViewCell<ArticleState> {
        let view = ViewCell::new(ArticleState::default());
        assert!(load_article(api, &view.handle(), 7).await.is_committed());
        view
    }

    #[test]
    fn article_id_parsing() {
        assert_eq!(parse_article_id(Some("12")), Some(12));
        assert_eq!(parse_article_id(Some("0")), None);
        assert_eq!(parse_article_id(Some("abc")), None);
        assert_eq!(parse_article_id(None), None);
    }

    #[test]
    fn comment_length_threshold_is_exclusive() {
        assert!(!comment_long_enough("abcde"));
        assert!(!comment_long_enough("   abcd   "));
        assert!(comment_long_enough("abcdef"));
    }

    #[tokio::test]
    async fn load_starts_cursor_at_first_comment() {
        let api = api_with_article();
        let view = loaded(&api).await;
        let state = view.snapshot();
        assert_eq!(state.cursor.index(), 0);
        assert_eq!(state.cursor.current().map(|c| c.author.as_str()), Some("bob"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn load_missing_article_sets_banner() {
        let api = api_with_article();
        let view = ViewCell::new(ArticleState::default());
        let outcome = load_article(&api, &view.handle(), 99).await;
        assert!(matches!(outcome, Outcome::Failed(_)));
        assert_eq!(view.snapshot().error.as_deref(), Some(LOAD_ERROR));
    }

    #[tokio::test]
    async fn short_comment_is_rejected_locally() {
        let api = api_with_article();
        let view = loaded(&api).await;
        view.update(|s| s.draft = "abcd".to_string());
        let notifier = RecordingNotifier::default();

        let outcome = submit_comment(&api, &notifier, &view.handle()).await;

        assert_eq!(outcome, Outcome::Rejected(Rejection::TooShort));
        assert_eq!(api.call_count("add_comment"), 0);
        assert!(!view.snapshot().submitting);
    }

    #[tokio::test]
    async fn successful_comment_reloads_and_shows_newest() {
        let api = api_with_article();
        let view = loaded(&api).await;
        view.update(|s| s.draft = "  Great article  ".to_string());
        let notifier = RecordingNotifier::default();

        let outcome = submit_comment(&api, &notifier, &view.handle()).await;

        assert_eq!(outcome, Outcome::Committed(()));
        let state = view.snapshot();
        assert!(state.draft.is_empty());
        assert!(!state.submitting);
        assert_eq!(state.cursor.len(), 3);
        assert_eq!(state.cursor.index(), 2);
        assert_eq!(
            state.cursor.current().map(|c| c.content.as_str()),
            Some("Great article")
        );
        assert_eq!(notifier.successes.borrow().as_slice(), [COMMENT_ADDED.to_string()]);
        assert_eq!(api.call_count("get_article"), 2);
    }

    #[tokio::test]
    async fn failed_comment_keeps_draft() {
        let api = api_with_article();
        let view = loaded(&api).await;
        view.update(|s| s.draft = "Great article".to_string());
        api.fail_next("add_comment", ApiError::Network("timeout".into()));
        let notifier = RecordingNotifier::default();

        let outcome = submit_comment(&api, &notifier, &view.handle()).await;

        assert!(matches!(outcome, Outcome::Failed(_)));
        let state = view.snapshot();
        assert_eq!(state.draft, "Great article");
        assert!(!state.submitting);
        assert_eq!(state.cursor.len(), 2);
        assert_eq!(notifier.errors.borrow().len(), 1);
    }

    #[tokio::test]
    async fn reload_failure_still_reports_success() {
        let api = api_with_article();
        let view = loaded(&api).await;
        view.update(|s| s.draft = "Great article".to_string());
        api.fail_next("get_article", ApiError::Network("timeout".into()));
        let notifier = RecordingNotifier::default();

        let outcome = submit_comment(&api, &notifier, &view.handle()).await;

        assert_eq!(outcome, Outcome::Committed(()));
        assert!(view.snapshot().draft.is_empty());
        assert_eq!(notifier.successes.borrow().len(), 1);
    }

    #[tokio::test]
    async fn second_submit_while_pending_is_rejected() {
        let api = api_with_article();
        let view = loaded(&api).await;
        view.update(|s| s.draft = "Great article".to_string());
        let notifier = RecordingNotifier::default();
        let gate = api.hold_next_comment();
        let handle = view.handle();

        let first = submit_comment(&api, &notifier, &handle);
        let second = async {
            let outcome = submit_comment(&api, &notifier, &handle).await;
            assert!(view.snapshot().submitting);
            let _ = gate.send(());
            outcome
        };
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, Outcome::Committed(()));
        assert_eq!(second, Outcome::Rejected(Rejection::InFlight));
        assert_eq!(api.call_count("add_comment"), 1);
        assert!(!view.snapshot().submitting);
    }

    #[tokio::test]
    async fn submit_before_load_is_not_ready() {
        let api = api_with_article();
        let view = ViewCell::new(ArticleState {
            draft: "Great article".to_string(),
            ..ArticleState::default()
        });
        let outcome = submit_comment(&api, &RecordingNotifier::default(), &view.handle()).await;
        assert_eq!(outcome, Outcome::Rejected(Rejection::NotReady));
    }

    #[tokio::test]
    async fn response_after_view_dropped_is_discarded() {
        let api = api_with_article();
        let view = loaded(&api).await;
        view.update(|s| s.draft = "Great article".to_string());
        let notifier = RecordingNotifier::default();
        let gate = api.hold_next_comment();
        let handle = view.handle();

        let pending = submit_comment(&api, &notifier, &handle);
        let leave = async {
            drop(view);
            let _ = gate.send(());
        };
        let (outcome, ()) = tokio::join!(pending, leave);

        assert_eq!(outcome, Outcome::Detached);
        assert!(notifier.successes.borrow().is_empty());
    }
}
