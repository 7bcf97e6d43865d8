//! Article feed.

use std::cmp::Ordering;

use shared::api::MddApi;
use shared::Article;

use crate::view::{commit_after, Outcome, ViewRef};

pub const LOAD_ERROR: &str = "Could not load articles";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub articles: Vec<Article>,
    pub order: SortOrder,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            order: SortOrder::default(),
            loading: true,
            error: None,
        }
    }
}

impl FeedState {
    /// Switch sort direction and re-sort the loaded articles
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        sort_by_date(&mut self.articles, self.order);
    }
}

fn compare_dates(a: &Article, b: &Article) -> Ordering {
    match (a.created_at_utc(), b.created_at_utc()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.created_at.cmp(&b.created_at),
    }
}

/// Stable sort by creation date. Unparseable dates compare as strings.
pub fn sort_by_date(articles: &mut [Article], order: SortOrder) {
    articles.sort_by(|a, b| match order {
        SortOrder::Asc => compare_dates(a, b),
        SortOrder::Desc => compare_dates(b, a),
    });
}

pub async fn load_feed<A: MddApi>(api: &A, view: &ViewRef<FeedState>) -> Outcome {
    if view.update(|s| s.loading = true).is_none() {
        return Outcome::Detached;
    }
    commit_after(
        view,
        api.list_articles(),
        |s, mut articles| {
            sort_by_date(&mut articles, s.order);
            s.articles = articles;
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
