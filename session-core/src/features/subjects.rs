//! Subject list and subscription.

use shared::api::MddApi;
use shared::Subject;

use crate::view::{commit_after, Outcome, ViewRef};

pub const LOAD_ERROR: &str = "Could not load subjects";

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectsState {
    pub subjects: Vec<Subject>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for SubjectsState {
    fn default() -> Self {
        Self {
            subjects: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Load every subject with the caller's subscription flag
pub async fn load_subjects<A: MddApi>(api: &A, view: &ViewRef<SubjectsState>) -> Outcome {
    if view.update(|s| s.loading = true).is_none() {
        return Outcome::Detached;
    }
    commit_after(
        view,
        api.list_subjects(None),
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

/// Subscribe to a subject.
///
/// Already-subscribed (or unknown) subjects are skipped without a request.
/// The flag flips only after the server confirms; a failure leaves the
/// subject untouched and sets the view's error.
pub async fn subscribe<A: MddApi>(
    api: &A,
    view: &ViewRef<SubjectsState>,
    subject_id: i64,
) -> Outcome {
    let current = view.read(|s| {
        s.subjects
            .iter()
            .find(|subject| subject.subject_id == subject_id)
            .map(|subject| subject.subscribed)
    });
    match current {
        None => return Outcome::Detached,
        Some(None) | Some(Some(true)) => return Outcome::Skipped,
        Some(Some(false)) => {}
    }

    commit_after(
        view,
        api.subscribe(subject_id),
        |s, ()| {
            if let Some(subject) = s.subjects.iter_mut().find(|x| x.subject_id == subject_id) {
                subject.subscribed = true;
            }
        },
        |s, err| s.error = Some(err.message.clone()),
    )
    .await
}
