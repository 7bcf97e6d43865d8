//! View-owned state and the mutation helper built on it.
//!
//! A view owns a `ViewCell`; async work holds only a `ViewRef`. When the
//! view goes away before a response arrives, the response is dropped and
//! the operation reports `Outcome::Detached` instead of failing.

use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};

use shared::ApiError;

use crate::error::NormalizedError;

type ChangeHook = Rc<dyn Fn()>;

struct ViewInner<T> {
    state: RefCell<T>,
    on_change: RefCell<Option<ChangeHook>>,
}

/// Strong handle to a view's state
pub struct ViewCell<T> {
    inner: Rc<ViewInner<T>>,
}

impl<T> Clone for ViewCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for ViewCell<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> ViewCell<T> {
    pub fn new(state: T) -> Self {
        Self {
            inner: Rc::new(ViewInner {
                state: RefCell::new(state),
                on_change: RefCell::new(None),
            }),
        }
    }

    /// Hook called after every update (e.g. to schedule a re-render)
    pub fn set_on_change(&self, hook: impl Fn() + 'static) {
        *self.inner.on_change.borrow_mut() = Some(Rc::new(hook));
    }

    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        apply(&self.inner, f)
    }

    /// Weak handle for async work
    pub fn handle(&self) -> ViewRef<T> {
        ViewRef {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<T: Clone> ViewCell<T> {
    pub fn snapshot(&self) -> T {
        self.inner.state.borrow().clone()
    }
}

fn apply<T, R>(inner: &ViewInner<T>, f: impl FnOnce(&mut T) -> R) -> R {
    let result = f(&mut inner.state.borrow_mut());
    let hook = inner.on_change.borrow().clone();
    if let Some(hook) = hook {
        hook();
    }
    result
}

/// Weak handle to a view's state; every access returns `None` once the
/// view is gone.
pub struct ViewRef<T> {
    inner: Weak<ViewInner<T>>,
}

impl<T> Clone for ViewRef<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> ViewRef<T> {
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let inner = self.inner.upgrade()?;
        let result = f(&inner.state.borrow());
        Some(result)
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        match self.inner.upgrade() {
            Some(inner) => Some(apply(&inner, f)),
            None => {
                log::debug!("View dropped before response; discarding");
                None
            }
        }
    }
}

/// Why a submission was refused without issuing a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Input shorter than the minimum
    TooShort,
    /// A previous submission from the same form is still pending
    InFlight,
    /// The data the request depends on has not loaded
    NotReady,
    /// Form validation failed on the named field
    Invalid(&'static str),
}

/// Result of a controller operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    /// Server confirmed and local state now reflects it
    Committed(T),
    /// Nothing to do (already in the requested state)
    Skipped,
    /// The user declined the confirmation prompt
    Declined,
    /// Refused locally, no request issued
    Rejected(Rejection),
    /// Request failed; the view's error state was updated
    Failed(NormalizedError),
    /// The view went away before the response arrived
    Detached,
}

impl<T> Outcome<T> {
    pub fn is_committed(&self) -> bool {
        matches!(self, Outcome::Committed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Committed(value) => Outcome::Committed(f(value)),
            Outcome::Skipped => Outcome::Skipped,
            Outcome::Declined => Outcome::Declined,
            Outcome::Rejected(rejection) => Outcome::Rejected(rejection),
            Outcome::Failed(err) => Outcome::Failed(err),
            Outcome::Detached => Outcome::Detached,
        }
    }
}

/// Confirm-then-commit: await `request`, then apply `commit` on success or
/// `rollback` with the normalized error on failure. Local state is never
/// touched before the server answers.
pub async fn commit_after<T, R, V>(
    view: &ViewRef<T>,
    request: impl Future<Output = Result<R, ApiError>>,
    commit: impl FnOnce(&mut T, R) -> V,
    rollback: impl FnOnce(&mut T, &NormalizedError),
) -> Outcome<V> {
    match request.await {
        Ok(response) => match view.update(|state| commit(state, response)) {
            Some(value) => Outcome::Committed(value),
            None => Outcome::Detached,
        },
        Err(err) => {
            log::warn!("Request failed: {}", err);
            let normalized = NormalizedError::from(&err);
            match view.update(|state| rollback(state, &normalized)) {
                Some(()) => Outcome::Failed(normalized),
                None => Outcome::Detached,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn update_runs_change_hook() {
        let cell = ViewCell::new(0);
        let renders = Rc::new(Cell::new(0));
        let renders_clone = renders.clone();
        cell.set_on_change(move || renders_clone.set(renders_clone.get() + 1));

        cell.update(|v| *v += 1);
        cell.handle().update(|v| *v += 1);

        assert_eq!(cell.snapshot(), 2);
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn hook_may_read_state() {
        let cell = ViewCell::new(1);
        let reader = cell.handle();
        let seen = Rc::new(Cell::new(0));
        let seen_clone = seen.clone();
        cell.set_on_change(move || {
            seen_clone.set(reader.read(|v| *v).unwrap_or_default());
        });
        cell.update(|v| *v = 9);
        assert_eq!(seen.get(), 9);
    }

    #[test]
    fn dead_view_ignores_updates() {
        let cell = ViewCell::new(String::from("a"));
        let handle = cell.handle();
        drop(cell);
        assert!(!handle.is_alive());
        assert_eq!(handle.update(|s| s.push('b')), None);
        assert_eq!(handle.read(|s| s.len()), None);
    }

    #[tokio::test]
    async fn commit_after_success_applies_commit() {
        let cell = ViewCell::new(Vec::<i32>::new());
        let outcome = commit_after(
            &cell.handle(),
            async { Ok::<_, ApiError>(5) },
            |state, value| state.push(value),
            |_, _| panic!("no rollback on success"),
        )
        .await;
        assert_eq!(outcome, Outcome::Committed(()));
        assert_eq!(cell.snapshot(), vec![5]);
    }

    #[tokio::test]
    async fn commit_after_failure_applies_rollback() {
        let cell = ViewCell::new(None::<String>);
        let outcome = commit_after(
            &cell.handle(),
            async {
                Err::<(), _>(ApiError::Server {
                    status: 409,
                    body: Some(serde_json::json!({"message": "Already subscribed"})),
                })
            },
            |_, _| (),
            |state, err| *state = Some(err.message.clone()),
        )
        .await;
        assert!(matches!(outcome, Outcome::Failed(ref e) if e.message == "Already subscribed"));
        assert_eq!(cell.snapshot().as_deref(), Some("Already subscribed"));
    }

    #[tokio::test]
    async fn commit_after_with_dropped_view_is_detached() {
        let cell = ViewCell::new(0);
        let handle = cell.handle();
        drop(cell);
        let outcome = commit_after(
            &handle,
            async { Ok::<_, ApiError>(1) },
            |state, v| *state = v,
            |_, _| (),
        )
        .await;
        assert_eq!(outcome, Outcome::Detached);
    }
}
