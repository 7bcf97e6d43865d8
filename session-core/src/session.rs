//! Process-wide session store.
//!
//! Constructed once at startup and shared by cloning (clones share state).
//! Holds login status and the header chrome, both observable with replay.

use std::rc::Rc;

use crate::config::TOKEN_KEY;
use crate::observable::{Observable, Subscription};
use crate::storage::KeyValueSlot;

/// Which parts of the header chrome are visible.
///
/// Member options are only ever shown inside a visible header, so the
/// three states cover every legal `(show_header, show_header_options)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    /// No header at all (landing page)
    Hidden,
    /// Header frame without member options (login, register)
    Frame,
    /// Header with member options (menu, profile, logout)
    Full,
}

impl Chrome {
    pub fn show_header(self) -> bool {
        !matches!(self, Chrome::Hidden)
    }

    pub fn show_header_options(self) -> bool {
        matches!(self, Chrome::Full)
    }

    /// Same header visibility, member options switched off
    pub fn without_options(self) -> Chrome {
        match self {
            Chrome::Full => Chrome::Frame,
            other => other,
        }
    }
}

struct SessionInner {
    slot: Rc<dyn KeyValueSlot>,
    logged_in: Observable<bool>,
    chrome: Observable<Chrome>,
}

/// Login status and header chrome for the whole client
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<SessionInner>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("logged_in", &self.is_logged_in())
            .field("chrome", &self.chrome())
            .finish()
    }
}

impl SessionStore {
    /// Read the persisted token once to decide the initial login status.
    /// Chrome starts hidden until the first navigation completes.
    pub fn new(slot: Rc<dyn KeyValueSlot>) -> Self {
        let logged_in = slot.get(TOKEN_KEY).is_some_and(|t| !t.is_empty());
        log::debug!("Session store initialized (logged_in={})", logged_in);
        Self {
            inner: Rc::new(SessionInner {
                slot,
                logged_in: Observable::new(logged_in),
                chrome: Observable::new(Chrome::Hidden),
            }),
        }
    }

    /// Persist `token` and switch to the logged-in state.
    ///
    /// Every observer has been notified when this returns. Turning member
    /// options on also shows the header frame if it was hidden.
    pub fn login(&self, token: &str) {
        self.inner.slot.set(TOKEN_KEY, token);
        self.inner.logged_in.set(true);
        self.inner.chrome.set(Chrome::Full);
        log::info!("Logged in");
    }

    /// Forget the token and hide member options. Header frame visibility
    /// is left to the route coordinator.
    pub fn logout(&self) {
        self.inner.slot.delete(TOKEN_KEY);
        self.inner.logged_in.set(false);
        let chrome = self.inner.chrome.get().without_options();
        self.inner.chrome.set(chrome);
        log::info!("Logged out");
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.logged_in.get()
    }

    /// The persisted bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.inner.slot.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn chrome(&self) -> Chrome {
        self.inner.chrome.get()
    }

    pub fn show_header(&self) -> bool {
        self.chrome().show_header()
    }

    pub fn show_header_options(&self) -> bool {
        self.chrome().show_header_options()
    }

    pub fn is_logged_in_observable(&self) -> &Observable<bool> {
        &self.inner.logged_in
    }

    pub fn chrome_observable(&self) -> &Observable<Chrome> {
        &self.inner.chrome
    }

    pub fn subscribe_show_header(&self, listener: impl Fn(bool) + 'static) -> Subscription {
        self.inner
            .chrome
            .subscribe(move |chrome| listener(chrome.show_header()))
    }

    pub fn subscribe_show_header_options(
        &self,
        listener: impl Fn(bool) + 'static,
    ) -> Subscription {
        self.inner
            .chrome
            .subscribe(move |chrome| listener(chrome.show_header_options()))
    }

    /// Only the route coordinator writes chrome
    pub(crate) fn set_chrome(&self, chrome: Chrome) {
        self.inner.chrome.set(chrome);
    }
}
