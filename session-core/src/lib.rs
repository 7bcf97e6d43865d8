//! MDD Session Core
//!
//! The client-side coordinator behind the MDD browser app and CLI. It owns
//! everything in the client that has invariants or ordering concerns; views
//! and transports are thin adapters around it.
//!
//! # Overview
//!
//! The library provides:
//! - `SessionStore` - login status and header chrome, observable with replay
//! - `RouteChromeCoordinator` - maps completed navigations onto chrome flags
//! - `normalize` / `NormalizedError` - one display string for any failure payload
//! - `ViewCell` / `ViewRef` - view-owned state that async responses update
//!   only while the view is alive
//! - `CommentCursor` - bounded index over an article's comment thread
//! - `features` - the per-page controllers (auth, feed, article detail,
//!   article creation, subjects, profile)
//!
//! The core is single-threaded: shared state lives in `Rc`/`RefCell` and all
//! notifications are delivered synchronously on the caller's turn.
//!
//! # Example
//!
//! ```ignore
//! use session_core::{MemorySlot, RouteChromeCoordinator, SessionStore, ChromeRoutes};
//! use std::rc::Rc;
//!
//! let session = SessionStore::new(Rc::new(MemorySlot::default()));
//! let chrome = RouteChromeCoordinator::new(session.clone(), ChromeRoutes::default());
//!
//! let _sub = session.is_logged_in_observable().subscribe(|logged_in| {
//!     println!("logged in: {}", logged_in);
//! });
//!
//! chrome.on_navigation_end("/login");
//! session.login("jwt-token");
//! assert!(session.show_header_options());
//! ```

pub mod chrome;
pub mod config;
pub mod cursor;
pub mod error;
pub mod features;
pub mod observable;
pub mod session;
pub mod storage;
pub mod surface;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types at crate root
pub use chrome::{classify, RouteChromeCoordinator};
pub use config::ChromeRoutes;
pub use cursor::{CommentCursor, CommentEntry};
pub use error::{normalize, NormalizedError, GENERIC_ERROR_MESSAGE};
pub use observable::{Observable, Subscription, SubscriptionStream};
pub use session::{Chrome, SessionStore};
pub use storage::{KeyValueSlot, MemorySlot};
pub use surface::{ConfirmPrompt, Notifier};
pub use view::{Outcome, Rejection, ViewCell, ViewRef};
