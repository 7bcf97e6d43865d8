//! Per-page controllers.
//!
//! Each controller is a set of async functions over a view's `ViewRef`,
//! generic over the API client so the browser, the CLI and the tests share
//! them. None of them returns an error: failures end up in the view's
//! error fields or in a toast, and the returned `Outcome` says which path
//! was taken.

pub mod article;
pub mod auth;
pub mod compose;
pub mod feed;
pub mod forms;
pub mod profile;
pub mod subjects;
