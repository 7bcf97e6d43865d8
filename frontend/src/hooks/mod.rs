//! Custom Yew hooks for the frontend application.
//!
//! These hooks connect components to the session core.

mod use_app;
mod use_session;
mod use_view;

pub use use_app::{use_app, AppContext};
pub use use_session::{use_chrome, use_logged_in};
pub use use_view::use_view;
