//! Fixed client settings

/// Storage key of the persisted bearer token
pub const TOKEN_KEY: &str = "token";

/// Comments whose trimmed length is at or below this are rejected locally
pub const MIN_COMMENT_LENGTH: usize = 5;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3000;

/// Where the app lands after a successful login or registration
pub const POST_AUTH_ROUTE: &str = "/articles";

/// Paths that decide which header chrome is visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeRoutes {
    /// Landing page, rendered without any header
    pub root: String,
    /// Login page prefix, header without member options
    pub login: String,
    /// Registration page prefix, header without member options
    pub register: String,
}

impl Default for ChromeRoutes {
    fn default() -> Self {
        Self {
            root: "/".to_string(),
            login: "/login".to_string(),
            register: "/register".to_string(),
        }
    }
}
