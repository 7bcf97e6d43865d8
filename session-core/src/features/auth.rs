//! Login, registration and logout.

use shared::api::MddApi;
use shared::{LoginRequest, RegisterRequest};

use crate::features::forms::{
    has_min_chars, is_strong_password, is_valid_email, MIN_USERNAME_LENGTH,
};
use crate::session::SessionStore;
use crate::surface::ConfirmPrompt;
use crate::view::{commit_after, Outcome, Rejection, ViewRef};

pub const LOGOUT_TITLE: &str = "Logout";
pub const LOGOUT_MESSAGE: &str = "Do you want to log out?";

/// State of a login or registration form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthFormState {
    /// Normalized message from the last failed attempt
    pub api_error: Option<String>,
    pub submitting: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username_or_email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), Rejection> {
        if !has_min_chars(self.username_or_email.trim(), MIN_USERNAME_LENGTH) {
            return Err(Rejection::Invalid("usernameOrEmail"));
        }
        if !is_strong_password(&self.password) {
            return Err(Rejection::Invalid("password"));
        }
        Ok(())
    }

    fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username_or_email: self.username_or_email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), Rejection> {
        if !has_min_chars(self.username.trim(), MIN_USERNAME_LENGTH) {
            return Err(Rejection::Invalid("username"));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(Rejection::Invalid("email"));
        }
        if !is_strong_password(&self.password) {
            return Err(Rejection::Invalid("password"));
        }
        Ok(())
    }

    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Mark the form as submitting, or say why it cannot submit
fn begin(view: &ViewRef<AuthFormState>) -> Result<(), Outcome> {
    match view.update(|s| {
        if s.submitting {
            return false;
        }
        s.submitting = true;
        s.api_error = None;
        true
    }) {
        Some(true) => Ok(()),
        Some(false) => Err(Outcome::Rejected(Rejection::InFlight)),
        None => Err(Outcome::Detached),
    }
}

/// Finish an auth request: on success the token goes to the session store
async fn finish(
    session: &SessionStore,
    view: &ViewRef<AuthFormState>,
    request: impl std::future::Future<Output = Result<shared::AuthResponse, shared::ApiError>>,
) -> Outcome {
    let outcome = commit_after(
        view,
        request,
        |s, response| {
            s.submitting = false;
            response.token
        },
        |s, err| {
            s.submitting = false;
            s.api_error = Some(err.message.clone());
        },
    )
    .await;

    if let Outcome::Committed(token) = &outcome {
        session.login(token);
    }
    outcome.map(|_| ())
}

/// Log in. On `Committed` the session is logged in and the caller should
/// navigate to `config::POST_AUTH_ROUTE`.
pub async fn login<A: MddApi>(
    api: &A,
    session: &SessionStore,
    view: &ViewRef<AuthFormState>,
    form: &LoginForm,
) -> Outcome {
    if let Err(rejection) = form.validate() {
        return Outcome::Rejected(rejection);
    }
    if let Err(outcome) = begin(view) {
        return outcome;
    }
    let request = form.to_request();
    finish(session, view, api.login(&request)).await
}

/// Create an account and log straight in with the returned token
pub async fn register<A: MddApi>(
    api: &A,
    session: &SessionStore,
    view: &ViewRef<AuthFormState>,
    form: &RegisterForm,
) -> Outcome {
    if let Err(rejection) = form.validate() {
        return Outcome::Rejected(rejection);
    }
    if let Err(outcome) = begin(view) {
        return outcome;
    }
    let request = form.to_request();
    finish(session, view, api.register(&request)).await
}

/// Ask for confirmation, then log out. On `Committed` the caller should
/// navigate to the landing page.
pub async fn confirm_logout<P: ConfirmPrompt>(prompt: &P, session: &SessionStore) -> Outcome {
    if !prompt.confirm(LOGOUT_TITLE, LOGOUT_MESSAGE).await {
        return Outcome::Declined;
    }
    session.logout();
    Outcome::Committed(())
}
