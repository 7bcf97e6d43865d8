//! Profile page: account details and the subscription list.

use shared::api::MddApi;
use shared::{UpdateProfileRequest, UserSubscription};

use crate::features::forms::{has_min_chars, is_strong_password, is_valid_email, MIN_USERNAME_LENGTH};
use crate::session::SessionStore;
use crate::surface::{ConfirmPrompt, Notifier};
use crate::view::{commit_after, Outcome, Rejection, ViewRef};

pub const LOAD_ERROR: &str = "Could not load profile";
pub const SAVED_MESSAGE: &str = "Profile updated";
pub const UNSUBSCRIBE_TITLE: &str = "Unsubscribe";
pub const UNSUBSCRIBED_MESSAGE: &str = "Unsubscribed";

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState {
    pub username: String,
    pub email: String,
    pub subscriptions: Vec<UserSubscription>,
    pub loading: bool,
    /// Banner shown when the profile could not be loaded
    pub error: Option<String>,
    /// Normalized message from the last failed save
    pub api_error: Option<String>,
    pub saving: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            subscriptions: Vec::new(),
            loading: true,
            error: None,
            api_error: None,
            saving: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl ProfileForm {
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
}

pub fn unsubscribe_message(subject_name: &str) -> String {
    format!("Do you want to unsubscribe from \"{}\"?", subject_name)
}

pub async fn load_profile<A: MddApi>(api: &A, view: &ViewRef<ProfileState>) -> Outcome {
    if view.update(|s| s.loading = true).is_none() {
        return Outcome::Detached;
    }
    commit_after(
        view,
        api.get_profile(),
        |s, profile| {
            s.username = profile.username;
            s.email = profile.email;
            s.subscriptions = profile.subscriptions;
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

/// Save account details. The server answers with a fresh token, which
/// replaces the stored one.
pub async fn save_profile<A: MddApi, N: Notifier>(
    api: &A,
    session: &SessionStore,
    notifier: &N,
    view: &ViewRef<ProfileState>,
    form: &ProfileForm,
) -> Outcome {
    if let Err(rejection) = form.validate() {
        return Outcome::Rejected(rejection);
    }
    let started = view.update(|s| {
        if s.saving {
            return false;
        }
        s.saving = true;
        s.api_error = None;
        true
    });
    match started {
        None => return Outcome::Detached,
        Some(false) => return Outcome::Rejected(Rejection::InFlight),
        Some(true) => {}
    }

    let request = UpdateProfileRequest {
        email: form.email.trim().to_string(),
        username: form.username.trim().to_string(),
        password: form.password.clone(),
    };
    let outcome = commit_after(
        view,
        api.update_profile(&request),
        |s, response| {
            s.saving = false;
            s.username = request.username.clone();
            s.email = request.email.clone();
            response.token
        },
        |s, err| {
            s.saving = false;
            s.api_error = Some(err.message.clone());
        },
    )
    .await;

    match &outcome {
        Outcome::Committed(token) => {
            session.login(token);
            notifier.success(SAVED_MESSAGE);
        }
        Outcome::Failed(err) => notifier.error(&err.message),
        _ => {}
    }
    outcome.map(|_| ())
}

/// Confirm, then unsubscribe. The entry leaves the list only once the
/// server has confirmed; declining issues no request.
pub async fn unsubscribe<A: MddApi, P: ConfirmPrompt, N: Notifier>(
    api: &A,
    prompt: &P,
    notifier: &N,
    view: &ViewRef<ProfileState>,
    subject_id: i64,
) -> Outcome {
    let name = view.read(|s| {
        s.subscriptions
            .iter()
            .find(|sub| sub.subject_id == subject_id)
            .map(|sub| sub.subject_name.clone())
    });
    let name = match name {
        None => return Outcome::Detached,
        Some(None) => return Outcome::Skipped,
        Some(Some(name)) => name,
    };

    if !prompt
        .confirm(UNSUBSCRIBE_TITLE, &unsubscribe_message(&name))
        .await
    {
        return Outcome::Declined;
    }
    if !view.is_alive() {
        return Outcome::Detached;
    }

    let outcome = commit_after(
        view,
        api.unsubscribe(subject_id),
        |s, ()| s.subscriptions.retain(|sub| sub.subject_id != subject_id),
        |_, _| {},
    )
    .await;

    match &outcome {
        Outcome::Committed(()) => notifier.success(UNSUBSCRIBED_MESSAGE),
        Outcome::Failed(err) => notifier.error(&err.message),
        _ => {}
    }
    outcome
}
