use session_core::features::profile::{self, ProfileForm, ProfileState};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{DialogHandle, ToastHandle};
use crate::hooks::{use_app, use_view};

#[derive(Clone, Copy)]
enum Field {
    Username,
    Email,
    Password,
}

/// Account details form plus the list of subscriptions
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let app = use_app();
    let toasts = use_context::<ToastHandle>();
    let dialog = use_context::<DialogHandle>();
    let view = use_view(ProfileState::default);
    let form = use_state(ProfileForm::default);

    {
        let api = app.api.clone();
        let handle = view.handle();
        let form = form.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if profile::load_profile(&*api, &handle).await.is_committed() {
                    if let Some((username, email)) =
                        handle.read(|s| (s.username.clone(), s.email.clone()))
                    {
                        form.set(ProfileForm {
                            username,
                            email,
                            password: String::new(),
                        });
                    }
                }
            });
            || ()
        });
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            match field {
                Field::Username => next.username = input.value(),
                Field::Email => next.email = input.value(),
                Field::Password => next.password = input.value(),
            }
            form.set(next);
        })
    };

    let on_save = {
        let api = app.api.clone();
        let session = app.session.clone();
        let handle = view.handle();
        let form = form.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(toasts) = toasts.clone() else {
                log::warn!("No toast host mounted");
                return;
            };
            let api = api.clone();
            let session = session.clone();
            let handle = handle.clone();
            let submitted = (*form).clone();
            let form = form.clone();
            spawn_local(async move {
                let outcome =
                    profile::save_profile(&*api, &session, &toasts, &handle, &submitted).await;
                if outcome.is_committed() {
                    form.set(ProfileForm {
                        password: String::new(),
                        ..submitted
                    });
                }
            });
        })
    };

    let on_unsubscribe = {
        let api = app.api.clone();
        let handle = view.handle();
        Callback::from(move |subject_id: i64| {
            let (Some(toasts), Some(dialog)) = (toasts.clone(), dialog.clone()) else {
                log::warn!("Toast host or confirm dialog not mounted");
                return;
            };
            let api = api.clone();
            let handle = handle.clone();
            spawn_local(async move {
                profile::unsubscribe(&*api, &dialog, &toasts, &handle, subject_id).await;
            });
        })
    };

    let state = view.snapshot();
    let valid = form.validate().is_ok();

    if state.loading {
        return html! { <div class="loading">{ "Loading profile..." }</div> };
    }
    if let Some(error) = &state.error {
        return html! { <div class="error-banner">{ error }</div> };
    }

    html! {
        <div class="profile-page">
            <h1>{ "User profile" }</h1>
            <form class="profile-form" onsubmit={on_save}>
                <input type="text" value={form.username.clone()} oninput={on_input(Field::Username)} />
                <input type="email" value={form.email.clone()} oninput={on_input(Field::Email)} />
                <input
                    type="password"
                    placeholder="New password"
                    autocomplete="new-password"
                    value={form.password.clone()}
                    oninput={on_input(Field::Password)}
                />
                {
                    if let Some(error) = &state.api_error {
                        html! { <div class="form-error">{ error }</div> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="primary" disabled={!valid || state.saving}>
                    { "Save" }
                </button>
            </form>

            <hr />

            <h2>{ "Subscriptions" }</h2>
            if state.subscriptions.is_empty() {
                <p class="empty">{ "You are not subscribed to any theme yet." }</p>
            } else {
                <div class="subject-grid">
                    { for state.subscriptions.iter().map(|sub| {
                        let id = sub.subject_id;
                        let onclick = on_unsubscribe.reform(move |_: MouseEvent| id);
                        html! {
                            <div class="subject-card" key={id}>
                                <h3>{ &sub.subject_name }</h3>
                                <p>{ &sub.subject_description }</p>
                                <button class="primary" {onclick}>{ "Unsubscribe" }</button>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
