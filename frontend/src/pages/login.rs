use session_core::features::auth::{self, AuthFormState, LoginForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_app, use_view};
use crate::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let app = use_app();
    let view = use_view(AuthFormState::default);
    let form = use_state(LoginForm::default);
    let navigator = use_navigator();

    let on_identifier = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                username_or_email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let api = app.api.clone();
        let session = app.session.clone();
        let handle = view.handle();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let session = session.clone();
            let handle = handle.clone();
            let navigator = navigator.clone();
            let form = (*form).clone();
            spawn_local(async move {
                let outcome = auth::login(&*api, &session, &handle, &form).await;
                if outcome.is_committed() {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Articles);
                    }
                }
            });
        })
    };

    let state = view.snapshot();
    let valid = form.validate().is_ok();

    html! {
        <div class="auth-page">
            <h1>{ "Log in" }</h1>
            <form class="auth-form" onsubmit={on_submit}>
                <label>
                    { "Username or email" }
                    <input
                        type="text"
                        autocomplete="username"
                        value={form.username_or_email.clone()}
                        oninput={on_identifier}
                    />
                </label>
                <label>
                    { "Password" }
                    <input
                        type="password"
                        autocomplete="current-password"
                        value={form.password.clone()}
                        oninput={on_password}
                    />
                </label>
                {
                    if let Some(error) = &state.api_error {
                        html! { <div class="form-error">{ error }</div> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="primary" disabled={!valid || state.submitting}>
                    { if state.submitting { "Logging in..." } else { "Log in" } }
                </button>
            </form>
        </div>
    }
}
