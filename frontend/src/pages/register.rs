use session_core::features::auth::{self, AuthFormState, RegisterForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_app, use_view};
use crate::Route;

#[derive(Clone, Copy)]
enum Field {
    Username,
    Email,
    Password,
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let app = use_app();
    let view = use_view(AuthFormState::default);
    let form = use_state(RegisterForm::default);
    let navigator = use_navigator();

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
                let outcome = auth::register(&*api, &session, &handle, &form).await;
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
            <h1>{ "Register" }</h1>
            <form class="auth-form" onsubmit={on_submit}>
                <label>
                    { "Username" }
                    <input type="text" value={form.username.clone()} oninput={on_input(Field::Username)} />
                </label>
                <label>
                    { "Email address" }
                    <input type="email" value={form.email.clone()} oninput={on_input(Field::Email)} />
                </label>
                <label>
                    { "Password" }
                    <input
                        type="password"
                        autocomplete="new-password"
                        value={form.password.clone()}
                        oninput={on_input(Field::Password)}
                    />
                    <small>{ "At least 8 characters with upper and lower case, a digit and a symbol" }</small>
                </label>
                {
                    if let Some(error) = &state.api_error {
                        html! { <div class="form-error">{ error }</div> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="primary" disabled={!valid || state.submitting}>
                    { "Register" }
                </button>
            </form>
        </div>
    }
}
