use session_core::features::compose::{self, ArticleDraft, ComposeState};
use session_core::Outcome;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_app, use_view};
use crate::Route;

#[function_component(ArticleCreatePage)]
pub fn article_create_page() -> Html {
    let app = use_app();
    let view = use_view(ComposeState::default);
    let draft = use_state(ArticleDraft::default);
    let navigator = use_navigator();

    {
        let api = app.api.clone();
        let handle = view.handle();
        use_effect_with((), move |_| {
            spawn_local(async move {
                compose::load_subscribed_subjects(&*api, &handle).await;
            });
            || ()
        });
    }

    let on_subject = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(ArticleDraft {
                subject_id: select.value().parse().ok(),
                ..(*draft).clone()
            });
        })
    };

    let on_title = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ArticleDraft {
                title: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_content = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ArticleDraft {
                content: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let api = app.api.clone();
        let handle = view.handle();
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api = api.clone();
            let handle = handle.clone();
            let navigator = navigator.clone();
            let draft = (*draft).clone();
            spawn_local(async move {
                if let Outcome::Committed(id) = compose::publish(&*api, &handle, &draft).await {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::ArticleDetail { id: id.to_string() });
                    }
                }
            });
        })
    };

    let state = view.snapshot();
    let valid = draft.validate().is_ok();

    html! {
        <div class="article-create-page">
            <Link<Route> to={Route::Articles} classes={classes!("back-link")}>{ "←" }</Link<Route>>
            <h1>{ "Create a new article" }</h1>
            <form class="article-form" onsubmit={on_submit}>
                <select onchange={on_subject} disabled={state.loading}>
                    <option value="" selected={draft.subject_id.is_none()}>{ "Select a theme" }</option>
                    { for state.subjects.iter().map(|subject| html! {
                        <option
                            value={subject.subject_id.to_string()}
                            selected={draft.subject_id == Some(subject.subject_id)}
                        >
                            { &subject.name }
                        </option>
                    }) }
                </select>
                <input
                    type="text"
                    placeholder="Article title"
                    value={draft.title.clone()}
                    oninput={on_title}
                />
                <textarea
                    placeholder="Article content"
                    value={draft.content.clone()}
                    oninput={on_content}
                />
                {
                    if let Some(error) = &state.error {
                        html! { <div class="form-error">{ error }</div> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="primary" disabled={!valid || state.submitting}>
                    { "Create" }
                </button>
            </form>
        </div>
    }
}
