use session_core::features::article::{self, ArticleState};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{CommentCarousel, ToastHandle};
use crate::hooks::{use_app, use_view};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ArticleDetailProps {
    /// Raw route parameter
    pub id: String,
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailProps) -> Html {
    match article::parse_article_id(Some(&props.id)) {
        Some(id) => html! { <ArticleView {id} /> },
        None => html! { <Redirect<Route> to={Route::Articles} /> },
    }
}

#[derive(Properties, PartialEq)]
struct ArticleViewProps {
    id: i64,
}

#[function_component(ArticleView)]
fn article_view(props: &ArticleViewProps) -> Html {
    let app = use_app();
    let toasts = use_context::<ToastHandle>();
    let view = use_view(ArticleState::default);

    {
        let api = app.api.clone();
        let handle = view.handle();
        use_effect_with(props.id, move |id| {
            let id = *id;
            spawn_local(async move {
                article::load_article(&*api, &handle, id).await;
            });
            || ()
        });
    }

    let on_draft = {
        let view = view.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            view.update(|s| s.draft = input.value());
        })
    };

    let on_submit = {
        let api = app.api.clone();
        let handle = view.handle();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(toasts) = toasts.clone() else {
                log::warn!("No toast host mounted");
                return;
            };
            let api = api.clone();
            let handle = handle.clone();
            spawn_local(async move {
                article::submit_comment(&*api, &toasts, &handle).await;
            });
        })
    };

    let on_previous = {
        let view = view.clone();
        Callback::from(move |_| view.update(|s| s.cursor.previous()))
    };
    let on_next = {
        let view = view.clone();
        Callback::from(move |_| view.update(|s| s.cursor.next()))
    };

    let state = view.snapshot();

    if state.loading {
        return html! { <div class="loading">{ "Loading article..." }</div> };
    }
    let Some(article) = &state.article else {
        let message = state.error.clone().unwrap_or_default();
        return html! {
            <div class="article-page">
                <Link<Route> to={Route::Articles} classes={classes!("back-link")}>{ "←" }</Link<Route>>
                <div class="error-banner">{ message }</div>
            </div>
        };
    };

    html! {
        <div class="article-page">
            <Link<Route> to={Route::Articles} classes={classes!("back-link")}>{ "←" }</Link<Route>>
            <h1>{ &article.title }</h1>
            <div class="article-meta">
                <span>{ article.created_at_utc().map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_else(|| article.created_at.clone()) }</span>
                <span>{ &article.author.username }</span>
                <span>{ &article.subject.name }</span>
            </div>
            <p class="article-content">{ &article.content }</p>

            <section class="comments">
                <h2>{ "Comments" }</h2>
                <CommentCarousel cursor={state.cursor.clone()} {on_previous} {on_next} />
                <form class="comment-form" onsubmit={on_submit}>
                    <textarea
                        placeholder="Write your comment here"
                        value={state.draft.clone()}
                        oninput={on_draft}
                    />
                    <button type="submit" class="primary" disabled={!state.can_submit()}>
                        { "Send" }
                    </button>
                </form>
            </section>
        </div>
    }
}
