use session_core::features::feed::{self, FeedState, SortOrder};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_app, use_view};
use crate::Route;

#[function_component(FeedPage)]
pub fn feed_page() -> Html {
    let app = use_app();
    let view = use_view(FeedState::default);

    {
        let api = app.api.clone();
        let handle = view.handle();
        use_effect_with((), move |_| {
            spawn_local(async move {
                feed::load_feed(&*api, &handle).await;
            });
            || ()
        });
    }

    let on_toggle_sort = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.update(FeedState::toggle_order))
    };

    let state = view.snapshot();
    let sort_label = match state.order {
        SortOrder::Asc => "Sort by: oldest ↑",
        SortOrder::Desc => "Sort by: newest ↓",
    };

    let body = if state.loading {
        html! { <div class="loading">{ "Loading articles..." }</div> }
    } else if let Some(error) = &state.error {
        html! { <div class="error-banner">{ error }</div> }
    } else if state.articles.is_empty() {
        html! { <div class="empty">{ "No articles yet. Subscribe to a theme to fill your feed." }</div> }
    } else {
        html! {
            <div class="article-grid">
                { for state.articles.iter().map(|article| html! {
                    <Link<Route> to={Route::ArticleDetail { id: article.article_id.to_string() }} classes={classes!("article-card")}>
                        <h3>{ &article.title }</h3>
                        <div class="article-meta">
                            <span>{ article.created_at_utc().map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_else(|| article.created_at.clone()) }</span>
                            <span>{ &article.author.username }</span>
                        </div>
                        <p class="article-excerpt">{ &article.content }</p>
                    </Link<Route>>
                }) }
            </div>
        }
    };

    html! {
        <div class="feed-page">
            <div class="feed-toolbar">
                <Link<Route> to={Route::ArticleCreate} classes={classes!("button", "primary")}>
                    { "Create article" }
                </Link<Route>>
                <button class="sort-toggle" onclick={on_toggle_sort}>{ sort_label }</button>
            </div>
            { body }
        </div>
    }
}
