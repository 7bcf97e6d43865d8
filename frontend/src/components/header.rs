use session_core::features::auth;
use session_core::Chrome;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::DialogHandle;
use crate::hooks::{use_app, use_chrome};
use crate::Route;

/// Top bar. Its visibility follows the session store's chrome, which the
/// route coordinator sets after every navigation.
#[function_component(Header)]
pub fn header() -> Html {
    let app = use_app();
    let chrome = use_chrome(&app.session);
    let dialog = use_context::<DialogHandle>();
    let navigator = use_navigator();
    let menu_open = use_state(|| false);

    if chrome == Chrome::Hidden {
        return html! {};
    }

    let on_logout = {
        let session = app.session.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            let Some(dialog) = dialog.clone() else {
                log::warn!("No confirm dialog mounted");
                return;
            };
            let session = session.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                if auth::confirm_logout(&dialog, &session).await.is_committed() {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Home);
                    }
                }
            });
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let options = if chrome.show_header_options() {
        html! {
            <>
                <button class="menu-toggle" onclick={toggle_menu}>{ "☰" }</button>
                <nav class={classes!("header-nav", (*menu_open).then_some("open"))}>
                    <Link<Route> to={Route::Articles}>{ "Articles" }</Link<Route>>
                    <Link<Route> to={Route::Themes}>{ "Themes" }</Link<Route>>
                    <Link<Route> to={Route::Profile} classes={classes!("profile-link")}>{ "Profile" }</Link<Route>>
                    <button class="logout-button" onclick={on_logout}>{ "Logout" }</button>
                </nav>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <header class="app-header">
            <Link<Route> to={Route::Home} classes={classes!("logo")}>{ "MDD" }</Link<Route>>
            { options }
        </header>
    }
}
