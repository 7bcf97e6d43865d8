use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, VERSION};

/// Landing page, shown without any header
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="splash-container">
            <div class="splash-content">
                <div class="splash-header">
                    <h1>{ "MDD" }</h1>
                    <p class="tagline">{ "The developer network: follow subjects, read and discuss articles" }</p>
                </div>

                <div class="splash-actions">
                    <Link<Route> to={Route::Login} classes={classes!("button", "primary")}>
                        { "Log in" }
                    </Link<Route>>
                    <Link<Route> to={Route::Register} classes={classes!("button", "secondary")}>
                        { "Register" }
                    </Link<Route>>
                </div>

                <div class="splash-footer">
                    <span class="version">{ format!("v{}", VERSION) }</span>
                </div>
            </div>
        </div>
    }
}
