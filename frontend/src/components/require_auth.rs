use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_app, use_logged_in};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Html,
}

/// Route guard: renders its children only for a logged-in user, otherwise
/// redirects to the login page.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let app = use_app();
    if use_logged_in(&app.session) {
        props.children.clone()
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
