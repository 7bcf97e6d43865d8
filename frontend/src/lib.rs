mod client;
mod components;
mod hooks;
mod pages;
mod storage;
pub mod utils;

use components::{ConfirmDialogHost, Header, RequireAuth, ToastHost};
use hooks::{use_app, AppContext};
use pages::{
    article_create::ArticleCreatePage, article_detail::ArticleDetailPage, feed::FeedPage,
    home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
    subjects::SubjectsPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/articles")]
    Articles,
    #[at("/articles/create")]
    ArticleCreate,
    #[at("/articles/:id")]
    ArticleDetail { id: String },
    #[at("/profile")]
    Profile,
    #[at("/themes")]
    Themes,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Articles => html! { <RequireAuth><FeedPage /></RequireAuth> },
        Route::ArticleCreate => html! { <RequireAuth><ArticleCreatePage /></RequireAuth> },
        Route::ArticleDetail { id } => html! { <RequireAuth><ArticleDetailPage {id} /></RequireAuth> },
        Route::Profile => html! { <RequireAuth><ProfilePage /></RequireAuth> },
        Route::Themes => html! { <RequireAuth><SubjectsPage /></RequireAuth> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

/// Runs the route coordinator after every completed navigation, then
/// renders the header and the routed page.
#[function_component(Shell)]
fn shell() -> Html {
    let app = use_app();
    let location = use_location();

    {
        let chrome = app.chrome.clone();
        let path = location.map(|l| l.path().to_string());
        use_effect_with(path, move |_| {
            // Read the address bar rather than the rendered route so that a
            // guard redirect issued during this render is already applied.
            chrome.on_navigation_end(&utils::current_path());
            || ()
        });
    }

    html! {
        <>
            <Header />
            <main class="app-main">
                <Switch<Route> render={switch} />
            </main>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let context = use_memo((), |_| AppContext::new());

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            <ToastHost>
                <ConfirmDialogHost>
                    <BrowserRouter>
                        <Shell />
                    </BrowserRouter>
                </ConfirmDialogHost>
            </ToastHost>
        </ContextProvider<AppContext>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
