use session_core::features::subjects::{self, SubjectsState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_app, use_view};

/// All subjects, each with a subscribe button
#[function_component(SubjectsPage)]
pub fn subjects_page() -> Html {
    let app = use_app();
    let view = use_view(SubjectsState::default);

    {
        let api = app.api.clone();
        let handle = view.handle();
        use_effect_with((), move |_| {
            spawn_local(async move {
                subjects::load_subjects(&*api, &handle).await;
            });
            || ()
        });
    }

    let on_subscribe = {
        let api = app.api.clone();
        let handle = view.handle();
        Callback::from(move |subject_id: i64| {
            let api = api.clone();
            let handle = handle.clone();
            spawn_local(async move {
                subjects::subscribe(&*api, &handle, subject_id).await;
            });
        })
    };

    let state = view.snapshot();

    html! {
        <div class="subjects-page">
            {
                if let Some(error) = &state.error {
                    html! { <div class="error-banner">{ error }</div> }
                } else {
                    html! {}
                }
            }
            if state.loading {
                <div class="loading">{ "Loading themes..." }</div>
            } else {
                <div class="subject-grid">
                    { for state.subjects.iter().map(|subject| {
                        let id = subject.subject_id;
                        let onclick = on_subscribe.reform(move |_: MouseEvent| id);
                        html! {
                            <div class="subject-card" key={id}>
                                <h3>{ &subject.name }</h3>
                                <p>{ &subject.description }</p>
                                <button class="primary" disabled={subject.subscribed} {onclick}>
                                    { if subject.subscribed { "Already subscribed" } else { "Subscribe" } }
                                </button>
                            </div>
                        }
                    }) }
                </div>
            }
        </div>
    }
}
