//! Hooks exposing the session store's observables as component state.

use session_core::{Chrome, SessionStore};
use yew::prelude::*;

/// Current header chrome; the component re-renders when it changes
#[hook]
pub fn use_chrome(session: &SessionStore) -> Chrome {
    let chrome = use_state_eq(|| session.chrome());
    {
        let chrome = chrome.clone();
        use_effect_with(session.clone(), move |session| {
            let subscription = session
                .chrome_observable()
                .subscribe(move |value| chrome.set(*value));
            move || drop(subscription)
        });
    }
    *chrome
}

/// Current login status; the component re-renders when it changes
#[hook]
pub fn use_logged_in(session: &SessionStore) -> bool {
    let logged_in = use_state_eq(|| session.is_logged_in());
    {
        let logged_in = logged_in.clone();
        use_effect_with(session.clone(), move |session| {
            let subscription = session
                .is_logged_in_observable()
                .subscribe(move |value| logged_in.set(*value));
            move || drop(subscription)
        });
    }
    *logged_in
}
