//! Application-wide context: the session store and the API client.

use std::rc::Rc;

use session_core::{ChromeRoutes, MemorySlot, RouteChromeCoordinator, SessionStore};
use yew::prelude::*;

use crate::client::GlooApiClient;
use crate::storage::LocalStorageSlot;
use crate::utils;

/// Shared by every page through a `ContextProvider`
#[derive(Clone)]
pub struct AppContext {
    pub session: SessionStore,
    pub chrome: RouteChromeCoordinator,
    pub api: Rc<GlooApiClient>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && Rc::ptr_eq(&self.api, &other.api)
    }
}

impl AppContext {
    /// Build the context once at startup. Both the session store and the
    /// client read the token from the same slot.
    pub fn new() -> Self {
        let slot: Rc<dyn session_core::KeyValueSlot> = match web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
        {
            Some(_) => Rc::new(LocalStorageSlot),
            None => {
                log::warn!("localStorage unavailable; the session will not persist");
                Rc::new(MemorySlot::default())
            }
        };
        let session = SessionStore::new(slot.clone());
        let chrome = RouteChromeCoordinator::new(session.clone(), ChromeRoutes::default());
        let api = Rc::new(GlooApiClient::new(&utils::api_base_url(), slot));
        Self {
            session,
            chrome,
            api,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the application context. Every page renders inside the `App`
/// provider; outside it a detached context is built.
#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().unwrap_or_default()
}
