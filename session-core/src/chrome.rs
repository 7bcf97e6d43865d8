//! Route-to-chrome coordination.
//!
//! Evaluated on navigation completion only, against the post-redirect
//! path, so guard redirects never flash the wrong header.

use crate::config::ChromeRoutes;
use crate::session::{Chrome, SessionStore};

/// Classify a path into the chrome it should show. Total over all strings.
pub fn classify(path: &str, routes: &ChromeRoutes) -> Chrome {
    if path == routes.root {
        Chrome::Hidden
    } else if path.starts_with(&routes.login) || path.starts_with(&routes.register) {
        Chrome::Frame
    } else {
        Chrome::Full
    }
}

/// Drives the session store's chrome from completed navigations
#[derive(Debug, Clone, PartialEq)]
pub struct RouteChromeCoordinator {
    session: SessionStore,
    routes: ChromeRoutes,
}

impl RouteChromeCoordinator {
    pub fn new(session: SessionStore, routes: ChromeRoutes) -> Self {
        Self { session, routes }
    }

    /// Apply the chrome for `path`. Chrome observers are notified before
    /// this returns, so the next render pass reads the new flags.
    pub fn on_navigation_end(&self, path: &str) -> Chrome {
        let chrome = classify(path, &self.routes);
        if chrome != self.session.chrome() {
            log::debug!("Chrome for {} -> {:?}", path, chrome);
        }
        self.session.set_chrome(chrome);
        chrome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlot;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn flags(path: &str) -> (bool, bool) {
        let chrome = classify(path, &ChromeRoutes::default());
        (chrome.show_header(), chrome.show_header_options())
    }

    #[test]
    fn root_hides_everything() {
        assert_eq!(flags("/"), (false, false));
    }

    #[test]
    fn auth_pages_show_frame_only() {
        assert_eq!(flags("/login"), (true, false));
        assert_eq!(flags("/register"), (true, false));
        assert_eq!(flags("/login?returnUrl=%2Fprofile"), (true, false));
        assert_eq!(flags("/register/confirm"), (true, false));
    }

    #[test]
    fn everything_else_shows_full_header() {
        for path in ["/articles", "/articles/12", "/profile", "/themes", "", "//", "/?x=1"] {
            assert_eq!(flags(path), (true, true), "path {:?}", path);
        }
    }

    #[test]
    fn every_classification_respects_header_invariant() {
        for path in ["/", "/login", "/register", "/articles", "", "x", "/loginx"] {
            let chrome = classify(path, &ChromeRoutes::default());
            assert!(!chrome.show_header_options() || chrome.show_header());
        }
    }

    #[test]
    fn custom_routes_are_honoured() {
        let routes = ChromeRoutes {
            root: "/home".into(),
            login: "/signin".into(),
            register: "/signup".into(),
        };
        assert_eq!(classify("/home", &routes), Chrome::Hidden);
        assert_eq!(classify("/signin", &routes), Chrome::Frame);
        assert_eq!(classify("/login", &routes), Chrome::Full);
    }

    #[test]
    fn navigation_updates_store_synchronously() {
        let session = SessionStore::new(Rc::new(MemorySlot::default()));
        let coordinator = RouteChromeCoordinator::new(session.clone(), ChromeRoutes::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _sub = session
            .chrome_observable()
            .subscribe(move |c| seen_clone.borrow_mut().push(*c));

        coordinator.on_navigation_end("/login");
        assert_eq!(session.chrome(), Chrome::Frame);
        coordinator.on_navigation_end("/articles");
        assert_eq!(session.chrome(), Chrome::Full);
        coordinator.on_navigation_end("/");
        assert_eq!(session.chrome(), Chrome::Hidden);

        assert_eq!(
            *seen.borrow(),
            vec![Chrome::Hidden, Chrome::Frame, Chrome::Full, Chrome::Hidden]
        );
    }

    #[test]
    fn evaluation_is_stateless_given_the_path() {
        let session = SessionStore::new(Rc::new(MemorySlot::default()));
        let coordinator = RouteChromeCoordinator::new(session.clone(), ChromeRoutes::default());
        coordinator.on_navigation_end("/articles");
        session.logout();
        assert_eq!(coordinator.on_navigation_end("/profile"), Chrome::Full);
        coordinator.on_navigation_end("/");
        assert_eq!(coordinator.on_navigation_end("/register"), Chrome::Frame);
    }
}
