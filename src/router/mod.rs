//! Client-Side Router
//!
//! Resolves locations against the route table, runs the navigation guard on
//! every transition, and keeps the current route in a signal for the views.

pub mod guard;
pub mod history;
pub mod routes;

use leptos::prelude::*;

use crate::store::SessionStore;
use guard::GuardDecision;
use routes::ResolvedRoute;

pub use routes::RouteName;

/// Upper bound on guard redirects followed for one navigation
const MAX_REDIRECTS: usize = 4;

/// Where a navigation request ended up
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub route: ResolvedRoute,
    /// Path originally requested, when the guard sent us elsewhere
    pub redirected_from: Option<String>,
}

/// Resolve `location` and apply the guard, following redirects.
///
/// Each redirect target goes through the guard again, the same as a fresh
/// navigation.
pub fn resolve_navigation(location: &str, session: &SessionStore) -> Navigation {
    let mut route = routes::resolve(location);
    let mut redirected_from = None;
    let mut hops = 0;

    while let GuardDecision::Redirect(target) = guard::before_each(&route, session) {
        hops += 1;
        if hops > MAX_REDIRECTS {
            tracing::warn!(location, "too many guard redirects, stopping");
            break;
        }
        redirected_from.get_or_insert_with(|| route.path.clone());
        route = routes::resolve(target.path());
    }

    Navigation { route, redirected_from }
}

#[derive(Clone, Copy)]
pub struct Router {
    session: SessionStore,
    current: RwSignal<ResolvedRoute>,
}

impl Router {
    /// Build the router and run the first navigation.
    ///
    /// Takes the session store so the persisted session must already be
    /// restored by the time the first guard runs.
    pub fn new(session: SessionStore, location: &str) -> Self {
        let first = resolve_navigation(location, &session);
        Self {
            session,
            current: RwSignal::new(first.route),
        }
    }

    /// Resolve and guard, then make the outcome current. Browser history is
    /// not touched.
    pub fn navigate(&self, location: &str) -> Navigation {
        let navigation = resolve_navigation(location, &self.session);
        if let Some(from) = &navigation.redirected_from {
            tracing::info!(from = %from, to = %navigation.route.path, "navigation redirected");
        }
        self.current.set(navigation.route.clone());
        navigation
    }

    /// Navigate and record the final path as a new history entry
    pub fn push(&self, location: &str) {
        let navigation = self.navigate(location);
        history::push(&navigation.route.path);
    }

    /// Sync the address bar with the first navigation and follow back/forward
    pub fn bind_history(&self) {
        let shown = routes::resolve(&history::current_location()).path;
        let current = self.current.get_untracked().path;
        if shown != current {
            history::replace(&current);
        }

        let router = *self;
        history::on_popstate(move |location| {
            let navigation = router.navigate(&location);
            if navigation.redirected_from.is_some() {
                history::replace(&navigation.route.path);
            }
        });
    }

    pub fn current(&self) -> ResolvedRoute {
        self.current.get()
    }

    pub fn current_untracked(&self) -> ResolvedRoute {
        self.current.get_untracked()
    }
}
