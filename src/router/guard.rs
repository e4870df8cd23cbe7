//! Navigation Guard
//!
//! Evaluated before every route transition against the session as it is at
//! that moment. Pure and total: three outcomes, no other exit.

use super::routes::{ResolvedRoute, RouteMeta, RouteName};
use crate::store::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(RouteName),
}

/// Rules in order: auth-only without a token goes to login, guest-only with a
/// token goes home, everything else proceeds.
pub fn evaluate(meta: RouteMeta, authenticated: bool) -> GuardDecision {
    if meta.requires_auth && !authenticated {
        GuardDecision::Redirect(RouteName::Login)
    } else if meta.requires_guest && authenticated {
        GuardDecision::Redirect(RouteName::Home)
    } else {
        GuardDecision::Proceed
    }
}

pub fn before_each(to: &ResolvedRoute, session: &SessionStore) -> GuardDecision {
    let authenticated = session.is_authenticated_untracked();
    let decision = evaluate(to.meta(), authenticated);
    tracing::debug!(route = to.name.as_str(), path = %to.path, authenticated, ?decision, "navigation guard");
    decision
}
