//! Application Context
//!
//! Stores and router provided via Leptos Context API, so components get the
//! instances built at startup instead of reaching for globals.

use leptos::prelude::*;

use crate::api::HttpTransport;
use crate::router::Router;
use crate::store::{ProjectStore, SessionStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: SessionStore,
    pub projects: ProjectStore,
    pub router: Router,
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Get the transport client
pub fn use_transport() -> HttpTransport {
    expect_context::<HttpTransport>()
}
