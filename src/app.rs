//! Crowdfund Frontend App
//!
//! Builds the stores, restores the session, starts the router and renders the
//! view for the current route.

use leptos::prelude::*;

use crate::api::HttpTransport;
use crate::components::NavBar;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::router::{history, RouteName, Router};
use crate::store::persist::{open_storage, persist_on_change, restore};
use crate::store::{ProjectStore, SessionStore};
use crate::views::{
    HomeView, LoginView, NotFoundView, ProfileView, ProjectCreateView, ProjectDetailsView, RegisterView,
};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = SessionStore::new();

    // Restore before the router exists so the first guard sees the saved token
    let storage = open_storage(&config.session_storage_key);
    restore(session, storage.as_ref());
    persist_on_change(session, storage);

    let projects = ProjectStore::new();
    let transport = HttpTransport::new(&config.api_base_url);

    let router = Router::new(session, &history::current_location());
    router.bind_history();

    provide_context(AppContext { session, projects, router });
    provide_context(transport);

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || {
                    let route = router.current();
                    match route.name {
                        RouteName::Home => view! { <HomeView /> }.into_any(),
                        RouteName::Login => view! { <LoginView /> }.into_any(),
                        RouteName::Register => view! { <RegisterView /> }.into_any(),
                        RouteName::ProjectCreate => view! { <ProjectCreateView /> }.into_any(),
                        RouteName::ProjectDetails => {
                            let id = route.param("id").unwrap_or_default().to_string();
                            view! { <ProjectDetailsView id=id /> }.into_any()
                        }
                        RouteName::Profile => view! { <ProfileView /> }.into_any(),
                        RouteName::NotFound => view! { <NotFoundView /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
