//! Navigation Bar Component

use leptos::prelude::*;

use super::RouterLink;
use crate::context::use_app_context;

/// Top bar; links depend on whether someone is signed in
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;
    let router = ctx.router;

    view! {
        <nav class="nav-bar">
            <RouterLink href="/">"Crowdfund"</RouterLink>
            <Show
                when=move || session.is_authenticated()
                fallback=|| view! {
                    <RouterLink href="/login">"Log in"</RouterLink>
                    <RouterLink href="/register">"Register"</RouterLink>
                }
            >
                <RouterLink href="/projects/create">"Start a project"</RouterLink>
                <RouterLink href="/profile">
                    {move || session.user().map(|u| u.username).unwrap_or_else(|| "Profile".to_string())}
                </RouterLink>
                <button
                    class="logout-btn"
                    on:click=move |_| {
                        session.logout();
                        router.push("/login");
                    }
                >
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
