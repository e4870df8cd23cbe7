use leptos::prelude::*;

use crate::components::RouterLink;

#[component]
pub fn NotFoundView() -> impl IntoView {
    view! {
        <section class="not-found-view">
            <h1>"Page not found"</h1>
            <RouterLink href="/">"Back to projects"</RouterLink>
        </section>
    }
}
