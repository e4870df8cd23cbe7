//! Home View
//!
//! Searchable, paged project listing with the featured strip on top.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ProjectCard;
use crate::context::{use_app_context, use_transport};
use crate::store::FetchProjectsParams;

const PAGE_SIZE: u32 = 9;

#[component]
pub fn HomeView() -> impl IntoView {
    let projects = use_app_context().projects;
    let transport = use_transport();

    let (search_input, set_search_input) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1u32);

    // Reload whenever the committed search or the page changes
    Effect::new(move |_| {
        let params = FetchProjectsParams {
            search: Some(search.get()).filter(|s| !s.is_empty()),
            page: Some(page.get()),
            limit: Some(PAGE_SIZE),
            ..Default::default()
        };
        let transport = transport.clone();
        spawn_local(async move {
            projects.fetch_projects(&transport, params).await;
        });
    });

    let total_pages = move || projects.total().div_ceil(u64::from(PAGE_SIZE)).max(1);

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_page.set(1);
        set_search.set(search_input.get_untracked().trim().to_string());
    };

    view! {
        <section class="home-view">
            <form class="search-form" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Search projects..."
                    prop:value=move || search_input.get()
                    on:input=move |ev| set_search_input.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>

            <Show when=move || projects.loading_list()>
                <p class="loading">"Loading projects..."</p>
            </Show>
            {move || projects.error().map(|message| view! { <p class="error">{message}</p> })}

            <h2>"Featured"</h2>
            <div class="project-grid">
                <For
                    each=move || projects.featured()
                    key=|project| project.id.clone()
                    children=|project| view! { <ProjectCard project=project /> }
                />
            </div>

            <h2>"Active projects"</h2>
            <div class="project-grid">
                <For
                    each=move || projects.active()
                    key=|project| project.id.clone()
                    children=|project| view! { <ProjectCard project=project /> }
                />
            </div>

            <div class="pager">
                <button
                    disabled=move || page.get() <= 1
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="pager-status">
                    {move || format!("Page {} of {} ({} projects)", page.get(), total_pages(), projects.total())}
                </span>
                <button
                    disabled=move || u64::from(page.get()) >= total_pages()
                    on:click=move |_| set_page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </section>
    }
}
