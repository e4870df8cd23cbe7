//! Project Details View
//!
//! Loads the project on mount and drops it from the store on unmount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, use_transport};

#[component]
pub fn ProjectDetailsView(id: String) -> impl IntoView {
    let projects = use_app_context().projects;
    let transport = use_transport();

    Effect::new(move |_| {
        let transport = transport.clone();
        let id = id.clone();
        spawn_local(async move {
            projects.fetch_project(&transport, &id).await;
        });
    });

    on_cleanup(move || projects.clear_current_project());

    view! {
        <section class="project-details-view">
            <Show when=move || projects.loading_current()>
                <p class="loading">"Loading project..."</p>
            </Show>
            {move || projects.error().map(|message| view! { <p class="error">{message}</p> })}
            {move || projects.current().map(|project| {
                let funding = format!(
                    "{:.2} raised of {:.2} ({:.0}%)",
                    project.current_funding,
                    project.funding_goal,
                    project.progress_percent()
                );
                view! {
                    <article class="project-detail">
                        <h1>{project.title}</h1>
                        <span class="project-status">{project.status.label()}</span>
                        <p class="project-funding">{funding}</p>
                        <p class="project-deadline">"Deadline: " {project.deadline.format("%Y-%m-%d").to_string()}</p>
                        <p class="project-description">{project.description}</p>
                        <p class="project-meta">
                            "Created " {project.created_at.format("%Y-%m-%d").to_string()}
                            ", updated " {project.updated_at.format("%Y-%m-%d").to_string()}
                        </p>
                    </article>
                }
            })}
        </section>
    }
}
