//! Project Card Component
//!
//! Summary tile used by the listing views.

use leptos::prelude::*;

use super::RouterLink;
use crate::models::Project;
use crate::router::routes::project_path;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = project_path(&project.id);
    let funding = format!(
        "{:.2} of {:.2} ({:.0}%)",
        project.current_funding,
        project.funding_goal,
        project.progress_percent()
    );
    let deadline = project.deadline.format("%Y-%m-%d").to_string();

    view! {
        <article class="project-card">
            <RouterLink href=href>
                <h3>{project.title}</h3>
            </RouterLink>
            <span class="project-status">{project.status.label()}</span>
            <p class="project-funding">{funding}</p>
            <p class="project-deadline">"Ends " {deadline}</p>
        </article>
    }
}
