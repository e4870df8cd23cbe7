//! Project Create View
//!
//! Form for submitting a new project. Only signed-in users reach it.

use chrono::{DateTime, NaiveDate, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, use_transport};
use crate::error::NOT_SIGNED_IN;
use crate::models::ProjectDraft;

/// `<input type="date">` value to midnight UTC
fn parse_deadline(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

fn parse_goal(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|goal| goal.is_finite())
}

#[component]
pub fn ProjectCreateView() -> impl IntoView {
    let ctx = use_app_context();
    let transport = use_transport();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (goal, set_goal) = signal(String::new());
    let (deadline, set_deadline) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() { return; }

        let Some(funding_goal) = parse_goal(&goal.get_untracked()) else {
            set_error.set(Some("Funding goal must be a number".to_string()));
            return;
        };
        let Some(deadline) = parse_deadline(&deadline.get_untracked()) else {
            set_error.set(Some("Deadline must be a date".to_string()));
            return;
        };
        let Some(token) = ctx.session.snapshot().token else {
            set_error.set(Some(NOT_SIGNED_IN.to_string()));
            return;
        };

        let draft = ProjectDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            funding_goal,
            deadline,
        };
        let transport = transport.clone();
        set_pending.set(true);
        spawn_local(async move {
            let result = ctx.projects.create_project(&transport, &token, &draft).await;
            set_pending.set(false);
            match result {
                Ok(()) => ctx.router.push("/"),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <section class="project-create-view">
            <h1>"Start a project"</h1>
            <form class="project-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Funding goal"
                    prop:value=move || goal.get()
                    on:input=move |ev| set_goal.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || deadline.get()
                    on:input=move |ev| set_deadline.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>"Create"</button>
            </form>
            {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
        </section>
    }
}
