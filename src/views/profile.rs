//! Profile View

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, use_transport};

#[component]
pub fn ProfileView() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;
    let transport = use_transport();
    let (error, set_error) = signal::<Option<String>>(None);

    let refresh = move || {
        let transport = transport.clone();
        spawn_local(async move {
            let result = session.refresh_profile(&transport).await;
            set_error.set(result.err());
        });
    };

    // Refresh once on mount
    let load = refresh.clone();
    Effect::new(move |_| load());

    view! {
        <section class="profile-view">
            <h1>"Profile"</h1>
            {move || session.user().map(|user| view! {
                <dl class="profile-fields">
                    <dt>"Username"</dt>
                    <dd>{user.username}</dd>
                    <dt>"Email"</dt>
                    <dd>{user.email}</dd>
                </dl>
            })}
            {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
            <button on:click=move |_| refresh()>"Refresh"</button>
            <button
                class="logout-btn"
                on:click=move |_| {
                    session.logout();
                    ctx.router.push("/login");
                }
            >
                "Log out"
            </button>
        </section>
    }
}
