//! Login View

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::RouterLink;
use crate::context::{use_app_context, use_transport};
use crate::models::LoginCredentials;

#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = use_app_context();
    let transport = use_transport();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() { return; }

        let credentials = LoginCredentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let transport = transport.clone();
        set_pending.set(true);
        spawn_local(async move {
            let result = ctx.session.login(&transport, &credentials).await;
            set_pending.set(false);
            match result {
                Ok(()) => ctx.router.push("/"),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <section class="auth-view">
            <h1>"Log in"</h1>
            <form class="auth-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>"Log in"</button>
            </form>
            {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
            <p>"No account? " <RouterLink href="/register">"Register"</RouterLink></p>
        </section>
    }
}
