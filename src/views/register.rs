//! Register View

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::RouterLink;
use crate::context::{use_app_context, use_transport};
use crate::models::RegisterCredentials;

#[component]
pub fn RegisterView() -> impl IntoView {
    let ctx = use_app_context();
    let transport = use_transport();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() { return; }

        let credentials = RegisterCredentials {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let transport = transport.clone();
        set_pending.set(true);
        spawn_local(async move {
            let result = ctx.session.register(&transport, &credentials).await;
            set_pending.set(false);
            match result {
                Ok(()) => ctx.router.push("/login"),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <section class="auth-view">
            <h1>"Create an account"</h1>
            <form class="auth-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>"Register"</button>
            </form>
            {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
            <p>"Already registered? " <RouterLink href="/login">"Log in"</RouterLink></p>
        </section>
    }
}
