//! Router Link Component
//!
//! Anchor that navigates through the router instead of reloading the page.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn RouterLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let target = href.clone();

    view! {
        <a
            href=href
            on:click=move |ev: web_sys::MouseEvent| {
                // Let modified clicks open a new tab
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                ctx.router.push(&target);
            }
        >
            {children()}
        </a>
    }
}
