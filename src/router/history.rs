//! Browser History Binding
//!
//! `location`, `pushState`/`replaceState` and `popstate` through web_sys.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Path plus query of the page, `/` when there is no window
pub fn current_location() -> String {
    web_sys::window()
        .and_then(|win| {
            let location = win.location();
            let path = location.pathname().ok()?;
            let search = location.search().unwrap_or_default();
            Some(format!("{}{}", path, search))
        })
        .unwrap_or_else(|| "/".to_string())
}

pub fn push(path: &str) {
    if let Some(history) = web_sys::window().and_then(|win| win.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            tracing::warn!(path, error = ?e, "pushState failed");
        }
    }
}

pub fn replace(path: &str) {
    if let Some(history) = web_sys::window().and_then(|win| win.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
            tracing::warn!(path, error = ?e, "replaceState failed");
        }
    }
}

/// Call `handler` with the new location on back/forward navigation
pub fn on_popstate<F>(handler: F)
where
    F: Fn(String) + 'static,
{
    let on_pop = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
        handler(current_location());
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref());
    }
    on_pop.forget();
}
