//! Application State Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Stores are plain
//! `Copy` handles built once at startup and shared through context.

pub mod persist;
pub mod project;
pub mod session;

pub use project::{FetchProjectsParams, ProjectStore};
pub use session::{Session, SessionStore};
