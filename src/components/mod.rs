//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod project_card;
mod router_link;

pub use nav_bar::NavBar;
pub use project_card::ProjectCard;
pub use router_link::RouterLink;
