//! Route Views
//!
//! One component per entry in the route table. Views render store state and
//! call store actions; they hold no other logic.

mod home;
mod login;
mod not_found;
mod profile;
mod project_create;
mod project_details;
mod register;

pub use home::HomeView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use profile::ProfileView;
pub use project_create::ProjectCreateView;
pub use project_details::ProjectDetailsView;
pub use register::RegisterView;
