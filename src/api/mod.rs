//! Transport Client
//!
//! The seam between the stores and the HTTP API. Stores only see the
//! `Transport` trait; `HttpTransport` is the browser implementation.

mod http;
mod query;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::{
    LoginCredentials, LoginResponse, Project, ProjectDraft, ProjectPage, RegisterCredentials, User,
};

pub use http::{encode_path_segment, HttpTransport};
pub use query::{ProjectQuery, SortDirection};

/// Request in, response or error out.
///
/// Futures are not `Send`: browser fetch futures live on the main thread.
#[async_trait(?Send)]
pub trait Transport {
    /// `GET /api/projects`
    async fn list_projects(&self, query: &ProjectQuery) -> Result<ProjectPage, TransportError>;

    /// `GET /api/projects/{id}`
    async fn get_project(&self, id: &str) -> Result<Project, TransportError>;

    /// `POST /api/projects`
    async fn create_project(&self, token: &str, draft: &ProjectDraft) -> Result<(), TransportError>;

    /// `POST /api/users/login`
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, TransportError>;

    /// `POST /api/users/register`
    async fn register(&self, credentials: &RegisterCredentials) -> Result<(), TransportError>;

    /// `GET /api/users/profile`
    async fn profile(&self, token: &str) -> Result<User, TransportError>;
}
