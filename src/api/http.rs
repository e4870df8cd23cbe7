//! HTTP Transport
//!
//! `reqwest` client against the crowdfunding API. On wasm32 reqwest runs on
//! the browser's fetch.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ProjectQuery, Transport};
use crate::error::TransportError;
use crate::models::{
    LoginCredentials, LoginResponse, Project, ProjectDraft, ProjectPage, RegisterCredentials, User,
};

/// Characters escaped in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn project_url(&self, id: &str) -> String {
        self.url(&format!("/api/projects/{}", encode_path_segment(id)))
    }
}

/// Escape `segment` so it stays a single path segment
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

// ========================
// Response Handling
// ========================

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// `message` field of an error body, if the body is JSON and has one
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message)
}

async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, TransportError> {
    let response = request
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.ok().and_then(|body| error_message(&body));
    Err(TransportError::Status { status: status.as_u16(), message })
}

async fn read_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, TransportError> {
    send(request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| TransportError::Decode(e.to_string()))
}

// ========================
// Transport
// ========================

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn list_projects(&self, query: &ProjectQuery) -> Result<ProjectPage, TransportError> {
        read_json(self.client.get(self.url("/api/projects")).query(query)).await
    }

    async fn get_project(&self, id: &str) -> Result<Project, TransportError> {
        read_json(self.client.get(self.project_url(id))).await
    }

    async fn create_project(&self, token: &str, draft: &ProjectDraft) -> Result<(), TransportError> {
        let request = self
            .client
            .post(self.url("/api/projects"))
            .bearer_auth(token)
            .json(draft);
        send(request).await.map(|_| ())
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, TransportError> {
        read_json(self.client.post(self.url("/api/users/login")).json(credentials)).await
    }

    async fn register(&self, credentials: &RegisterCredentials) -> Result<(), TransportError> {
        let request = self.client.post(self.url("/api/users/register")).json(credentials);
        send(request).await.map(|_| ())
    }

    async fn profile(&self, token: &str) -> Result<User, TransportError> {
        read_json(self.client.get(self.url("/api/users/profile")).bearer_auth(token)).await
    }
}
