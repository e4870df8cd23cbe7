//! Error Types
//!
//! Transport and storage failures, and the normalization that turns any of
//! them into the single message string the views display.

use thiserror::Error;

pub const FETCH_PROJECTS_FAILED: &str = "Failed to fetch projects";
pub const FETCH_PROJECT_FAILED: &str = "Failed to fetch project details";
pub const CREATE_PROJECT_FAILED: &str = "Failed to create project";
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const PROFILE_FAILED: &str = "Failed to load profile";
pub const NOT_SIGNED_IN: &str = "Not signed in";

/// Failure of a call through the transport client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// Non-2xx response, with the body's `message` field if it had one
    #[error("HTTP {}{}", .status, message_suffix(.message))]
    Status { status: u16, message: Option<String> },

    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Message supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
}

/// Normalize a transport failure into the message shown to the user.
///
/// The server's `message` is used verbatim; everything else collapses to
/// `fallback`.
pub fn describe(err: &TransportError, fallback: &str) -> String {
    tracing::error!(error = %err, "{}", fallback);
    err.server_message()
        .filter(|message| !message.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Failure of the session persistence backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,

    #[error("storage access failed: {0}")]
    Access(String),

    #[error("stored session is not valid JSON: {0}")]
    Codec(#[from] serde_json::Error),
}
