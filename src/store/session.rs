//! Session Store
//!
//! Authentication token and user profile. Token presence is the only notion
//! of "signed in".

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::api::Transport;
use crate::error::{describe, LOGIN_FAILED, NOT_SIGNED_IN, PROFILE_FAILED, REGISTER_FAILED};
use crate::models::{LoginCredentials, LoginResponse, RegisterCredentials, User};

/// Session state, also the unit of persistence
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Store)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Handle to the session state, constructed once at startup
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: Store<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: Store::new(Session::default()),
        }
    }

    pub fn set_token(&self, token: String) {
        self.state.token().set(Some(token));
    }

    pub fn set_user(&self, user: User) {
        self.state.user().set(Some(user));
    }

    /// Sign out: token and user go in a single write
    pub fn clear_user(&self) {
        self.state.set(Session::default());
    }

    /// Replace the whole state (restore from storage)
    pub fn replace(&self, session: Session) {
        self.state.set(session);
    }

    pub fn token(&self) -> Option<String> {
        self.state.token().get()
    }

    pub fn user(&self) -> Option<User> {
        self.state.user().get()
    }

    /// Any stored token counts, including an empty string
    pub fn is_authenticated(&self) -> bool {
        self.state.token().with(Option::is_some)
    }

    /// Read without subscribing; used by the navigation guard
    pub fn is_authenticated_untracked(&self) -> bool {
        self.state.token().with_untracked(Option::is_some)
    }

    /// Whole state, subscribing the caller to every field
    pub fn track(&self) -> Session {
        Session {
            token: self.state.token().get(),
            user: self.state.user().get(),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.state.get_untracked()
    }

    // ========================
    // Auth Flow
    // ========================

    pub async fn login<T: Transport + ?Sized>(
        self,
        transport: &T,
        credentials: &LoginCredentials,
    ) -> Result<(), String> {
        let LoginResponse { token, user } = transport
            .login(credentials)
            .await
            .map_err(|e| describe(&e, LOGIN_FAILED))?;

        tracing::info!(user_id = user.id, username = %user.username, "signed in");
        self.set_token(token);
        self.set_user(user);
        Ok(())
    }

    pub async fn register<T: Transport + ?Sized>(
        self,
        transport: &T,
        credentials: &RegisterCredentials,
    ) -> Result<(), String> {
        transport
            .register(credentials)
            .await
            .map_err(|e| describe(&e, REGISTER_FAILED))?;
        tracing::info!(username = %credentials.username, "registered");
        Ok(())
    }

    /// Reload the user profile for the current token
    pub async fn refresh_profile<T: Transport + ?Sized>(self, transport: &T) -> Result<(), String> {
        let Some(token) = self.snapshot().token else {
            return Err(NOT_SIGNED_IN.to_string());
        };

        let user = transport
            .profile(&token)
            .await
            .map_err(|e| describe(&e, PROFILE_FAILED))?;
        self.set_user(user);
        Ok(())
    }

    pub fn logout(&self) {
        tracing::info!("signed out");
        self.clear_user();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::test_support::{reactive_owner, user, FakeTransport};

    #[test]
    fn test_set_token_reads_back() {
        let _owner = reactive_owner();
        let session = SessionStore::new();

        for token in ["abc", "", "eyJhbGciOiJIUzI1NiJ9.e30.sig"] {
            session.set_token(token.to_string());
            assert_eq!(session.snapshot().token.as_deref(), Some(token));
            assert!(session.is_authenticated_untracked());
        }
    }

    #[test]
    fn test_clear_user_resets_both_fields() {
        let _owner = reactive_owner();
        let session = SessionStore::new();
        session.set_token("abc".to_string());
        session.set_user(user(1));

        session.clear_user();
        assert_eq!(session.snapshot(), Session::default());
        assert!(!session.is_authenticated_untracked());

        // Clearing an empty session is a no-op
        session.clear_user();
        assert_eq!(session.snapshot(), Session::default());
    }

    #[tokio::test]
    async fn test_login_sets_token_and_user() {
        let _owner = reactive_owner();
        let session = SessionStore::new();
        let transport = FakeTransport::new();
        transport.push_login(Ok(LoginResponse {
            token: "jwt-1".to_string(),
            user: user(9),
        }));

        let credentials = LoginCredentials {
            username: "ada".to_string(),
            password: "secret".to_string(),
        };
        session.login(&transport, &credentials).await.unwrap();

        let state = session.snapshot();
        assert_eq!(state.token.as_deref(), Some("jwt-1"));
        assert_eq!(state.user, Some(user(9)));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_untouched() {
        let _owner = reactive_owner();
        let session = SessionStore::new();
        let transport = FakeTransport::new();
        transport.push_login(Err(TransportError::Status {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        }));
        transport.push_login(Err(TransportError::Network("offline".to_string())));

        let credentials = LoginCredentials {
            username: "ada".to_string(),
            password: "wrong".to_string(),
        };
        let first = session.login(&transport, &credentials).await;
        let second = session.login(&transport, &credentials).await;

        assert_eq!(first, Err("Invalid credentials".to_string()));
        assert_eq!(second, Err(LOGIN_FAILED.to_string()));
        assert_eq!(session.snapshot(), Session::default());
    }

    #[tokio::test]
    async fn test_register_failure_uses_fallback() {
        let _owner = reactive_owner();
        let session = SessionStore::new();
        let transport = FakeTransport::new();
        transport.push_register(Err(TransportError::Status { status: 500, message: None }));

        let credentials = RegisterCredentials {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };
        let result = session.register(&transport, &credentials).await;
        assert_eq!(result, Err(REGISTER_FAILED.to_string()));
        assert!(!session.is_authenticated_untracked());
    }

    #[tokio::test]
    async fn test_refresh_profile_requires_token() {
        let _owner = reactive_owner();
        let session = SessionStore::new();
        let transport = FakeTransport::new();

        let result = session.refresh_profile(&transport).await;
        assert_eq!(result, Err(NOT_SIGNED_IN.to_string()));
        assert!(transport.tokens().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_profile_replaces_user() {
        let _owner = reactive_owner();
        let session = SessionStore::new();
        session.set_token("jwt-2".to_string());
        session.set_user(user(1));

        let transport = FakeTransport::new();
        let mut renamed = user(1);
        renamed.username = "ada.lovelace".to_string();
        transport.push_profile(Ok(renamed.clone()));

        session.refresh_profile(&transport).await.unwrap();
        assert_eq!(session.snapshot().user, Some(renamed));
        assert_eq!(transport.tokens(), vec!["jwt-2".to_string()]);
    }

    #[test]
    fn test_logout_clears_session() {
        let _owner = reactive_owner();
        let session = SessionStore::new();
        session.set_token("abc".to_string());
        session.set_user(user(2));

        session.logout();
        assert_eq!(session.snapshot(), Session::default());
    }
}
