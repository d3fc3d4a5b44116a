//! Authentication state
//!
//! The state is a closed phase rather than a set of independent flags, so the
//! combinations the UI relies on (token and user present together, no error
//! while loading, authenticated iff a token is held) cannot drift apart.

use serde::{Deserialize, Serialize};

use super::user::UserRecord;

/// Bearer token together with the profile it was issued for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserRecord,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserRecord) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// Phase of the authentication lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// No session is held
    #[default]
    LoggedOut,
    /// A login or signup request is in flight.
    /// An existing session is kept until the request resolves.
    LoggingIn { session: Option<Session> },
    /// A session is held
    LoggedIn(Session),
    /// The last attempt failed with this message
    Failed(String),
}

/// Application-wide authentication state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    pub phase: AuthPhase,
    /// Greeting fetched from the backend, unrelated to authentication
    pub message: Option<String>,
}

impl AuthState {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn logged_in(session: Session) -> Self {
        Self {
            phase: AuthPhase::LoggedIn(session),
            message: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            AuthPhase::LoggedIn(session) => Some(session),
            AuthPhase::LoggingIn { session } => session.as_ref(),
            AuthPhase::LoggedOut | AuthPhase::Failed(_) => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.session().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, AuthPhase::LoggingIn { .. })
    }

    pub fn auth_error(&self) -> Option<&str> {
        match &self.phase {
            AuthPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
