//! Pure state transitions for the auth store
//!
//! `reduce` never touches storage. The persistence side of a transition is
//! described by [`SessionEffect`] and carried out by the store.

use super::action::AuthAction;
use super::state::{AuthPhase, AuthState, Session};

/// Compute the state that follows `state` once `action` is applied
pub fn reduce(state: &AuthState, action: &AuthAction) -> AuthState {
    let phase = match (action, &state.phase) {
        (AuthAction::LoginStart, AuthPhase::LoggedIn(session)) => AuthPhase::LoggingIn {
            session: Some(session.clone()),
        },
        (AuthAction::LoginStart, AuthPhase::LoggingIn { session }) => AuthPhase::LoggingIn {
            session: session.clone(),
        },
        (AuthAction::LoginStart, _) => AuthPhase::LoggingIn { session: None },

        (AuthAction::LoginSuccess { token, user }, _) => {
            AuthPhase::LoggedIn(Session::new(token.clone(), user.clone()))
        }

        (AuthAction::LoginError(message), _) => AuthPhase::Failed(message.clone()),

        // Logout drops the session but does not settle an in-flight attempt
        (AuthAction::Logout, AuthPhase::LoggingIn { .. }) => AuthPhase::LoggingIn { session: None },
        (AuthAction::Logout, _) => AuthPhase::LoggedOut,

        (AuthAction::ClearAuthError, AuthPhase::LoggingIn { session: Some(session) }) => {
            AuthPhase::LoggedIn(session.clone())
        }
        (AuthAction::ClearAuthError, AuthPhase::LoggingIn { session: None })
        | (AuthAction::ClearAuthError, AuthPhase::Failed(_)) => AuthPhase::LoggedOut,
        (AuthAction::ClearAuthError, phase) => phase.clone(),

        (AuthAction::SetHello(_), phase) => phase.clone(),
    };

    let message = match action {
        AuthAction::SetHello(message) => Some(message.clone()),
        _ => state.message.clone(),
    };

    AuthState { phase, message }
}

/// Persistence work implied by an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Write token and user to the session store
    Persist(Session),
    /// Remove token and user from the session store
    Erase,
}

impl SessionEffect {
    pub fn for_action(action: &AuthAction) -> Option<Self> {
        match action {
            AuthAction::LoginSuccess { token, user } => {
                Some(SessionEffect::Persist(Session::new(token.clone(), user.clone())))
            }
            AuthAction::Logout => Some(SessionEffect::Erase),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::user::UserRecord;

    fn user() -> UserRecord {
        UserRecord::new(1, "ana@example.com").with_names(Some("Ana"), None)
    }

    fn success(token: &str) -> AuthAction {
        AuthAction::LoginSuccess {
            token: token.to_string(),
            user: user(),
        }
    }

    fn all_actions() -> Vec<AuthAction> {
        vec![
            AuthAction::LoginStart,
            success("T"),
            AuthAction::LoginError("bad".to_string()),
            AuthAction::Logout,
            AuthAction::ClearAuthError,
            AuthAction::SetHello("hi".to_string()),
        ]
    }

    fn sample_states() -> Vec<AuthState> {
        let session = Session::new("T0", user());
        vec![
            AuthState::logged_out(),
            AuthState::logged_in(session.clone()),
            AuthState {
                phase: AuthPhase::LoggingIn { session: None },
                message: None,
            },
            AuthState {
                phase: AuthPhase::LoggingIn {
                    session: Some(session),
                },
                message: Some("hello".to_string()),
            },
            AuthState {
                phase: AuthPhase::Failed("nope".to_string()),
                message: None,
            },
        ]
    }

    #[test]
    fn test_login_start_sets_loading_and_clears_error() {
        let failed = AuthState {
            phase: AuthPhase::Failed("nope".to_string()),
            message: None,
        };
        let next = reduce(&failed, &AuthAction::LoginStart);

        assert!(next.is_loading());
        assert!(next.auth_error().is_none());
        assert!(!next.is_authenticated());
    }

    #[test]
    fn test_login_start_keeps_existing_session() {
        let state = AuthState::logged_in(Session::new("T0", user()));
        let next = reduce(&state, &AuthAction::LoginStart);

        assert!(next.is_loading());
        assert_eq!(next.token(), Some("T0"));
    }

    #[test]
    fn test_login_success() {
        for state in sample_states() {
            let next = reduce(&state, &success("T"));

            assert_eq!(next.token(), Some("T"));
            assert_eq!(next.user(), Some(&user()));
            assert!(next.is_authenticated());
            assert!(!next.is_loading());
            assert!(next.auth_error().is_none());
        }
    }

    #[test]
    fn test_login_error_clears_session() {
        for state in sample_states() {
            let next = reduce(&state, &AuthAction::LoginError("Invalid credentials".to_string()));

            assert!(next.token().is_none());
            assert!(next.user().is_none());
            assert!(!next.is_authenticated());
            assert!(!next.is_loading());
            assert_eq!(next.auth_error(), Some("Invalid credentials"));
        }
    }

    #[test]
    fn test_logout_clears_session_and_error() {
        for state in sample_states() {
            let next = reduce(&state, &AuthAction::Logout);

            assert!(next.token().is_none());
            assert!(next.user().is_none());
            assert!(!next.is_authenticated());
            assert!(next.auth_error().is_none());
            assert_eq!(next.is_loading(), state.is_loading());
        }
    }

    #[test]
    fn test_logout_is_idempotent() {
        for state in sample_states() {
            let once = reduce(&state, &AuthAction::Logout);
            let twice = reduce(&once, &AuthAction::Logout);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_clear_auth_error() {
        for state in sample_states() {
            let next = reduce(&state, &AuthAction::ClearAuthError);

            assert!(next.auth_error().is_none());
            assert!(!next.is_loading());
            assert_eq!(next.token(), state.token());
        }
    }

    #[test]
    fn test_set_hello_only_touches_message() {
        for state in sample_states() {
            let next = reduce(&state, &AuthAction::SetHello("hi".to_string()));

            assert_eq!(next.message.as_deref(), Some("hi"));
            assert_eq!(next.phase, state.phase);
        }
    }

    #[test]
    fn test_message_survives_auth_actions() {
        let state = reduce(&AuthState::default(), &AuthAction::SetHello("hi".to_string()));
        let next = reduce(&state, &success("T"));
        assert_eq!(next.message.as_deref(), Some("hi"));
    }

    #[test]
    fn test_reduce_is_deterministic_and_consistent() {
        for state in sample_states() {
            for action in all_actions() {
                let a = reduce(&state, &action);
                let b = reduce(&state, &action);
                assert_eq!(a, b);
                assert_eq!(a.is_authenticated(), a.token().is_some());
                assert_eq!(a.token().is_some(), a.user().is_some());
                if a.is_loading() {
                    assert!(a.auth_error().is_none());
                }
            }
        }
    }

    #[test]
    fn test_session_effects() {
        assert_eq!(
            SessionEffect::for_action(&success("T")),
            Some(SessionEffect::Persist(Session::new("T", user())))
        );
        assert_eq!(
            SessionEffect::for_action(&AuthAction::Logout),
            Some(SessionEffect::Erase)
        );
        for action in [
            AuthAction::LoginStart,
            AuthAction::LoginError("e".to_string()),
            AuthAction::ClearAuthError,
            AuthAction::SetHello("hi".to_string()),
        ] {
            assert_eq!(SessionEffect::for_action(&action), None);
        }
    }
}
