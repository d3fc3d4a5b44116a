//! Actions accepted by the auth store
//!
//! Typed callers build [`AuthAction`] values directly. Untyped callers hand in
//! the JSON form `{"type": "...", "payload": ...}` and go through
//! [`AuthAction::from_json`], which rejects anything outside the closed set.

use serde::{Deserialize, Serialize};

use super::error::StoreError;
use super::user::UserRecord;

/// Names of every action the store understands, in their JSON spelling
pub const ACTION_NAMES: [&str; 6] = [
    "login_start",
    "login_success",
    "login_error",
    "logout",
    "clear_auth_error",
    "set_hello",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum AuthAction {
    LoginStart,
    LoginSuccess { token: String, user: UserRecord },
    LoginError(String),
    Logout,
    ClearAuthError,
    SetHello(String),
}

impl AuthAction {
    pub fn name(&self) -> &'static str {
        match self {
            AuthAction::LoginStart => "login_start",
            AuthAction::LoginSuccess { .. } => "login_success",
            AuthAction::LoginError(_) => "login_error",
            AuthAction::Logout => "logout",
            AuthAction::ClearAuthError => "clear_auth_error",
            AuthAction::SetHello(_) => "set_hello",
        }
    }

    /// Parse an untyped action, failing loudly on unrecognized types
    pub fn from_json(value: &serde_json::Value) -> Result<Self, StoreError> {
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| StoreError::MalformedAction("missing \"type\" field".to_string()))?;

        if !ACTION_NAMES.contains(&kind) {
            return Err(StoreError::UnknownAction(kind.to_string()));
        }

        serde_json::from_value(value.clone())
            .map_err(|e| StoreError::MalformedAction(format!("{}: {}", kind, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_unit_actions() {
        assert_eq!(
            AuthAction::from_json(&json!({"type": "login_start"})),
            Ok(AuthAction::LoginStart)
        );
        assert_eq!(
            AuthAction::from_json(&json!({"type": "logout"})),
            Ok(AuthAction::Logout)
        );
        assert_eq!(
            AuthAction::from_json(&json!({"type": "clear_auth_error"})),
            Ok(AuthAction::ClearAuthError)
        );
    }

    #[test]
    fn test_parse_login_success_payload() {
        let action = AuthAction::from_json(&json!({
            "type": "login_success",
            "payload": {
                "token": "T",
                "user": {"id": 1, "email": "a@b.co", "first_name": "Ana", "last_name": null, "is_active": true}
            }
        }))
        .unwrap();

        match action {
            AuthAction::LoginSuccess { token, user } => {
                assert_eq!(token, "T");
                assert_eq!(user.first_name.as_deref(), Some("Ana"));
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_parse_string_payloads() {
        assert_eq!(
            AuthAction::from_json(&json!({"type": "login_error", "payload": "nope"})),
            Ok(AuthAction::LoginError("nope".to_string()))
        );
        assert_eq!(
            AuthAction::from_json(&json!({"type": "set_hello", "payload": "hi"})),
            Ok(AuthAction::SetHello("hi".to_string()))
        );
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let err = AuthAction::from_json(&json!({"type": "unknown_action"})).unwrap_err();
        assert_eq!(err, StoreError::UnknownAction("unknown_action".to_string()));
        assert_eq!(err.to_string(), "Unknown action: unknown_action");
    }

    #[test]
    fn test_missing_type_is_malformed() {
        let err = AuthAction::from_json(&json!({"payload": 1})).unwrap_err();
        assert!(matches!(err, StoreError::MalformedAction(_)));
    }

    #[test]
    fn test_bad_payload_is_malformed() {
        let err = AuthAction::from_json(&json!({"type": "login_success", "payload": "T"})).unwrap_err();
        assert!(matches!(err, StoreError::MalformedAction(ref m) if m.starts_with("login_success")));
    }

    #[test]
    fn test_name_matches_wire_type() {
        let actions = [
            AuthAction::LoginStart,
            AuthAction::LoginSuccess {
                token: "T".to_string(),
                user: UserRecord::new(1, "a@b.co"),
            },
            AuthAction::LoginError("e".to_string()),
            AuthAction::Logout,
            AuthAction::ClearAuthError,
            AuthAction::SetHello("hi".to_string()),
        ];

        for action in actions {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["type"], action.name());
            assert!(ACTION_NAMES.contains(&action.name()));
        }
    }
}
