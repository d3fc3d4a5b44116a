//! User profile record returned by the remote API

use serde::{Deserialize, Serialize};

/// Placeholder shown when a user has neither a first name nor an email
pub const GENERIC_DISPLAY_NAME: &str = "User";

/// Profile data associated with an authenticated account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl UserRecord {
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            first_name: None,
            last_name: None,
            is_active: true,
        }
    }

    pub fn with_names(mut self, first: Option<&str>, last: Option<&str>) -> Self {
        self.first_name = first.map(str::to_string);
        self.last_name = last.map(str::to_string);
        self
    }

    /// Short label identifying the user: first name, else email, else a placeholder
    pub fn display_name(&self) -> String {
        non_blank(self.first_name.as_deref())
            .or_else(|| non_blank(Some(&self.email)))
            .unwrap_or(GENERIC_DISPLAY_NAME)
            .to_string()
    }

    /// "First Last" when both names are known, otherwise the first name alone
    pub fn full_name(&self) -> Option<String> {
        match (
            non_blank(self.first_name.as_deref()),
            non_blank(self.last_name.as_deref()),
        ) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.to_string()),
            _ => None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_first_name() {
        let user = UserRecord::new(1, "ana@example.com").with_names(Some("Ana"), Some("Ruiz"));
        assert_eq!(user.display_name(), "Ana");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserRecord::new(1, "ana@example.com");
        assert_eq!(user.display_name(), "ana@example.com");

        let blank_first = UserRecord::new(1, "ana@example.com").with_names(Some("  "), None);
        assert_eq!(blank_first.display_name(), "ana@example.com");
    }

    #[test]
    fn test_display_name_placeholder() {
        let user = UserRecord::new(1, "");
        assert_eq!(user.display_name(), GENERIC_DISPLAY_NAME);
    }

    #[test]
    fn test_full_name() {
        let both = UserRecord::new(1, "a@b.co").with_names(Some("Ana"), Some("Ruiz"));
        assert_eq!(both.full_name(), Some("Ana Ruiz".to_string()));

        let first_only = UserRecord::new(1, "a@b.co").with_names(Some("Ana"), None);
        assert_eq!(first_only.full_name(), Some("Ana".to_string()));

        let last_only = UserRecord::new(1, "a@b.co").with_names(None, Some("Ruiz"));
        assert_eq!(last_only.full_name(), None);
    }

    #[test]
    fn test_deserialize_server_payload() {
        let json = r#"{"id": 7, "email": "a@b.co", "first_name": null, "last_name": "Ruiz", "is_active": false}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.first_name, None);
        assert_eq!(user.last_name.as_deref(), Some("Ruiz"));
        assert!(!user.is_active);
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let user: UserRecord = serde_json::from_str(r#"{"id": 3, "email": "x@y.io"}"#).unwrap();

        assert!(user.is_active);
        assert!(user.first_name.is_none());
        assert_eq!(user.display_name(), "x@y.io");
    }
}
