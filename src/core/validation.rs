//! Local validation for the login and signup forms
//!
//! Runs before any request is made. Errors are reported per field and never
//! reach the auth store.

use std::collections::BTreeMap;

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Form fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Email,
    Password,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Email => "Email",
            FormField::Password => "Password",
        }
    }
}

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty or whitespace only
    Required(FormField),
    /// Email does not look like `name@domain.tld`
    InvalidEmail,
    /// Password is shorter than the minimum
    PasswordTooShort { min: usize, actual: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Required(field) => write!(f, "{} is required", field.label()),
            ValidationError::InvalidEmail => write!(f, "Email format is invalid"),
            ValidationError::PasswordTooShort { min, .. } => {
                write!(f, "Password must be at least {} characters", min)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validation errors keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FormField, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn insert(&mut self, field: FormField, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: FormField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Display message for a field, if it has an error
    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Drop the error of a field the user is editing
    pub fn clear(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    /// Convert to Result, keeping all errors
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks for `\S+@\S+\.\S+` anywhere in the value
pub fn is_plausible_email(email: &str) -> bool {
    email.char_indices().filter(|(_, c)| *c == '@').any(|(at, _)| {
        let before_ok = email[..at]
            .chars()
            .next_back()
            .is_some_and(|c| !c.is_whitespace());

        let domain = email[at + 1..]
            .split(char::is_whitespace)
            .next()
            .unwrap_or_default();

        // Needs at least one character on each side of some dot
        let dot_ok = domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());

        before_ok && dot_ok
    })
}

/// Login requires a non-blank email and password
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(email) {
        errors.insert(FormField::Email, ValidationError::Required(FormField::Email));
    }
    if is_blank(password) {
        errors.insert(
            FormField::Password,
            ValidationError::Required(FormField::Password),
        );
    }

    errors
}

/// Signup additionally requires a plausible email and a minimum password length
pub fn validate_signup(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(email) {
        errors.insert(FormField::Email, ValidationError::Required(FormField::Email));
    } else if !is_plausible_email(email) {
        errors.insert(FormField::Email, ValidationError::InvalidEmail);
    }

    let length = password.chars().count();
    if is_blank(password) {
        errors.insert(
            FormField::Password,
            ValidationError::Required(FormField::Password),
        );
    } else if length < MIN_PASSWORD_LENGTH {
        errors.insert(
            FormField::Password,
            ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: length,
            },
        );
    }

    errors
}
