//! Common reusable UI components
//!
//! Shared by the auth forms and pages.

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{FormField, PasswordField};
pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::LoadingSpinner;
