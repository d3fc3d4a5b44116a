//! Authentication state, persistence and page flows, independent of the UI

pub mod action;
pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod flows;
pub mod reducer;
pub mod session;
pub mod state;
pub mod store;
#[cfg(test)]
mod tests;
pub mod user;
pub mod validation;

pub use action::AuthAction;
pub use api::{
    ApiConfig, ApiError, AuthApi, HttpAuthApi, LoginRequest, PrivateGrant, SignupRequest,
};
pub use error::StoreError;
pub use flows::{CancelToken, PrivateOutcome, Redirect, Route, SubmitOutcome};
pub use reducer::{SessionEffect, reduce};
pub use session::{MemoryStorage, PlatformStorage, SessionStorage};
pub use state::{AuthPhase, AuthState, Session};
pub use store::{AuthDispatch, AuthStore};
pub use user::UserRecord;
pub use validation::{FieldErrors, FormField, ValidationError};
