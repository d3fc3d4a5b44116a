//! Page flows: what happens when a form is submitted or the private page opens
//!
//! Each flow validates, dispatches and calls the API, then hands back where the
//! page should go next. Navigation is left to the caller so that it always
//! happens after the dispatched state is visible.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::action::AuthAction;
use super::api::{ApiError, AuthApi, LoginRequest, PrivateGrant, SignupRequest};
use super::state::AuthState;
use super::store::AuthDispatch;
use super::validation::{FieldErrors, validate_login, validate_signup};

pub const CONNECTION_ERROR: &str = "Connection error. Please try again.";
pub const PRIVATE_CONNECTION_ERROR: &str = "Connection error";
pub const LOGIN_REJECTED: &str = "Invalid credentials";
pub const SIGNUP_REJECTED: &str = "Could not create the account";
pub const SIGNUP_NOTICE: &str = "Account created. Please sign in.";
pub const LOGOUT_NOTICE: &str = "Signed out successfully.";

/// Client-side routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Private,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Private => "/private",
        }
    }
}

/// Marks a flow whose page has gone away. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Result of submitting the login or signup form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent
    Invalid(FieldErrors),
    /// Another submission is still in flight
    Busy,
    /// The page went away before the response arrived
    Cancelled,
    /// The attempt failed; the message is also in the auth state
    Failed(String),
    /// Done; show the notice and navigate
    Redirect { to: Route, notice: String },
}

/// Navigation plus the notice to show once there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub notice: String,
}

/// Result of checking the token on the private page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateOutcome {
    Granted(PrivateGrant),
    /// No session, or the server refused it
    Redirect(Route),
    /// The server could not be reached; the session is kept
    Offline(String),
    Cancelled,
}

fn failure_message(error: &ApiError, rejected: &str) -> String {
    match error {
        ApiError::Rejected { message, .. } => {
            message.clone().unwrap_or_else(|| rejected.to_string())
        }
        ApiError::Network(_) | ApiError::Timeout | ApiError::Decode(_) => {
            CONNECTION_ERROR.to_string()
        }
    }
}

/// Submit the login form
pub async fn submit_login<A: AuthApi, D: AuthDispatch>(
    api: &A,
    auth: &D,
    request: &LoginRequest,
    cancel: &CancelToken,
) -> SubmitOutcome {
    if auth.state().is_loading() {
        return SubmitOutcome::Busy;
    }

    if let Err(errors) = validate_login(&request.email, &request.password).into_result() {
        return SubmitOutcome::Invalid(errors);
    }

    auth.dispatch(AuthAction::LoginStart);
    let result = api.login(request).await;

    if cancel.is_cancelled() {
        auth.dispatch(AuthAction::ClearAuthError);
        return SubmitOutcome::Cancelled;
    }

    match result {
        Ok(response) => {
            let notice = format!("Welcome, {}!", response.user.display_name());
            auth.dispatch(AuthAction::LoginSuccess {
                token: response.access_token,
                user: response.user,
            });
            SubmitOutcome::Redirect {
                to: Route::Private,
                notice,
            }
        }
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            let message = failure_message(&e, LOGIN_REJECTED);
            auth.dispatch(AuthAction::LoginError(message.clone()));
            SubmitOutcome::Failed(message)
        }
    }
}

/// Submit the signup form. A new account is not signed in.
pub async fn submit_signup<A: AuthApi, D: AuthDispatch>(
    api: &A,
    auth: &D,
    request: &SignupRequest,
    cancel: &CancelToken,
) -> SubmitOutcome {
    if auth.state().is_loading() {
        return SubmitOutcome::Busy;
    }

    if let Err(errors) = validate_signup(&request.email, &request.password).into_result() {
        return SubmitOutcome::Invalid(errors);
    }

    auth.dispatch(AuthAction::LoginStart);
    let result = api.signup(request).await;

    if cancel.is_cancelled() {
        auth.dispatch(AuthAction::ClearAuthError);
        return SubmitOutcome::Cancelled;
    }

    match result {
        Ok(_) => {
            auth.dispatch(AuthAction::ClearAuthError);
            SubmitOutcome::Redirect {
                to: Route::Login,
                notice: SIGNUP_NOTICE.to_string(),
            }
        }
        Err(e) => {
            tracing::warn!("Signup failed: {}", e);
            let message = failure_message(&e, SIGNUP_REJECTED);
            auth.dispatch(AuthAction::LoginError(message.clone()));
            SubmitOutcome::Failed(message)
        }
    }
}

/// Check the held token before showing the private page
pub async fn verify_private<A: AuthApi, D: AuthDispatch>(
    api: &A,
    auth: &D,
    cancel: &CancelToken,
) -> PrivateOutcome {
    let Some(token) = auth.state().token().map(str::to_string) else {
        return PrivateOutcome::Redirect(Route::Login);
    };

    let result = api.private(&token).await;

    if cancel.is_cancelled() {
        return PrivateOutcome::Cancelled;
    }

    match result {
        Ok(grant) => PrivateOutcome::Granted(grant),
        Err(e) if e.is_connectivity() => {
            // The token may still be good once the connection is back
            tracing::warn!("Could not verify token: {}", e);
            PrivateOutcome::Offline(PRIVATE_CONNECTION_ERROR.to_string())
        }
        Err(e) => {
            tracing::warn!("Token rejected: {}", e);
            auth.dispatch(AuthAction::Logout);
            PrivateOutcome::Redirect(Route::Login)
        }
    }
}

/// Drop the session. There is no server-side session to end.
pub fn logout<D: AuthDispatch>(auth: &D) -> Redirect {
    auth.dispatch(AuthAction::Logout);
    Redirect {
        to: Route::Login,
        notice: LOGOUT_NOTICE.to_string(),
    }
}

/// Where the login page sends the user, if anywhere.
///
/// Only a login submitted on the page redirects. A session that was already
/// held when the page opened does not, so the form stays reachable.
pub fn login_page_redirect(submitted: Option<Route>, state: &AuthState) -> Option<Route> {
    submitted.filter(|_| state.is_authenticated())
}

/// Fetch the backend greeting into the auth state
pub async fn load_greeting<A: AuthApi, D: AuthDispatch>(api: &A, auth: &D) -> Option<String> {
    match api.hello().await {
        Ok(hello) => {
            auth.dispatch(AuthAction::SetHello(hello.message.clone()));
            Some(hello.message)
        }
        Err(e) => {
            tracing::warn!("Could not load greeting: {}", e);
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted stand-in for the remote API

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::core::api::{HelloResponse, LoginResponse, SignupResponse};

    #[derive(Default)]
    pub struct FakeApi {
        pub login: Mutex<VecDeque<Result<LoginResponse, ApiError>>>,
        pub signup: Mutex<VecDeque<Result<SignupResponse, ApiError>>>,
        pub private: Mutex<VecDeque<Result<PrivateGrant, ApiError>>>,
        pub hello: Mutex<VecDeque<Result<HelloResponse, ApiError>>>,
        pub calls: Mutex<Vec<String>>,
        /// Cancelled while a request is "in flight"
        pub cancel_during_request: Option<CancelToken>,
    }

    impl FakeApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
            if let Some(cancel) = &self.cancel_during_request {
                cancel.cancel();
            }
        }

        fn next<T>(queue: &Mutex<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
            queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
        }
    }

    impl AuthApi for FakeApi {
        async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
            self.record(format!("POST /api/login {}", request.email));
            Self::next(&self.login)
        }

        async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
            self.record(format!("POST /api/signup {}", request.email));
            Self::next(&self.signup)
        }

        async fn private(&self, token: &str) -> Result<PrivateGrant, ApiError> {
            self.record(format!("GET /api/private Bearer {}", token));
            Self::next(&self.private)
        }

        async fn hello(&self) -> Result<HelloResponse, ApiError> {
            self.record("GET /api/hello".to_string());
            Self::next(&self.hello)
        }
    }
}
