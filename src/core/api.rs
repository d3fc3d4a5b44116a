//! Client for the remote authentication API
//!
//! Endpoints:
//! - POST /api/login - Exchange credentials for a bearer token
//! - POST /api/signup - Create an account
//! - GET /api/private - Check a bearer token
//! - GET /api/hello - Backend greeting

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};
use serde::{Deserialize, Serialize};

use super::user::UserRecord;

/// Default time a request may take before it is abandoned
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// `<meta>` tag names the server uses to pass API settings to the browser
pub const META_BACKEND_URL: &str = "auth-backend-url";
pub const META_REQUEST_TIMEOUT_MS: &str = "auth-request-timeout-ms";

/// Where and how to reach the remote API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash. Empty means same origin.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Absolute URL of an API path such as `/api/login`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Read the settings the server rendered into the page head
    #[cfg(not(feature = "ssr"))]
    pub fn from_document() -> Self {
        let mut config = Self::default();
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return config;
        };

        let meta = |name: &str| {
            document
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()
                .flatten()
                .and_then(|element| element.get_attribute("content"))
        };

        if let Some(url) = meta(META_BACKEND_URL) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(ms) = meta(META_REQUEST_TIMEOUT_MS)
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
        {
            config.timeout = Duration::from_millis(ms);
        }

        config
    }

    #[cfg(feature = "ssr")]
    pub fn from_document() -> Self {
        Self::default()
    }
}

/// Login request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Signup request. Blank names are left out of the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl SignupRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: &str,
        last_name: &str,
    ) -> Self {
        let name = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        Self {
            email: email.into(),
            password: password.into(),
            first_name: name(first_name),
            last_name: name(last_name),
        }
    }
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserRecord,
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful signup response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

/// Body of a successful private route check
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PrivateGrant {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub logged_in_as: Option<String>,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

/// Error body. Route handlers send `error`, the token layer sends `message`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}

/// API error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when no usable answer came back from the server
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Timeout)
    }

    /// Message the server gave for a rejection, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Operations of the remote API used by the page flows
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError>;
    async fn private(&self, token: &str) -> Result<PrivateGrant, ApiError>;
    async fn hello(&self) -> Result<HelloResponse, ApiError>;
}

/// Race a request against a timer. The timer finishing first is a timeout.
pub async fn with_timeout<T>(
    request: impl Future<Output = Result<T, ApiError>>,
    timer: impl Future<Output = ()>,
) -> Result<T, ApiError> {
    let request = pin!(request);
    let timer = pin!(timer);

    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

/// HTTP implementation of [`AuthApi`]
#[derive(Debug, Clone, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(not(feature = "ssr"))]
mod http {
    use std::time::Duration;

    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use super::ApiError;
    use super::ErrorBody;

    /// Timer that fires once the request has taken too long
    pub(super) fn timer(timeout: Duration) -> gloo_timers::future::TimeoutFuture {
        let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis)
    }

    pub(super) async fn send(request: Request) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    pub(super) async fn rejection(response: Response) -> ApiError {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_message);
        ApiError::Rejected {
            status: response.status(),
            message,
        }
    }

    pub(super) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(rejection(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<Request, ApiError> {
        Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

#[cfg(not(feature = "ssr"))]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let req = http::post_json(&self.config.url("/api/login"), request)?;
        with_timeout(
            async {
                let response = http::send(req).await?;
                http::read_json(response).await
            },
            http::timer(self.config.timeout),
        )
        .await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        let req = http::post_json(&self.config.url("/api/signup"), request)?;
        with_timeout(
            async {
                let response = http::send(req).await?;
                http::read_json(response).await
            },
            http::timer(self.config.timeout),
        )
        .await
    }

    async fn private(&self, token: &str) -> Result<PrivateGrant, ApiError> {
        let req = gloo_net::http::Request::get(&self.config.url("/api/private"))
            .header("Authorization", &format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        with_timeout(
            async {
                let response = http::send(req).await?;
                if !response.ok() {
                    return Err(http::rejection(response).await);
                }
                // Any success status grants access, whatever the body looks like
                Ok(response.json::<PrivateGrant>().await.unwrap_or_default())
            },
            http::timer(self.config.timeout),
        )
        .await
    }

    async fn hello(&self) -> Result<HelloResponse, ApiError> {
        let req = gloo_net::http::Request::get(&self.config.url("/api/hello"))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        with_timeout(
            async {
                let response = http::send(req).await?;
                http::read_json(response).await
            },
            http::timer(self.config.timeout),
        )
        .await
    }
}

#[cfg(feature = "ssr")]
impl AuthApi for HttpAuthApi {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        Err(ApiError::Network("Login not available on server".to_string()))
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        Err(ApiError::Network("Signup not available on server".to_string()))
    }

    async fn private(&self, _token: &str) -> Result<PrivateGrant, ApiError> {
        Err(ApiError::Network("Token check not available on server".to_string()))
    }

    async fn hello(&self) -> Result<HelloResponse, ApiError> {
        Err(ApiError::Network("Greeting not available on server".to_string()))
    }
}
