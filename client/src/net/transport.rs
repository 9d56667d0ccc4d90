//! Request/response model and the transport seam.
//!
//! DESIGN
//! ======
//! Every call the client makes is one of the fixed [`Endpoint`]s. Requests
//! are described as data (`ApiRequest`) and answered with the three things
//! the client ever inspects (`ApiResponse`: status, `Authorization` header,
//! body text). The browser implementation lives in `http`; tests plug in a
//! recording fake.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::fmt;

use crate::state::session::Credential;

/// HTTP method subset used by the referral service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        })
    }
}

/// Remote operations, each bound to a fixed method and path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Signup,
    ListReferrals,
    CreateReferral,
    Logout,
}

impl Endpoint {
    pub fn method(self) -> Method {
        match self {
            Self::Login | Self::Signup | Self::CreateReferral => Method::Post,
            Self::ListReferrals => Method::Get,
            Self::Logout => Method::Delete,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::ListReferrals | Self::CreateReferral => "/referrals",
            Self::Logout => "/logout",
        }
    }

    /// Whether the endpoint expects a bearer credential.
    pub fn requires_credential(self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }
}

/// An outbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub bearer: Option<Credential>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Pre-authentication request carrying a JSON body.
    pub fn anonymous(endpoint: Endpoint, body: serde_json::Value) -> Self {
        Self { endpoint, bearer: None, body: Some(body) }
    }

    /// Request authorized by `credential`, without a body.
    pub fn authenticated(endpoint: Endpoint, credential: &Credential) -> Self {
        Self { endpoint, bearer: Some(credential.clone()), body: None }
    }

    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Absolute URL against `base_url` (no trailing slash).
    pub fn url(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.endpoint.path())
    }

    /// Header pairs to send: always JSON content type, plus the bearer when present.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_owned())];
        if let Some(credential) = &self.bearer {
            headers.push(("Authorization", credential.bearer_header()));
        }
        headers
    }
}

/// The parts of an HTTP response the client reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub authorization: Option<String>,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, authorization: None, body: body.into() }
    }

    #[must_use]
    pub fn with_authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network-level failure: the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Sends requests to the referral service.
///
/// Implementations run on the single-threaded browser executor, so the
/// returned futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns an error when no HTTP response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[cfg(test)]
#[path = "transport_fake.rs"]
pub(crate) mod fake;
