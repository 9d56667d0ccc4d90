//! Typed operations against the referral service.
//!
//! Each function builds the request for one endpoint, sends it through a
//! [`Transport`], and interprets the response.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` carrying whatever message the
//! endpoint's error body yields (plain text for `/login`, `status.message`
//! JSON for `/signup`, a flat `message` JSON for `/referrals`). Pages decide
//! on fallback wording; this module never invents user-facing text.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::transport::{ApiRequest, ApiResponse, Endpoint, Transport, TransportError};
use super::types::{ErrorBody, LoginUser, NewReferral, Referral, SignupUser, StatusEnvelope, UserEnvelope};
use crate::state::session::Credential;
use crate::util::token_store::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("response carried no bearer token")]
    MissingToken,
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
    #[error("no credential is stored for this session")]
    NoCredential,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Server-supplied message for a rejected request, when one was extracted.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// A successful signup: the new session credential plus the service's greeting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupAccepted {
    pub credential: Credential,
    pub message: Option<String>,
}

/// Token from an `Authorization` header value: the text after the first space.
pub(crate) fn bearer_token(header: Option<&str>) -> Option<Credential> {
    let (_scheme, token) = header?.split_once(' ')?;
    Credential::new(token)
}

fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() { None } else { Some(text.to_owned()) }
}

/// `/login` reports failures as the raw response text.
fn login_failure_message(body: &str) -> Option<String> {
    non_blank(body)
}

/// `/signup` reports both outcomes in `status.message`.
fn signup_status_message(body: &str) -> Option<String> {
    serde_json::from_str::<StatusEnvelope<serde_json::Value>>(body)
        .ok()?
        .into_message()
        .as_deref()
        .and_then(non_blank)
}

/// `/referrals` failures carry a flat `message` field.
fn referral_failure_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()?
        .message
        .as_deref()
        .and_then(non_blank)
}

/// Referral list from a `GET /referrals` body; a missing `status.data` is empty.
fn referral_list(body: &str) -> Result<Vec<Referral>, ApiError> {
    let envelope: StatusEnvelope<Vec<Referral>> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.into_data().unwrap_or_default())
}

fn encode<T: Serialize>(body: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn reject(response: &ApiResponse, extract: fn(&str) -> Option<String>) -> ApiError {
    ApiError::Status { status: response.status, message: extract(&response.body) }
}

/// `POST /login`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status, or a success
/// response without a bearer token.
pub async fn login<T: Transport>(transport: &T, user: LoginUser) -> Result<Credential, ApiError> {
    let request = ApiRequest::anonymous(Endpoint::Login, encode(&UserEnvelope { user })?);
    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(reject(&response, login_failure_message));
    }
    bearer_token(response.authorization.as_deref()).ok_or(ApiError::MissingToken)
}

/// `POST /signup`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status, or a success
/// response without a bearer token.
pub async fn signup<T: Transport>(transport: &T, user: SignupUser) -> Result<SignupAccepted, ApiError> {
    let request = ApiRequest::anonymous(Endpoint::Signup, encode(&UserEnvelope { user })?);
    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(reject(&response, signup_status_message));
    }
    let credential = bearer_token(response.authorization.as_deref()).ok_or(ApiError::MissingToken)?;
    Ok(SignupAccepted { credential, message: signup_status_message(&response.body) })
}

/// `GET /referrals`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status, or an
/// undecodable body.
pub async fn list_referrals<T: Transport>(transport: &T, credential: &Credential) -> Result<Vec<Referral>, ApiError> {
    let response = transport
        .send(ApiRequest::authenticated(Endpoint::ListReferrals, credential))
        .await?;
    if !response.is_success() {
        return Err(reject(&response, referral_failure_message));
    }
    referral_list(&response.body)
}

/// `POST /referrals` with `{ email }`.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx status.
pub async fn create_referral<T: Transport>(transport: &T, credential: &Credential, email: &str) -> Result<(), ApiError> {
    let body = encode(&NewReferral { email: email.to_owned() })?;
    let request = ApiRequest::authenticated(Endpoint::CreateReferral, credential).with_body(body);
    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(reject(&response, referral_failure_message));
    }
    Ok(())
}

/// `DELETE /logout`, invalidating `credential` server-side.
///
/// # Errors
///
/// Returns an error on transport failure or a non-2xx status.
pub async fn logout<T: Transport>(transport: &T, credential: &Credential) -> Result<(), ApiError> {
    let response = transport
        .send(ApiRequest::authenticated(Endpoint::Logout, credential))
        .await?;
    if !response.is_success() {
        return Err(ApiError::Status { status: response.status, message: None });
    }
    Ok(())
}
