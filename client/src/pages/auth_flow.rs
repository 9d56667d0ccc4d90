//! Login and signup submission.
//!
//! Both flows validate locally, call the service, and hand the returned
//! credential to the session. They return the text the page should show;
//! navigation stays with the page.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use crate::net::api::{self, ApiError};
use crate::net::transport::Transport;
use crate::state::form::{GENERIC_ERROR_MESSAGE, LoginForm, SignupForm};
use crate::state::session::Session;

/// User-facing text for a failed auth request.
fn failure_text(error: &ApiError) -> String {
    match error {
        ApiError::Storage(e) => e.to_string(),
        other => other.server_message().unwrap_or(GENERIC_ERROR_MESSAGE).to_owned(),
    }
}

/// Submit the login form. On success the session holds the new credential.
///
/// # Errors
///
/// Returns the message to display when validation, the request, or the
/// token write fails.
pub async fn submit_login<T: Transport>(transport: &T, session: &Session, form: &LoginForm) -> Result<(), String> {
    let user = form.validate().map_err(str::to_owned)?;
    let credential = api::login(transport, user).await.map_err(|e| {
        leptos::logging::warn!("login failed: {e}");
        failure_text(&e)
    })?;
    session
        .store_credential(&credential)
        .map_err(|e| failure_text(&ApiError::from(e)))
}

/// Submit the signup form. On success the session holds the new credential
/// and the service's greeting is returned.
///
/// # Errors
///
/// Returns the message to display when validation, the request, or the
/// token write fails.
pub async fn submit_signup<T: Transport>(
    transport: &T,
    session: &Session,
    form: &SignupForm,
) -> Result<Option<String>, String> {
    let user = form.validate().map_err(str::to_owned)?;
    let accepted = api::signup(transport, user).await.map_err(|e| {
        leptos::logging::warn!("signup failed: {e}");
        failure_text(&e)
    })?;
    session
        .store_credential(&accepted.credential)
        .map_err(|e| failure_text(&ApiError::from(e)))?;
    Ok(accepted.message)
}
