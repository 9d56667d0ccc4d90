//! Fetch / create / logout cycle behind the referrals page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page spawns these flows on the browser executor. Each one reads the
//! credential from the session right before its request and never sends an
//! authenticated request without one. State changes go through a
//! `StateCell`, so results landing after unmount are dropped.

#[cfg(test)]
#[path = "referral_sync_test.rs"]
mod referral_sync_test;

use crate::net::api::{self, ApiError};
use crate::net::transport::Transport;
use crate::pages::LOGIN_ROUTE;
use crate::state::cell::StateCell;
use crate::state::referrals::{CreateStart, ReferralsState};
use crate::state::session::{Credential, Session};

fn require_credential(session: &Session) -> Result<Credential, ApiError> {
    session.credential()?.ok_or(ApiError::NoCredential)
}

/// Replace the referral list with a fresh `GET /referrals`.
pub async fn fetch<T, C>(transport: &T, session: &Session, state: &C)
where
    T: Transport,
    C: StateCell<ReferralsState>,
{
    if state.with_mut(ReferralsState::begin_fetch).is_none() {
        return;
    }
    let result = match require_credential(session) {
        Ok(credential) => api::list_referrals(transport, &credential).await,
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        leptos::logging::warn!("referral fetch failed: {e}");
    }
    state.with_mut(|s| s.finish_fetch(result));
}

/// Submit the dialog's email. At most one create is in flight; a success
/// triggers a full re-fetch.
pub async fn create<T, C>(transport: &T, session: &Session, state: &C)
where
    T: Transport,
    C: StateCell<ReferralsState>,
{
    let Some(CreateStart::Send(email)) = state.with_mut(ReferralsState::begin_create) else {
        return;
    };
    let result = match require_credential(session) {
        Ok(credential) => api::create_referral(transport, &credential, &email).await,
        Err(e) => Err(e),
    };
    let created = result.is_ok();
    if let Err(e) = &result {
        leptos::logging::warn!("referral create failed: {e}");
    }
    if state.with_mut(|s| s.finish_create(result)).is_none() {
        return;
    }
    if created {
        fetch(transport, session, state).await;
    }
}

/// Invalidate the session remotely, then locally, then go to login.
///
/// A failed `DELETE /logout` leaves the local token in place.
pub async fn logout<T, C, N>(transport: &T, session: &Session, state: &C, navigate: N)
where
    T: Transport,
    C: StateCell<ReferralsState>,
    N: FnOnce(&str),
{
    let outcome = match session.credential() {
        Ok(Some(credential)) => match api::logout(transport, &credential).await {
            Ok(()) => session.clear().map_err(ApiError::from),
            Err(e) => Err(e),
        },
        // Nothing to revoke.
        Ok(None) => Ok(()),
        Err(e) => Err(e.into()),
    };
    match outcome {
        Ok(()) => navigate(LOGIN_ROUTE),
        Err(e) => {
            leptos::logging::warn!("logout failed: {e}");
            state.with_mut(ReferralsState::logout_failed);
        }
    }
}
