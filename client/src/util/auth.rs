//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated pages apply identical redirect behavior when the session
//! holds no credential, instead of sending requests with an empty bearer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::pages::LOGIN_ROUTE;
use crate::state::session::Session;

/// Whether a page requiring a credential should send the user to login.
pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.is_authenticated()
}

/// Redirect to `/login` on mount when the session has no credential.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
