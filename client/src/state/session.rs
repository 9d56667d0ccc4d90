//! Authenticated-session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `Session` at startup and provides it through Leptos
//! context. Auth pages write the credential after a successful login/signup,
//! the referral page reads it before every authenticated call and clears it
//! on logout. Nothing else touches the token store directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use crate::util::token_store::{BrowserTokenStore, StorageError, TokenStore};

/// Opaque bearer token. Never empty; `Debug` output hides the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap `token`, rejecting blank values.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() { None } else { Some(Self(token)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` request header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Handle to the session's token store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Session persisted in browser `localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserTokenStore)
    }

    /// The stored credential, if any. Blank stored values count as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the token store cannot be read.
    pub fn credential(&self) -> Result<Option<Credential>, StorageError> {
        Ok(self.store.get()?.and_then(Credential::new))
    }

    /// Replace the stored credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the token store rejects the write.
    pub fn store_credential(&self, credential: &Credential) -> Result<(), StorageError> {
        self.store.set(credential.as_str())
    }

    /// Forget the stored credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the token store rejects the removal.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.credential(), Ok(Some(_)))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("authenticated", &self.is_authenticated()).finish()
    }
}
