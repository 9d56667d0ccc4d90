use futures::executor::block_on;

use super::*;
use crate::net::transport::fake::FakeTransport;
use crate::net::transport::{ApiResponse, Endpoint, TransportError};
use crate::state::form::MISSING_FIELDS_MESSAGE;
use crate::util::token_store::{MemoryTokenStore, StorageError, TokenStore};

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned() }
}

fn signup_form(username: &str, email: &str, password: &str) -> SignupForm {
    SignupForm { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() }
}

/// Store whose writes always fail.
struct BrokenStore;

impl TokenStore for BrokenStore {
    fn set(&self, _token: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("QuotaExceededError".to_owned()))
    }

    fn get(&self) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn remove(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

// =============================================================
// Local validation
// =============================================================

#[test]
fn login_with_blank_field_sends_nothing() {
    let transport = FakeTransport::new();
    let session = Session::new(MemoryTokenStore::new());

    let result = block_on(submit_login(&transport, &session, &login_form("a@x.com", "")));

    assert_eq!(result, Err(MISSING_FIELDS_MESSAGE.to_owned()));
    assert!(transport.requests().is_empty());
    assert!(!session.is_authenticated());
}

#[test]
fn signup_with_blank_field_sends_nothing() {
    let transport = FakeTransport::new();
    let session = Session::new(MemoryTokenStore::new());

    let result = block_on(submit_signup(&transport, &session, &signup_form("", "a@x.com", "pw")));

    assert_eq!(result, Err(MISSING_FIELDS_MESSAGE.to_owned()));
    assert!(transport.requests().is_empty());
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_stores_exact_token() {
    let transport = FakeTransport::new();
    transport.reply(Ok(ApiResponse::new(200, "{}").with_authorization("Bearer eyJ.abc.def")));
    let store = MemoryTokenStore::with_token("previous");
    let session = Session::new(store.clone());

    block_on(submit_login(&transport, &session, &login_form("a@x.com", "pw"))).unwrap();

    assert_eq!(store.get(), Ok(Some("eyJ.abc.def".to_owned())));
    assert_eq!(transport.count(Endpoint::Login), 1);
}

#[test]
fn login_failure_shows_body_text_and_keeps_store() {
    let transport = FakeTransport::new();
    transport.reply(Ok(ApiResponse::new(401, "Invalid Email or password.")));
    let session = Session::new(MemoryTokenStore::new());

    let result = block_on(submit_login(&transport, &session, &login_form("a@x.com", "bad")));

    assert_eq!(result, Err("Invalid Email or password.".to_owned()));
    assert!(!session.is_authenticated());
}

#[test]
fn login_failure_with_empty_body_falls_back_to_generic() {
    let transport = FakeTransport::new();
    transport.reply(Ok(ApiResponse::new(500, "")));
    let session = Session::new(MemoryTokenStore::new());

    let result = block_on(submit_login(&transport, &session, &login_form("a@x.com", "pw")));

    assert_eq!(result, Err(GENERIC_ERROR_MESSAGE.to_owned()));
}

#[test]
fn login_transport_failure_is_generic() {
    let transport = FakeTransport::new();
    transport.reply(Err(TransportError("NetworkError".to_owned())));
    let session = Session::new(MemoryTokenStore::new());

    let result = block_on(submit_login(&transport, &session, &login_form("a@x.com", "pw")));

    assert_eq!(result, Err(GENERIC_ERROR_MESSAGE.to_owned()));
}

#[test]
fn login_success_without_token_does_not_authenticate() {
    let transport = FakeTransport::new();
    transport.reply(Ok(ApiResponse::new(200, "{}")));
    let session = Session::new(MemoryTokenStore::new());

    let result = block_on(submit_login(&transport, &session, &login_form("a@x.com", "pw")));

    assert_eq!(result, Err(GENERIC_ERROR_MESSAGE.to_owned()));
    assert!(!session.is_authenticated());
}

#[test]
fn login_storage_failure_is_reported() {
    let transport = FakeTransport::new();
    transport.reply(Ok(ApiResponse::new(200, "{}").with_authorization("Bearer T")));
    let session = Session::new(BrokenStore);

    let result = block_on(submit_login(&transport, &session, &login_form("a@x.com", "pw")));

    assert_eq!(result, Err("storage operation failed: QuotaExceededError".to_owned()));
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_success_stores_token_and_returns_message() {
    let transport = FakeTransport::new();
    transport.reply(Ok(ApiResponse::new(200, r#"{"status":{"message":"Signed up successfully."}}"#)
        .with_authorization("Bearer S-1")));
    let store = MemoryTokenStore::new();
    let session = Session::new(store.clone());

    let message = block_on(submit_signup(&transport, &session, &signup_form("alice", "a@x.com", "pw"))).unwrap();

    assert_eq!(message.as_deref(), Some("Signed up successfully."));
    assert_eq!(store.get(), Ok(Some("S-1".to_owned())));
}

#[test]
fn signup_failure_uses_status_message() {
    let transport = FakeTransport::new();
    transport.reply(Ok(ApiResponse::new(422, r#"{"status":{"message":"Email has already been taken"}}"#)));
    let session = Session::new(MemoryTokenStore::new());

    let result = block_on(submit_signup(&transport, &session, &signup_form("alice", "a@x.com", "pw")));

    assert_eq!(result, Err("Email has already been taken".to_owned()));
}

#[test]
fn signup_failure_with_unparseable_body_is_generic() {
    let transport = FakeTransport::new();
    transport.reply(Ok(ApiResponse::new(502, "<html>Bad Gateway</html>")));
    let session = Session::new(MemoryTokenStore::new());

    let result = block_on(submit_signup(&transport, &session, &signup_form("alice", "a@x.com", "pw")));

    assert_eq!(result, Err(GENERIC_ERROR_MESSAGE.to_owned()));
}
