//! Networking modules for the referral service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `transport` the request/response model
//! and the `Transport` seam, `http` the browser implementation, and `api`
//! the typed operations pages call.

pub mod api;
pub mod http;
pub mod transport;
pub mod types;
