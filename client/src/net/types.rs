//! Wire DTOs for the referral service.
//!
//! DESIGN
//! ======
//! Request bodies wrap credentials under a `user` key; list responses nest
//! their payload under `status.data` and carry a human message in
//! `status.message`. Optional envelope fields decode to `None` so a sparse
//! response never fails the whole request.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a referral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralStatus {
    Pending,
    Accepted,
}

impl ReferralStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for ReferralStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A referral as returned by `GET /referrals`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    /// Invited user's email address.
    pub email: String,
    pub status: ReferralStatus,
    /// Referral code, once the service has issued one.
    pub code: Option<String>,
}

/// `{ "user": ... }` wrapper used by `/login` and `/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}

/// Login credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

/// Signup details. The service calls the username `name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /referrals`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewReferral {
    pub email: String,
}

/// `{ "status": { "message": ..., "data": ... } }` response envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatusEnvelope<T> {
    pub status: Option<StatusBody<T>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatusBody<T> {
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> StatusEnvelope<T> {
    pub fn into_data(self) -> Option<T> {
        self.status.and_then(|s| s.data)
    }

    pub fn into_message(self) -> Option<String> {
        self.status.and_then(|s| s.message)
    }
}

/// Flat `{ "message": ... }` error body returned by referral endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
