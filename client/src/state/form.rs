//! Auth form models and their submission status.
//!
//! DESIGN
//! ======
//! One tagged `FormStatus` replaces separate loading/error/success flags, so
//! a form can never be loading and failed at once.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{LoginUser, SignupUser};

/// Shown when a required field is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all the details";
/// Shown when a failure carries no usable server message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    Succeeded(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            Self::Succeeded(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Request body for `/login`, or the missing-fields message.
    ///
    /// # Errors
    ///
    /// Returns [`MISSING_FIELDS_MESSAGE`] when any field is empty.
    pub fn validate(&self) -> Result<LoginUser, &'static str> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(MISSING_FIELDS_MESSAGE);
        }
        Ok(LoginUser { email: self.email.clone(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Request body for `/signup`, or the missing-fields message.
    ///
    /// # Errors
    ///
    /// Returns [`MISSING_FIELDS_MESSAGE`] when any field is empty.
    pub fn validate(&self) -> Result<SignupUser, &'static str> {
        if self.username.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(MISSING_FIELDS_MESSAGE);
        }
        Ok(SignupUser {
            name: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
