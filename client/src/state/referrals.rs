//! Referral-page state: the list, its load status, the create dialog, and
//! the transient notice.
//!
//! DESIGN
//! ======
//! Transitions are plain methods so the async sync loop and the view share
//! one model. Network results are applied whole: a fetch replaces the list,
//! a failed fetch or create leaves it untouched.

#[cfg(test)]
#[path = "referrals_test.rs"]
mod referrals_test;

use crate::net::api::ApiError;
use crate::net::types::Referral;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch referrals";
pub const EMAIL_REQUIRED_MESSAGE: &str = "Please enter a valid email address.";
pub const REFERRAL_SENT_MESSAGE: &str = "Referral sent successfully!";
pub const ALREADY_REFERRED_MESSAGE: &str = "User is already referred by someone";
pub const LOGOUT_FAILED_MESSAGE: &str = "Failed to log out";

/// How long a notice stays visible before auto-hiding.
pub const NOTICE_TIMEOUT_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient, dismissable notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic id; timers only hide the notice they were started for.
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Status of the most recent list fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CreateState {
    #[default]
    Idle,
    Sending,
}

/// Outcome of asking to submit the create dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateStart {
    /// Proceed with a request for this email.
    Send(String),
    /// A create is already in flight.
    Ignored,
    /// Rejected locally; a notice was raised.
    Rejected,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferralsState {
    pub referrals: Vec<Referral>,
    pub load: LoadState,
    pub create: CreateState,
    pub dialog_open: bool,
    pub draft_email: String,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl ReferralsState {
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.create, CreateState::Sending)
    }

    pub fn begin_fetch(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Referral>, ApiError>) {
        match result {
            Ok(referrals) => {
                self.referrals = referrals;
                self.load = LoadState::Ready;
            }
            Err(_) => {
                self.load = LoadState::Failed(FETCH_FAILED_MESSAGE.to_owned());
                self.notify(NoticeKind::Error, FETCH_FAILED_MESSAGE);
            }
        }
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    /// Close the dialog unless a create is in flight.
    pub fn close_dialog(&mut self) {
        if !self.is_sending() {
            self.dialog_open = false;
        }
    }

    pub fn begin_create(&mut self) -> CreateStart {
        if self.is_sending() {
            return CreateStart::Ignored;
        }
        if self.draft_email.trim().is_empty() {
            self.notify(NoticeKind::Error, EMAIL_REQUIRED_MESSAGE);
            return CreateStart::Rejected;
        }
        self.create = CreateState::Sending;
        CreateStart::Send(self.draft_email.clone())
    }

    pub fn finish_create(&mut self, result: Result<(), ApiError>) {
        self.create = CreateState::Idle;
        match result {
            Ok(()) => {
                self.dialog_open = false;
                self.draft_email.clear();
                self.notify(NoticeKind::Success, REFERRAL_SENT_MESSAGE);
            }
            Err(e) => {
                let message = e.server_message().unwrap_or(ALREADY_REFERRED_MESSAGE).to_owned();
                self.notify(NoticeKind::Error, message);
            }
        }
    }

    pub fn logout_failed(&mut self) {
        self.notify(NoticeKind::Error, LOGOUT_FAILED_MESSAGE);
    }

    /// Show `message`, replacing any current notice. Returns the notice id.
    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { id: self.notice_seq, kind, message: message.into() });
        self.notice_seq
    }

    /// Hide the notice with `id`; a newer notice stays visible.
    pub fn dismiss_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }
}
