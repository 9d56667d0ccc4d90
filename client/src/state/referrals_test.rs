use super::*;
use crate::net::transport::TransportError;
use crate::net::types::ReferralStatus;

fn referral(email: &str, status: ReferralStatus) -> Referral {
    Referral { email: email.to_owned(), status, code: None }
}

fn ready_with(rows: Vec<Referral>) -> ReferralsState {
    let mut state = ReferralsState::default();
    state.finish_fetch(Ok(rows));
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn referrals_state_starts_loading_and_empty() {
    let state = ReferralsState::default();
    assert!(state.is_loading());
    assert!(state.referrals.is_empty());
    assert!(!state.dialog_open);
    assert!(state.notice.is_none());
    assert_eq!(state.create, CreateState::Idle);
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn finish_fetch_success_replaces_list() {
    let mut state = ready_with(vec![referral("old@x.com", ReferralStatus::Accepted)]);
    state.begin_fetch();
    state.finish_fetch(Ok(vec![referral("a@x.com", ReferralStatus::Pending)]));

    assert_eq!(state.load, LoadState::Ready);
    assert_eq!(state.referrals, vec![referral("a@x.com", ReferralStatus::Pending)]);
}

#[test]
fn finish_fetch_failure_keeps_list_and_notifies() {
    let rows = vec![referral("a@x.com", ReferralStatus::Pending)];
    let mut state = ready_with(rows.clone());
    state.begin_fetch();
    state.finish_fetch(Err(ApiError::Status { status: 500, message: None }));

    assert_eq!(state.load, LoadState::Failed(FETCH_FAILED_MESSAGE.to_owned()));
    assert_eq!(state.referrals, rows);
    let notice = state.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, FETCH_FAILED_MESSAGE);
}

#[test]
fn first_fetch_failure_leaves_list_empty() {
    let mut state = ReferralsState::default();
    state.finish_fetch(Err(ApiError::Transport(TransportError("offline".to_owned()))));
    assert!(state.referrals.is_empty());
    assert!(!state.is_loading());
}

// =============================================================
// Create
// =============================================================

#[test]
fn begin_create_rejects_blank_email() {
    let mut state = ready_with(Vec::new());
    state.draft_email = "   ".to_owned();

    assert_eq!(state.begin_create(), CreateStart::Rejected);
    assert!(!state.is_sending());
    assert_eq!(state.notice.unwrap().message, EMAIL_REQUIRED_MESSAGE);
}

#[test]
fn begin_create_marks_sending_and_sends_email_as_typed() {
    let mut state = ready_with(Vec::new());
    state.draft_email = " b@x.com ".to_owned();

    assert_eq!(state.begin_create(), CreateStart::Send(" b@x.com ".to_owned()));
    assert!(state.is_sending());
}

#[test]
fn begin_create_while_sending_is_ignored() {
    let mut state = ready_with(Vec::new());
    state.draft_email = "b@x.com".to_owned();
    assert!(matches!(state.begin_create(), CreateStart::Send(_)));

    assert_eq!(state.begin_create(), CreateStart::Ignored);
    assert_eq!(state.begin_create(), CreateStart::Ignored);
    assert!(state.notice.is_none());
}

#[test]
fn finish_create_success_closes_dialog_and_clears_input() {
    let mut state = ready_with(Vec::new());
    state.open_dialog();
    state.draft_email = "b@x.com".to_owned();
    state.begin_create();

    state.finish_create(Ok(()));

    assert!(!state.dialog_open);
    assert!(state.draft_email.is_empty());
    assert!(!state.is_sending());
    let notice = state.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, REFERRAL_SENT_MESSAGE);
}

#[test]
fn finish_create_failure_keeps_dialog_and_list() {
    let rows = vec![referral("a@x.com", ReferralStatus::Accepted)];
    let mut state = ready_with(rows.clone());
    state.open_dialog();
    state.draft_email = "b@x.com".to_owned();
    state.begin_create();

    state.finish_create(Err(ApiError::Status { status: 422, message: None }));

    assert!(state.dialog_open);
    assert_eq!(state.draft_email, "b@x.com");
    assert_eq!(state.referrals, rows);
    assert!(!state.is_sending());
    assert_eq!(state.notice.unwrap().message, ALREADY_REFERRED_MESSAGE);
}

#[test]
fn finish_create_failure_prefers_server_message() {
    let mut state = ready_with(Vec::new());
    state.draft_email = "b@x.com".to_owned();
    state.begin_create();

    state.finish_create(Err(ApiError::Status { status: 422, message: Some("Email is invalid".to_owned()) }));

    assert_eq!(state.notice.unwrap().message, "Email is invalid");
}

// =============================================================
// Dialog
// =============================================================

#[test]
fn close_dialog_is_blocked_while_sending() {
    let mut state = ready_with(Vec::new());
    state.open_dialog();
    state.draft_email = "b@x.com".to_owned();
    state.begin_create();

    state.close_dialog();
    assert!(state.dialog_open);

    state.finish_create(Err(ApiError::NoCredential));
    state.close_dialog();
    assert!(!state.dialog_open);
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notify_replaces_previous_notice_with_new_id() {
    let mut state = ReferralsState::default();
    let first = state.notify(NoticeKind::Error, "one");
    let second = state.notify(NoticeKind::Success, "two");

    assert_ne!(first, second);
    assert_eq!(state.notice.as_ref().unwrap().message, "two");
}

#[test]
fn dismiss_stale_id_keeps_newer_notice() {
    let mut state = ReferralsState::default();
    let first = state.notify(NoticeKind::Error, "one");
    let second = state.notify(NoticeKind::Error, "two");

    state.dismiss_notice(first);
    assert!(state.notice.is_some());

    state.dismiss_notice(second);
    assert!(state.notice.is_none());
}

#[test]
fn logout_failed_raises_error_notice() {
    let mut state = ReferralsState::default();
    state.logout_failed();
    let notice = state.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, LOGOUT_FAILED_MESSAGE);
}
