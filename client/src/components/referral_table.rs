//! Referral list table: Email, Referral code, Status.

#[cfg(test)]
#[path = "referral_table_test.rs"]
mod referral_table_test;

use leptos::prelude::*;

use crate::net::types::{Referral, ReferralStatus};

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferralRow {
    pub email: String,
    pub code: String,
    pub status: &'static str,
    pub status_class: &'static str,
}

fn status_class(status: ReferralStatus) -> &'static str {
    match status {
        ReferralStatus::Pending => "referral-status referral-status--pending",
        ReferralStatus::Accepted => "referral-status referral-status--accepted",
    }
}

/// Project referrals into display rows. A missing code renders empty.
pub fn table_rows(referrals: &[Referral]) -> Vec<ReferralRow> {
    referrals
        .iter()
        .map(|r| ReferralRow {
            email: r.email.clone(),
            code: r.code.clone().unwrap_or_default(),
            status: r.status.as_str(),
            status_class: status_class(r.status),
        })
        .collect()
}

#[component]
pub fn ReferralTable(referrals: Signal<Vec<Referral>>) -> impl IntoView {
    view! {
        <table class="referral-table">
            <thead>
                <tr>
                    <th>"Email"</th>
                    <th>"Referral code"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    table_rows(&referrals.get())
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>{row.email}</td>
                                    <td>{row.code}</td>
                                    <td>
                                        <span class=row.status_class>{row.status}</span>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
