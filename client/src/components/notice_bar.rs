//! Transient notice shown at the bottom of the referrals page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each notice carries an id. The auto-hide timer started for a notice only
//! dismisses that id, so a newer notice is never cut short by an older timer.

use leptos::prelude::*;

use crate::state::cell::StateCell;
use crate::state::referrals::{NoticeKind, ReferralsState};

#[cfg(feature = "hydrate")]
use crate::state::referrals::NOTICE_TIMEOUT_MS;

/// CSS modifier for a notice kind.
pub fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Error => "notice notice--error",
    }
}

#[component]
pub fn NoticeBar(state: RwSignal<ReferralsState>) -> impl IntoView {
    let notice_id = Memo::new(move |_| state.with(|s| s.notice.as_ref().map(|n| n.id)));

    Effect::new(move || {
        let Some(id) = notice_id.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            state.with_mut(|s| s.dismiss_notice(id));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    move || {
        state.with(|s| s.notice.clone()).map(|notice| {
            let id = notice.id;
            view! {
                <div class=notice_class(notice.kind) role="status">
                    <span class="notice__message">{notice.message}</span>
                    <button
                        class="btn notice__dismiss"
                        title="Dismiss"
                        on:click=move |_| {
                            state.with_mut(|s| s.dismiss_notice(id));
                        }
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
