//! Referral management page: list, create, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the list once on
//! mount, redirects to `/login` when the session holds no credential, and
//! hands each user action to `referral_sync` on the browser executor.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notice_bar::NoticeBar;
use crate::components::referral_dialog::ReferralDialog;
use crate::components::referral_table::ReferralTable;
use crate::state::cell::StateCell;
use crate::state::referrals::ReferralsState;
use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ReferralsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let state = RwSignal::new(ReferralsState::default());

    install_unauth_redirect(session.clone(), navigate.clone());

    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let transport = crate::net::http::HttpTransport::from_config();
            super::referral_sync::fetch(&transport, &session, &state).await;
        });
    }

    let create_session = session.clone();
    let on_create = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let session = create_session.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::http::HttpTransport::from_config();
                super::referral_sync::create(&transport, &session, &state).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &create_session;
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::http::HttpTransport::from_config();
                super::referral_sync::logout(&transport, &session, &state, |path| {
                    navigate(path, leptos_router::NavigateOptions::default());
                })
                .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&session, &navigate);
    };

    let referrals = Signal::derive(move || state.with(|s| s.referrals.clone()));

    view! {
        <div class="referrals-page">
            <header class="referrals-page__header toolbar">
                <span class="toolbar__title">"Referrals"</span>
                <span class="toolbar__spacer"></span>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        state.with_mut(ReferralsState::open_dialog);
                    }
                >
                    "+ New Referral"
                </button>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <Show
                when=move || !state.with(ReferralsState::is_loading)
                fallback=move || view! { <p class="referrals-page__loading">"Loading referrals..."</p> }
            >
                <ReferralTable referrals=referrals/>
            </Show>

            <Show when=move || state.with(|s| s.dialog_open)>
                <ReferralDialog state=state on_submit=on_create/>
            </Show>

            <NoticeBar state=state/>
        </div>
    }
}
