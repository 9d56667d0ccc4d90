//! Modal dialog for sending a new referral.

use leptos::prelude::*;

use crate::state::cell::StateCell;
use crate::state::referrals::ReferralsState;

/// Email entry dialog. `on_submit` starts the create flow; closing is
/// refused while a create is in flight.
#[component]
pub fn ReferralDialog(state: RwSignal<ReferralsState>, on_submit: Callback<()>) -> impl IntoView {
    let sending = move || state.with(ReferralsState::is_sending);
    let close = move || {
        state.with_mut(ReferralsState::close_dialog);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Refer a Friend"</h2>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="friend@example.com"
                        prop:value=move || state.with(|s| s.draft_email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.with_mut(|s| s.draft_email = value);
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" disabled=sending on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=sending on:click=move |_| on_submit.run(())>
                        {move || if sending() { "Sending..." } else { "Send" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
