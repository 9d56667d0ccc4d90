//! Login page: email + password against `POST /login`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::pages::SIGNUP_ROUTE;
use crate::state::form::{FormStatus, LoginForm};
use crate::state::session::Session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        status.set(FormStatus::Submitting);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::http::HttpTransport::from_config();
                match crate::pages::auth_flow::submit_login(&transport, &session, &form).await {
                    Ok(()) => {
                        status.set(FormStatus::Idle);
                        navigate(crate::pages::REFERRALS_ROUTE, leptos_router::NavigateOptions::default());
                    }
                    Err(message) => status.set(FormStatus::Failed(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&session, &navigate, form);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <PasswordField value=password/>
                    <button class="auth-button" type="submit" disabled=move || status.get().is_submitting()>
                        {move || if status.get().is_submitting() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || status.get().error().is_some()>
                    <p class="auth-message auth-message--error">
                        {move || status.get().error().unwrap_or_default().to_owned()}
                    </p>
                </Show>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href=SIGNUP_ROUTE>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
