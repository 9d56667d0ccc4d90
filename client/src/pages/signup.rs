//! Signup page: username, email and password against `POST /signup`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::pages::LOGIN_ROUTE;
use crate::state::form::{FormStatus, SignupForm};
use crate::state::session::Session;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }
        let form = SignupForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        status.set(FormStatus::Submitting);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::http::HttpTransport::from_config();
                match crate::pages::auth_flow::submit_signup(&transport, &session, &form).await {
                    Ok(message) => {
                        status.set(FormStatus::Succeeded(message.unwrap_or_default()));
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
                <h1>"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <PasswordField value=password/>
                    <button class="auth-button" type="submit" disabled=move || status.get().is_submitting()>
                        {move || if status.get().is_submitting() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || status.get().error().is_some()>
                    <p class="auth-message auth-message--error">
                        {move || status.get().error().unwrap_or_default().to_owned()}
                    </p>
                </Show>
                <Show when=move || status.get().success().is_some_and(|m| !m.is_empty())>
                    <p class="auth-message auth-message--success">
                        {move || status.get().success().unwrap_or_default().to_owned()}
                    </p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href=LOGIN_ROUTE>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
