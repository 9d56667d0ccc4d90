//! Password input with a show/hide toggle.

use leptos::prelude::*;

#[component]
pub fn PasswordField(value: RwSignal<String>) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="password-field">
            <input
                class="auth-input password-field__input"
                type=move || if visible.get() { "text" } else { "password" }
                placeholder="Password"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                class="btn password-field__toggle"
                type="button"
                title=move || if visible.get() { "Hide password" } else { "Show password" }
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}
