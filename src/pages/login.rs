//! Login page: email + password against `POST /auth/login`.
//!
//! Navigation to `/` happens strictly after the login call resolves
//! successfully; a failure shows the error and stays on the page. No token
//! or session data from the response is stored client-side.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginPayload;
use crate::state::form::FormState;

const FIELD_EMAIL: &str = "email";
const FIELD_PASSWORD: &str = "password";

fn login_fields() -> FormState {
    FormState::new(&[FIELD_EMAIL, FIELD_PASSWORD])
}

/// Build the login payload from the current form values. The email is
/// trimmed; the password is sent exactly as typed.
fn build_login_payload(form: &FormState) -> Result<LoginPayload, &'static str> {
    if !form.is_complete() {
        return Err("Enter both email and password.");
    }
    Ok(LoginPayload {
        email: form.value(FIELD_EMAIL).trim().to_owned(),
        password: form.value(FIELD_PASSWORD).to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(login_fields());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api = expect_context::<crate::net::api::ApiClient>();
    let alive = crate::util::alive::AliveFlag::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.retire()
    });
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_login_payload(&form.get()) {
            Ok(payload) => payload,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let task_alive = alive.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = api.login(&payload).await;
                if !task_alive.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(e) => {
                        message.set(format!("Login failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &alive, payload);
            busy.set(false);
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        required=true
                        prop:value=move || form.with(|f| f.value(FIELD_EMAIL).to_owned())
                        on:input=move |ev| form.update(|f| f.set(FIELD_EMAIL, event_target_value(&ev)))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || form.with(|f| f.value(FIELD_PASSWORD).to_owned())
                        on:input=move |ev| form.update(|f| f.set(FIELD_PASSWORD, event_target_value(&ev)))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
            </div>
        </main>
    }
}
