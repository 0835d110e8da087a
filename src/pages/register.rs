//! Registration page: name + email + password against `POST /auth/register`.
//!
//! Navigation to `/login` happens strictly after the register call resolves
//! successfully; a failure shows the error and stays on the page. The
//! credentials live only in form state until submission.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterPayload;
use crate::state::form::FormState;

const FIELD_NAME: &str = "name";
const FIELD_EMAIL: &str = "email";
const FIELD_PASSWORD: &str = "password";

fn register_fields() -> FormState {
    FormState::new(&[FIELD_NAME, FIELD_EMAIL, FIELD_PASSWORD])
}

/// Build the registration payload from the current form values. Name and
/// email are trimmed; the password is sent exactly as typed.
fn build_register_payload(form: &FormState) -> Result<RegisterPayload, &'static str> {
    if !form.is_complete() {
        return Err("Enter name, email, and password.");
    }
    Ok(RegisterPayload {
        name: form.value(FIELD_NAME).trim().to_owned(),
        email: form.value(FIELD_EMAIL).trim().to_owned(),
        password: form.value(FIELD_PASSWORD).to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(register_fields());
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
        let payload = match build_register_payload(&form.get()) {
            Ok(payload) => payload,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let task_alive = alive.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = api.register(&payload).await;
                if !task_alive.is_alive() {
                    return;
                }
                match result {
                    Ok(()) => navigate("/login", NavigateOptions::default()),
                    Err(e) => {
                        message.set(format!("Registration failed: {e}"));
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
                <h1>"Register"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        required=true
                        prop:value=move || form.with(|f| f.value(FIELD_NAME).to_owned())
                        on:input=move |ev| form.update(|f| f.set(FIELD_NAME, event_target_value(&ev)))
                    />
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
                        "Register"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
            </div>
        </main>
    }
}
