//! Campaign creation form.
//!
//! ERROR HANDLING
//! ==============
//! Submission branches explicitly: success shows a created message and
//! resets the form, failure shows the error and leaves the form intact.
//! The submit button stays disabled while a call is in flight.

#[cfg(test)]
#[path = "campaign_form_test.rs"]
mod campaign_form_test;

use leptos::prelude::*;

use crate::net::types::NewCampaign;
use crate::state::form::FormState;

const FIELD_TITLE: &str = "title";
const FIELD_DESCRIPTION: &str = "description";
const FIELD_GOAL_AMOUNT: &str = "goalAmount";

fn campaign_fields() -> FormState {
    FormState::new(&[FIELD_TITLE, FIELD_DESCRIPTION, FIELD_GOAL_AMOUNT])
}

/// Build the creation payload from the current form values.
fn build_campaign_payload(form: &FormState) -> Result<NewCampaign, &'static str> {
    if !form.is_complete() {
        return Err("Fill in every field first.");
    }
    let goal: f64 = form
        .value(FIELD_GOAL_AMOUNT)
        .trim()
        .parse()
        .map_err(|_| "Goal amount must be a number.")?;
    if !goal.is_finite() {
        return Err("Goal amount must be a number.");
    }
    if goal < 0.0 {
        return Err("Goal amount cannot be negative.");
    }
    Ok(NewCampaign {
        title: form.value(FIELD_TITLE).trim().to_owned(),
        description: form.value(FIELD_DESCRIPTION).trim().to_owned(),
        goal_amount: goal,
    })
}

#[component]
pub fn CampaignForm() -> impl IntoView {
    let form = RwSignal::new(campaign_fields());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let api = expect_context::<crate::net::api::ApiClient>();
    let alive = crate::util::alive::AliveFlag::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.retire()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_campaign_payload(&form.get()) {
            Ok(payload) => payload,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let task_alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = api.create_campaign(&payload).await;
                if !task_alive.is_alive() {
                    return;
                }
                match result {
                    Ok(_) => {
                        message.set("Campaign created!".to_owned());
                        form.update(|f| f.reset());
                    }
                    Err(e) => message.set(format!("Campaign creation failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &alive, payload);
            busy.set(false);
        }
    };

    view! {
        <form class="campaign-form" on:submit=on_submit>
            <h2 class="campaign-form__heading">"Start a Campaign"</h2>
            <label class="campaign-form__label">
                "Title"
                <input
                    class="campaign-form__input"
                    type="text"
                    required=true
                    prop:value=move || form.with(|f| f.value(FIELD_TITLE).to_owned())
                    on:input=move |ev| form.update(|f| f.set(FIELD_TITLE, event_target_value(&ev)))
                />
            </label>
            <label class="campaign-form__label">
                "Description"
                <textarea
                    class="campaign-form__input campaign-form__input--multiline"
                    rows="3"
                    required=true
                    prop:value=move || form.with(|f| f.value(FIELD_DESCRIPTION).to_owned())
                    on:input=move |ev| form.update(|f| f.set(FIELD_DESCRIPTION, event_target_value(&ev)))
                ></textarea>
            </label>
            <label class="campaign-form__label">
                "Goal Amount"
                <input
                    class="campaign-form__input"
                    type="number"
                    required=true
                    prop:value=move || form.with(|f| f.value(FIELD_GOAL_AMOUNT).to_owned())
                    on:input=move |ev| form.update(|f| f.set(FIELD_GOAL_AMOUNT, event_target_value(&ev)))
                />
            </label>
            <button class="campaign-form__submit btn btn--primary" type="submit" disabled=move || busy.get()>
                "Create Campaign"
            </button>
            <Show when=move || !message.get().is_empty()>
                <p class="campaign-form__message">{move || message.get()}</p>
            </Show>
        </form>
    }
}
