//! Campaign list fetched once when the home page mounts.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch is logged and leaves the list empty; there is no
//! user-visible error state and no retry affordance. The list never
//! refetches after the mount-time load, including after a sibling form
//! creates a campaign.

use leptos::prelude::*;

use crate::components::campaign_card::CampaignCard;
use crate::state::campaigns::CampaignsState;

#[component]
pub fn CampaignList() -> impl IntoView {
    let campaigns = RwSignal::new(CampaignsState::default());

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<crate::net::api::ApiClient>();
        let alive = crate::util::alive::AliveFlag::new();
        let task_alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = api.list_campaigns().await;
            if !task_alive.is_alive() {
                return;
            }
            match result {
                Ok(items) => campaigns.set(CampaignsState { items, loaded: true }),
                Err(e) => log::error!("campaign list fetch failed: {e}"),
            }
        });
        on_cleanup(move || alive.retire());
    }

    view! {
        <section class="campaign-list">
            {move || {
                campaigns
                    .get()
                    .items
                    .into_iter()
                    .map(|campaign| view! { <CampaignCard campaign=campaign/> })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}
