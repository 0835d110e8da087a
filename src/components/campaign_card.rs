//! Summary card for one campaign in the list.

use leptos::prelude::*;

use crate::net::types::Campaign;
use crate::util::money::format_usd;

/// One campaign rendered as title, description, goal, and raised amount.
#[component]
pub fn CampaignCard(campaign: Campaign) -> impl IntoView {
    view! {
        <article class="campaign-card">
            <h2 class="campaign-card__title">{campaign.title}</h2>
            <p class="campaign-card__description">{campaign.description}</p>
            <p class="campaign-card__amount">"Goal: " {format_usd(campaign.goal_amount)}</p>
            <p class="campaign-card__amount">"Raised: " {format_usd(campaign.raised_amount)}</p>
        </article>
    }
}
