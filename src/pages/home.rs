//! Home page: campaign creation form above the campaign list.

use leptos::prelude::*;

use crate::components::campaign_form::CampaignForm;
use crate::components::campaign_list::CampaignList;

/// Landing route. The form and the list are independent; creating a
/// campaign does not refetch the list.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <CampaignForm/>
            <CampaignList/>
        </main>
    }
}
