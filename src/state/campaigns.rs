//! Campaign-list state for the home page.
//!
//! DESIGN
//! ======
//! The list has exactly two states: empty (initial, or fetch failed) and
//! loaded. There is no pending or error state and no refetch after the
//! mount-time load.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use crate::net::types::Campaign;

/// Campaigns fetched once when the list view mounts, in server order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignsState {
    pub items: Vec<Campaign>,
    pub loaded: bool,
}
