//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render campaign content and form surfaces; route-level
//! orchestration stays in `pages`.

pub mod campaign_card;
pub mod campaign_form;
pub mod campaign_list;
pub mod navbar;
