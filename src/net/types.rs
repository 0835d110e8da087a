//! Wire DTOs for the crowdfunding API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON field names exactly so serde
//! round-trips stay lossless; Rust-side names follow crate conventions and
//! the mapping lives in `#[serde(rename)]` attributes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A funding campaign as returned by `GET /campaigns`.
///
/// Server-owned and read-only to the client; `raised_amount` in particular
/// is maintained server-side and never written from here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Opaque server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Short headline shown on the campaign card.
    pub title: String,
    /// Longer free-text pitch.
    pub description: String,
    /// Funding target in whole currency units.
    #[serde(rename = "goalAmount")]
    pub goal_amount: f64,
    /// Amount pledged so far, maintained by the server.
    #[serde(rename = "raisedAmount")]
    pub raised_amount: f64,
}

/// Creation payload for `POST /campaigns/create`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCampaign {
    pub title: String,
    pub description: String,
    #[serde(rename = "goalAmount")]
    pub goal_amount: f64,
}

/// Registration payload for `POST /auth/register`.
///
/// Transient: built from form state at submit time and discarded after the
/// call resolves.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login payload for `POST /auth/login`.
///
/// The server may answer with a token or session payload; this client does
/// not store or reuse it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}
