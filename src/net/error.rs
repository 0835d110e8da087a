//! Failure taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every API operation returns `Result<_, ApiError>` and every submission
//! path branches on it explicitly, so a failed call always surfaces as a
//! user-visible message instead of an unhandled rejection.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// What went wrong talking to the crowdfunding API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (endpoint unreachable,
    /// connection dropped, request could not be built).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success HTTP status.
    #[error("server responded with status {status}")]
    Server { status: u16 },
    /// The server answered with a success status but an undecodable body.
    #[error("could not decode response: {0}")]
    Decode(String),
}
