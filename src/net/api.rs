//! REST client for the crowdfunding API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Network`] since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! The client is an explicit value built from an [`ApiConfig`] and handed to
//! the view tree through Leptos context; nothing in this module is a hidden
//! process-wide instance.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::error::ApiError;
use super::types::{Campaign, LoginPayload, NewCampaign, RegisterPayload};

#[cfg(any(test, feature = "hydrate"))]
const CAMPAIGNS_PATH: &str = "/campaigns";
#[cfg(any(test, feature = "hydrate"))]
const CAMPAIGN_CREATE_PATH: &str = "/campaigns/create";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_PATH: &str = "/auth/register";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/auth/login";

#[cfg(not(feature = "hydrate"))]
fn server_side_stub() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// HTTP client for the four crowdfunding API operations.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    /// Build a client against the given endpoint configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// The endpoint configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch all campaigns via `GET /campaigns`, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the endpoint is unreachable, the server
    /// answers with a non-success status, or the body fails to decode.
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.endpoint(CAMPAIGNS_PATH))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Server {
                    status: resp.status(),
                });
            }
            resp.json::<Vec<Campaign>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side_stub())
        }
    }

    /// Create a campaign via `POST /campaigns/create`.
    ///
    /// Returns the server-created [`Campaign`]; callers typically use only
    /// the success signal.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the endpoint is unreachable, the server
    /// answers with a non-success status, or the body fails to decode.
    pub async fn create_campaign(&self, payload: &NewCampaign) -> Result<Campaign, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint(CAMPAIGN_CREATE_PATH))
                .json(payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Server {
                    status: resp.status(),
                });
            }
            resp.json::<Campaign>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(server_side_stub())
        }
    }

    /// Register a new user via `POST /auth/register`.
    ///
    /// The response body is an opaque success payload and is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the endpoint is unreachable or the server
    /// answers with a non-success status.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint(REGISTER_PATH))
                .json(payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Server {
                    status: resp.status(),
                });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(server_side_stub())
        }
    }

    /// Log a user in via `POST /auth/login`.
    ///
    /// Any token or session payload in the response is a server concern;
    /// nothing is stored or reused client-side.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the endpoint is unreachable or the server
    /// answers with a non-success status.
    pub async fn login(&self, payload: &LoginPayload) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint(LOGIN_PATH))
                .json(payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Server {
                    status: resp.status(),
                });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(server_side_stub())
        }
    }
}
