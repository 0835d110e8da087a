//! Networking modules for the crowdfunding REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `config` holds the injected endpoint
//! configuration, `error` defines the failure taxonomy, and `types` defines
//! the shared wire schema.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
