//! Injected API endpoint configuration.
//!
//! DESIGN
//! ======
//! The base URL is a constructor argument rather than a process-wide
//! constant so tests and alternate deployments can point the client at a
//! different server without recompiling.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Location of the crowdfunding API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL all request paths are joined onto, e.g.
    /// `http://localhost:5000/api`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_owned(),
        }
    }
}

impl ApiConfig {
    /// Build a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join a request path onto the base URL without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
