//! HTTP backend abstraction for the catalog sources.
//!
//! A trait-based backend allows dependency injection: the production
//! implementation uses reqwest, while tests run against canned
//! responses. Each fetch is a single GET with no retry.

use crate::error::{SourceError, SourceResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> SourceResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// The registry fetch uses no explicit timeout (the transport's own
/// limits apply); the local-server fetch passes a short one.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a backend with no request timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a backend with a per-request timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for ReqwestBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> SourceResult<T> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;

    /// A fake HTTP backend that returns canned JSON responses keyed by
    /// URL substring.
    pub struct FakeBackend {
        responses: HashMap<String, serde_json::Value>,
    }

    impl FakeBackend {
        /// Create a new fake backend with no responses.
        pub fn new() -> Self {
            Self {
                responses: HashMap::new(),
            }
        }

        /// Add a canned response for a URL pattern.
        pub fn with_response(mut self, url_contains: &str, json: serde_json::Value) -> Self {
            self.responses.insert(url_contains.to_string(), json);
            self
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> SourceResult<T> {
            let json = self
                .responses
                .iter()
                .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
                .map(|(_, json)| json.clone())
                .ok_or_else(|| SourceError::RequestFailed {
                    status: 404,
                    url: url.to_string(),
                })?;

            serde_json::from_value(json).map_err(Into::into)
        }
    }
}
