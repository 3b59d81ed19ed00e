//! Source endpoint configuration.
//!
//! Endpoints are explicit configuration values threaded into the
//! clients, not ambient globals. The local-server address resolves with
//! the precedence: explicit flag, environment override, hardcoded
//! default.

/// Default address of the local Ollama server.
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

/// Environment variable overriding the local Ollama server address.
pub const OLLAMA_HOST_ENV: &str = "OLLAMA_HOST";

const DEFAULT_REGISTRY_URL: &str = "https://openrouter.ai/api/v1/models";

/// Configuration for the catalog source clients.
#[derive(Debug, Clone)]
pub struct SourcesConfig {
    /// Model registry endpoint (OpenRouter-compatible `models` listing).
    pub registry_url: String,
    /// Base address of the local Ollama server.
    pub ollama_host: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            ollama_host: DEFAULT_OLLAMA_HOST.to_string(),
        }
    }
}

impl SourcesConfig {
    /// Create a configuration with default endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the registry endpoint.
    #[must_use]
    pub fn with_registry_url(mut self, url: impl Into<String>) -> Self {
        self.registry_url = url.into();
        self
    }

    /// Override the local server address.
    #[must_use]
    pub fn with_ollama_host(mut self, host: impl Into<String>) -> Self {
        self.ollama_host = host.into();
        self
    }
}

/// Resolve the local server address from an optional explicit flag, the
/// `OLLAMA_HOST` environment variable, or the hardcoded default.
#[must_use]
pub fn resolve_ollama_host(flag: Option<&str>) -> String {
    resolve_from(flag, std::env::var(OLLAMA_HOST_ENV).ok())
}

fn resolve_from(flag: Option<&str>, env: Option<String>) -> String {
    if let Some(host) = flag {
        if !host.is_empty() {
            return host.to_string();
        }
    }
    match env {
        Some(host) if !host.is_empty() => host,
        _ => DEFAULT_OLLAMA_HOST.to_string(),
    }
}
