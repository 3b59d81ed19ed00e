//! Local Ollama server client (secondary source).
//!
//! Fetches `{host}/api/tags` with a short timeout and converts the
//! result into unified records. This source is strictly best-effort:
//! any transport error, non-success status, timeout, or malformed
//! payload yields an empty catalog. The absence of an error channel in
//! the public signature makes that contract structural.

use chrono::{DateTime, Utc};
use llmls_core::{LocalDetails, ModelRecord};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::http::{HttpBackend, ReqwestBackend};

/// Timeout for the local-server fetch. Kept short so a missing server
/// does not stall the listing.
const LOCAL_FETCH_TIMEOUT: Duration = Duration::from_secs(3);

// ============================================================================
// Wire format
// ============================================================================

/// Top-level tags response: `{"models": [...]}`.
#[derive(Debug, Deserialize)]
struct TagsResponse {
    models: Vec<LocalModel>,
}

#[derive(Debug, Deserialize)]
struct LocalModel {
    name: String,
    modified_at: DateTime<Utc>,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    details: LocalModelDetails,
}

#[derive(Debug, Default, Deserialize)]
struct LocalModelDetails {
    #[serde(default)]
    format: String,
    #[serde(default)]
    family: String,
    #[serde(default)]
    parameter_size: String,
    #[serde(default)]
    quantization_level: String,
}

// ============================================================================
// Client
// ============================================================================

/// Client for a local Ollama server.
pub struct OllamaClient<B: HttpBackend = ReqwestBackend> {
    backend: B,
    host: String,
}

impl OllamaClient<ReqwestBackend> {
    /// Create a client for the given server address.
    #[must_use]
    pub fn new(host: &str) -> Self {
        Self::with_backend(ReqwestBackend::with_timeout(LOCAL_FETCH_TIMEOUT), host)
    }
}

impl<B: HttpBackend> OllamaClient<B> {
    /// Create a client over an arbitrary backend (used by tests).
    pub fn with_backend(backend: B, host: &str) -> Self {
        Self {
            backend,
            host: host.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the local catalog as unified records.
    ///
    /// Never fails: any anomaly yields an empty vec.
    pub async fn fetch(&self) -> Vec<ModelRecord> {
        let Ok(url) = Url::parse(&format!("{}/api/tags", self.host)) else {
            return Vec::new();
        };

        match self.backend.get_json::<TagsResponse>(&url).await {
            Ok(response) => response.models.into_iter().map(normalize).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Fetch the local server's catalog, silently tolerating its absence.
pub async fn fetch_local_models(host: &str) -> Vec<ModelRecord> {
    OllamaClient::new(host).fetch().await
}

/// Map a raw local model into the unified shape.
///
/// Local models get an `ollama/` ID prefix so they group under one
/// provider tag, and a synthesized description since the tags endpoint
/// has none.
fn normalize(raw: LocalModel) -> ModelRecord {
    let description = build_description(&raw);

    let mut record = ModelRecord::new(
        format!("ollama/{}", raw.name),
        raw.name,
        raw.modified_at.timestamp(),
        description,
    );
    record.local = Some(LocalDetails {
        size_bytes: raw.size,
        family: raw.details.family,
        parameter_size: raw.details.parameter_size,
        quantization: raw.details.quantization_level,
        format: raw.details.format,
    });
    record
}

/// Synthesize a one-line description from the details block, e.g.
/// `"llama 7B (Q4_K_M) - 3.8 GB"`. Falls back to a generic label when
/// every detail is empty.
fn build_description(raw: &LocalModel) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !raw.details.family.is_empty() {
        parts.push(raw.details.family.clone());
    }
    if !raw.details.parameter_size.is_empty() {
        parts.push(raw.details.parameter_size.clone());
    }
    if !raw.details.quantization_level.is_empty() {
        parts.push(format!("({})", raw.details.quantization_level));
    }

    let mut description = parts.join(" ");

    #[allow(clippy::cast_precision_loss)] // display only
    let size_gb = raw.size as f64 / (1024.0 * 1024.0 * 1024.0);
    if size_gb > 0.0 {
        if !description.is_empty() {
            description.push_str(" - ");
        }
        description.push_str(&format!("{size_gb:.1} GB"));
    }

    if description.is_empty() {
        description = "Ollama local model".to_string();
    }

    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    fn tags_json() -> serde_json::Value {
        json!({
            "models": [
                {
                    "name": "llama3:8b",
                    "modified_at": "2024-05-01T12:00:00Z",
                    "size": 4_661_224_676_u64,
                    "details": {
                        "format": "gguf",
                        "family": "llama",
                        "parameter_size": "8B",
                        "quantization_level": "Q4_0"
                    }
                },
                {
                    "name": "mystery",
                    "modified_at": "2024-01-15T08:30:00Z",
                    "size": 0
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_fetch_normalizes_local_records() {
        let backend = FakeBackend::new().with_response("/api/tags", tags_json());
        let client = OllamaClient::with_backend(backend, "http://localhost:11434");

        let records = client.fetch().await;
        assert_eq!(records.len(), 2);

        let llama = &records[0];
        assert_eq!(llama.id, "ollama/llama3:8b");
        assert_eq!(llama.name, "llama3:8b");
        assert_eq!(llama.provider(), "ollama");
        assert_eq!(llama.description, "llama 8B (Q4_0) - 4.3 GB");

        let local = llama.local.as_ref().unwrap();
        assert_eq!(local.size_bytes, 4_661_224_676);
        assert_eq!(local.family, "llama");
        assert_eq!(local.parameter_size, "8B");
        assert_eq!(local.quantization, "Q4_0");
        assert_eq!(local.format, "gguf");
    }

    #[tokio::test]
    async fn test_fetch_uses_fallback_description() {
        let backend = FakeBackend::new().with_response("/api/tags", tags_json());
        let client = OllamaClient::with_backend(backend, "http://localhost:11434");

        let records = client.fetch().await;
        assert_eq!(records[1].description, "Ollama local model");
    }

    #[tokio::test]
    async fn test_missing_server_yields_empty() {
        let backend = FakeBackend::new();
        let client = OllamaClient::with_backend(backend, "http://localhost:11434");
        assert!(client.fetch().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_payload_yields_empty() {
        let backend = FakeBackend::new().with_response("/api/tags", json!({"models": 42}));
        let client = OllamaClient::with_backend(backend, "http://localhost:11434");
        assert!(client.fetch().await.is_empty());
    }

    #[tokio::test]
    async fn test_trailing_slash_host_is_normalized() {
        let backend = FakeBackend::new().with_response(
            "http://localhost:11434/api/tags",
            json!({"models": []}),
        );
        let client = OllamaClient::with_backend(backend, "http://localhost:11434/");
        assert!(client.fetch().await.is_empty());
    }

    #[test]
    fn test_modified_at_becomes_epoch_seconds() {
        let raw: LocalModel = serde_json::from_value(json!({
            "name": "llama3:8b",
            "modified_at": "1970-01-01T00:01:40Z",
            "size": 1
        }))
        .unwrap();
        let record = normalize(raw);
        assert_eq!(record.created, 100);
    }
}
