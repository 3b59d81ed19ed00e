//! OpenRouter model registry client (primary source).
//!
//! A single GET of the registry's `models` listing, parsed into raw
//! DTOs and normalized into unified records. Failures here are fatal to
//! the invocation and propagate to the caller; there is no retry.

use llmls_core::{ModelPricing, ModelRecord};
use serde::Deserialize;
use url::Url;

use crate::config::SourcesConfig;
use crate::error::SourceResult;
use crate::http::{HttpBackend, ReqwestBackend};

// ============================================================================
// Wire format
// ============================================================================

/// Top-level registry response: `{"data": [...]}`.
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    data: Vec<RegistryModel>,
}

/// One raw registry record. Metadata fields default so sparse records
/// never fail the parse.
#[derive(Debug, Deserialize)]
struct RegistryModel {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    created: i64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    context_length: Option<u64>,
    #[serde(default)]
    architecture: Architecture,
    #[serde(default)]
    pricing: Pricing,
    #[serde(default)]
    top_provider: TopProvider,
}

#[derive(Debug, Default, Deserialize)]
struct Architecture {
    #[serde(default)]
    modality: String,
}

#[derive(Debug, Default, Deserialize)]
struct Pricing {
    #[serde(default)]
    prompt: String,
    #[serde(default)]
    completion: String,
}

#[derive(Debug, Default, Deserialize)]
struct TopProvider {
    #[serde(default)]
    max_completion_tokens: Option<u64>,
    #[serde(default)]
    is_moderated: bool,
}

// ============================================================================
// Client
// ============================================================================

/// Client for the OpenRouter-compatible model registry.
pub struct OpenRouterClient<B: HttpBackend = ReqwestBackend> {
    backend: B,
    registry_url: String,
}

impl OpenRouterClient<ReqwestBackend> {
    /// Create a client against the configured registry endpoint.
    ///
    /// No explicit request timeout: the fetch blocks until the
    /// transport's own limits apply.
    #[must_use]
    pub fn new(config: &SourcesConfig) -> Self {
        Self::with_backend(ReqwestBackend::new(), &config.registry_url)
    }
}

impl<B: HttpBackend> OpenRouterClient<B> {
    /// Create a client over an arbitrary backend (used by tests).
    pub fn with_backend(backend: B, registry_url: &str) -> Self {
        Self {
            backend,
            registry_url: registry_url.to_string(),
        }
    }

    /// Fetch the registry catalog as unified records.
    pub async fn fetch(&self) -> SourceResult<Vec<ModelRecord>> {
        let url = Url::parse(&self.registry_url)?;
        let response: ModelsResponse = self.backend.get_json(&url).await?;
        Ok(response.data.into_iter().map(normalize).collect())
    }
}

/// Map a raw registry record into the unified shape.
fn normalize(raw: RegistryModel) -> ModelRecord {
    let pricing = if raw.pricing.prompt.is_empty() && raw.pricing.completion.is_empty() {
        None
    } else {
        Some(ModelPricing {
            prompt: raw.pricing.prompt,
            completion: raw.pricing.completion,
        })
    };

    let mut record = ModelRecord::new(raw.id, raw.name, raw.created, raw.description);
    record.context_length = raw.context_length.filter(|&len| len > 0);
    record.max_completion_tokens = raw.top_provider.max_completion_tokens.filter(|&n| n > 0);
    record.modality = Some(raw.architecture.modality).filter(|m| !m.is_empty());
    record.pricing = pricing;
    record.moderated = raw.top_provider.is_moderated;
    record
}
