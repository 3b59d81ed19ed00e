//! Unified model record types.
//!
//! Records from both catalog sources are normalized into `ModelRecord`,
//! independent of any source-specific wire format.

use serde::{Deserialize, Serialize};

/// Provider tag used when a model ID carries no `provider/` prefix.
pub const UNKNOWN_PROVIDER: &str = "Unknown";

/// A model from either catalog source, in unified form.
///
/// Constructed once per invocation by the source clients and immutable
/// afterwards; filtering drops records and sorting reorders them, but the
/// fields themselves are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Model identifier, `"<provider>/<model>"` (provider may be absent).
    pub id: String,
    /// Human-readable display name; may differ from `id`.
    pub name: String,
    /// Creation (or local modification) time, epoch seconds.
    pub created: i64,
    /// Free-text description; may contain embedded line breaks.
    pub description: String,
    /// Maximum context length in tokens, when the registry reports one.
    pub context_length: Option<u64>,
    /// Maximum completion tokens, when the registry reports one.
    pub max_completion_tokens: Option<u64>,
    /// Modality string (e.g., `"text->text"`).
    pub modality: Option<String>,
    /// Per-token pricing, when the registry reports one.
    pub pricing: Option<ModelPricing>,
    /// Whether the top provider moderates this model.
    pub moderated: bool,
    /// Local-server details; `None` for registry records.
    ///
    /// Absent means "no extended section", which the renderer must
    /// distinguish from zero values.
    pub local: Option<LocalDetails>,
}

/// Raw per-token price strings as reported by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPricing {
    /// Price per prompt token (decimal string, e.g. `"0.000003"`).
    pub prompt: String,
    /// Price per completion token (decimal string).
    pub completion: String,
}

/// Extra fields present only for models served by the local server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalDetails {
    /// On-disk size in bytes.
    pub size_bytes: u64,
    /// Architecture family (e.g., `"llama"`).
    pub family: String,
    /// Parameter-count label (e.g., `"7B"`).
    pub parameter_size: String,
    /// Quantization label (e.g., `"Q4_K_M"`).
    pub quantization: String,
    /// On-disk format label (e.g., `"gguf"`).
    pub format: String,
}

impl ModelRecord {
    /// Create a record with only the universally present fields set.
    #[must_use]
    pub fn new(id: String, name: String, created: i64, description: String) -> Self {
        Self {
            id,
            name,
            created,
            description,
            context_length: None,
            max_completion_tokens: None,
            modality: None,
            pricing: None,
            moderated: false,
            local: None,
        }
    }

    /// Derive the provider tag from the model ID.
    ///
    /// The tag is the substring before the first `/`. IDs with no slash,
    /// or a slash at position 0, resolve to [`UNKNOWN_PROVIDER`]. Always
    /// recomputed, never stored.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self.id.find('/') {
            Some(idx) if idx > 0 => &self.id[..idx],
            _ => UNKNOWN_PROVIDER,
        }
    }
}
