#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod error;
pub mod http;
mod ollama;
mod openrouter;

// ============================================================================
// Public API
// ============================================================================

pub use config::{DEFAULT_OLLAMA_HOST, OLLAMA_HOST_ENV, SourcesConfig, resolve_ollama_host};
pub use error::{SourceError, SourceResult};
pub use http::{HttpBackend, ReqwestBackend};
pub use ollama::{OllamaClient, fetch_local_models};
pub use openrouter::OpenRouterClient;
