//! Providers command handler.
//!
//! Prints the sorted, deduplicated set of provider tags derived from
//! the registry catalog, one per line.

use anyhow::{Context, Result};
use llmls_core::provider_tags;
use llmls_sources::{OpenRouterClient, SourcesConfig};
use tracing::debug;

/// Execute the providers command.
///
/// # Errors
///
/// Fails when the registry fetch fails.
pub async fn execute(filter: Option<&str>) -> Result<()> {
    let config = SourcesConfig::new();
    let registry = OpenRouterClient::new(&config);
    let models = registry
        .fetch()
        .await
        .context("failed to fetch model registry")?;
    debug!(count = models.len(), "fetched registry catalog");

    let tags = provider_tags(&models);
    let needle = filter.map(str::to_lowercase);

    for tag in tags {
        match &needle {
            Some(needle) if !tag.to_lowercase().contains(needle) => {}
            _ => println!("{tag}"),
        }
    }

    Ok(())
}
