//! List command handler (the default mode).
//!
//! Fetches both catalog sources, merges, filters, sorts by recency,
//! and renders either the compact table or verbose blocks.

use anyhow::{Context, Result};
use llmls_core::{FieldFilters, filter_by_fields, merge, sort_by_created_desc, unified_search};
use llmls_sources::{OpenRouterClient, SourcesConfig, fetch_local_models, resolve_ollama_host};
use tracing::debug;

use crate::commands::ListArgs;
use crate::presentation::{print_compact, print_detailed};

/// Execute the list command.
///
/// # Errors
///
/// Fails only when the primary registry fetch fails; a missing or
/// broken local server contributes zero records instead.
pub async fn execute(args: ListArgs) -> Result<()> {
    let config = SourcesConfig::new();
    let registry = OpenRouterClient::new(&config);
    let primary = registry
        .fetch()
        .await
        .context("failed to fetch model registry")?;
    debug!(count = primary.len(), "fetched registry catalog");

    let host = resolve_ollama_host(args.ollama_host.as_deref());
    let secondary = fetch_local_models(&host).await;
    debug!(count = secondary.len(), host = %host, "fetched local catalog");

    let merged = merge(primary, secondary);

    let mut models = match &args.pattern {
        Some(pattern) => unified_search(merged, pattern),
        None => {
            let filters = FieldFilters {
                provider: args.provider.clone(),
                model: args.model.clone(),
                description: args.description.clone(),
            };
            filter_by_fields(merged, &filters)
        }
    };

    sort_by_created_desc(&mut models);

    if args.detail {
        print_detailed(&models);
    } else {
        print_compact(&models);
    }

    Ok(())
}
