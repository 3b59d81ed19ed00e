//! Subcommands and list-mode arguments.

use clap::{Args, Subcommand};

/// Available subcommands. Without one, the tool lists models.
#[derive(Subcommand)]
pub enum Commands {
    /// List all provider names, one per line
    Providers {
        /// Only show providers containing this substring (case-insensitive)
        filter: Option<String>,
    },
}

/// Arguments for the default list mode.
#[derive(Args)]
pub struct ListArgs {
    /// Search pattern: glob over model ID/name (`*`, `?`) or exact provider name
    #[arg(conflicts_with_all = ["provider", "model", "description"])]
    pub pattern: Option<String>,

    /// Display detailed model information
    #[arg(short, long)]
    pub detail: bool,

    /// Ollama server URL (default: $OLLAMA_HOST or http://localhost:11434)
    #[arg(long = "ollama-host")]
    pub ollama_host: Option<String>,

    /// Filter by provider tag (substring, case-insensitive)
    #[arg(long)]
    pub provider: Option<String>,

    /// Filter by model ID or name (substring, case-insensitive)
    #[arg(long)]
    pub model: Option<String>,

    /// Filter by description (substring, case-insensitive)
    #[arg(long)]
    pub description: Option<String>,
}
