//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure. The default mode (no
//! subcommand) lists models; `providers` prints the provider tags.

use clap::Parser;

use crate::commands::{Commands, ListArgs};

/// Command-line interface definition for the model listing tool.
#[derive(Parser)]
#[command(name = "llmls")]
#[command(about = "List and search LLM models from OpenRouter and a local Ollama server")]
#[command(version)]
#[command(after_help = "\
EXAMPLES:
    llmls                          List all models (OpenRouter + Ollama)
    llmls cohere                   List all Cohere models (provider exact match)
    llmls \"anthropic/*\"            List Anthropic models (glob pattern)
    llmls \"*gpt-4*\"                Search for GPT-4 models
    llmls --detail \"*opus*\"        Detailed view of Opus models
    llmls --provider openai --description vision
    llmls providers                List all provider names")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub list: ListArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pattern_positional() {
        let cli = Cli::parse_from(["llmls", "anthropic/*"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.list.pattern.as_deref(), Some("anthropic/*"));
    }

    #[test]
    fn test_list_flags() {
        let cli = Cli::parse_from([
            "llmls",
            "--detail",
            "--ollama-host",
            "http://remote:11434",
            "*opus*",
        ]);
        assert!(cli.list.detail);
        assert_eq!(
            cli.list.ollama_host.as_deref(),
            Some("http://remote:11434")
        );
        assert_eq!(cli.list.pattern.as_deref(), Some("*opus*"));
    }

    #[test]
    fn test_field_filters_conflict_with_pattern() {
        let result = Cli::try_parse_from(["llmls", "--provider", "openai", "some-pattern"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_field_filters_alone() {
        let cli = Cli::parse_from(["llmls", "--provider", "openai", "--model", "gpt"]);
        assert_eq!(cli.list.provider.as_deref(), Some("openai"));
        assert_eq!(cli.list.model.as_deref(), Some("gpt"));
        assert!(cli.list.description.is_none());
    }

    #[test]
    fn test_providers_subcommand() {
        let cli = Cli::parse_from(["llmls", "providers", "open"]);
        match cli.command {
            Some(Commands::Providers { filter }) => {
                assert_eq!(filter.as_deref(), Some("open"));
            }
            _ => panic!("expected providers subcommand"),
        }
    }
}
