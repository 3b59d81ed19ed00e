//! CLI entry point.
//!
//! Parses arguments and dispatches to handlers. Only a primary-registry
//! failure reaches this level; it prints to stderr and exits non-zero.

use clap::Parser;

use llmls_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables (OLLAMA_HOST may live in a .env file)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Providers { filter }) => {
            handlers::providers::execute(filter.as_deref()).await?;
        }
        None => {
            handlers::list::execute(cli.list).await?;
        }
    }

    Ok(())
}
