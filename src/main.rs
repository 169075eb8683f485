// Medgate - Medical triage gatekeeper proxy
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use medgate::agent::AzureAgent;
use medgate::cli::repl;
use medgate::config::{load_config, Config};
use medgate::prompts::{CLASSIFIER_SYSTEM_MESSAGE, SPECIALIST_SYSTEM_MESSAGE};
use medgate::triage::TriageRouter;

#[derive(Parser, Debug)]
#[command(name = "medgate")]
#[command(about = "Medical triage gatekeeper proxy", version)]
struct Args {
    /// Run mode
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Execute a single query
    Query {
        /// Query text
        query: String,
    },
}

/// Build the router with both agents from one config.
fn build_router(config: &Config) -> Result<TriageRouter> {
    let classifier = AzureAgent::new(
        "classifier",
        &config.endpoint,
        &config.api_key,
        &config.api_version,
        &config.classifier_deployment,
        CLASSIFIER_SYSTEM_MESSAGE,
    )?;
    let specialist = AzureAgent::new(
        "specialist",
        &config.endpoint,
        &config.api_key,
        &config.api_version,
        &config.specialist_deployment,
        SPECIALIST_SYSTEM_MESSAGE,
    )?;

    Ok(TriageRouter::new(Arc::new(classifier), Arc::new(specialist)))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("medgate=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config()?;
    let router = build_router(&config)?;

    match args.command {
        Some(Command::Query { query }) => {
            let reply = router.route(&query, &CancellationToken::new()).await?;
            println!("{}", reply);
            Ok(())
        }
        None => repl::run(&router).await,
    }
}
