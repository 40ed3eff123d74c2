//! joyas CLI - jewelry inventory catalog API
//!
//! - `serve`: run the HTTP API against Postgres
//! - `explain`: show the SQL and bound values built for a set of query parameters

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "joyas",
    author,
    version,
    about = "Paginated, filterable HTTP catalog for a jewelry inventory"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Print the SQL built for listing or filter parameters
    Explain(commands::explain::ExplainArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_path = config::load_dotenv();
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&TracingConfig { debug: cli.debug }) {
        eprintln!("warning: logging disabled: {e:#}");
    }
    match dotenv_path {
        Some(path) => tracing::debug!("Loaded .env from {}", path.display()),
        None => tracing::debug!("No .env file found, using environment only"),
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Explain(args) => commands::run_explain(args),
    }
}
