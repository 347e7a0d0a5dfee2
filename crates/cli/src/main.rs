use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "autonex-db")]
#[command(about = "Schema migration for Autonex email verification and password reset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add the verification and reset columns to `users` and verify the admin account
    Migrate {
        /// Print the per-statement report as JSON
        #[arg(long)]
        json: bool,
        /// Exit non-zero if any statement failed
        #[arg(long)]
        strict: bool,
    },
    /// Print the statements `migrate` would run, without connecting
    Plan,
}

/// `RUST_LOG` directives when they parse, `info` otherwise.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate { json, strict } => commands::migrate::run(json, strict).await?,
        Commands::Plan => commands::plan::run()?,
    }

    Ok(())
}
