use crate::config::TOKEN_ENV_VAR;
use crate::errors::{AppError, AppResult};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// PIX Charge Monitor
#[derive(Parser)]
#[command(name = "pix-monitor")]
#[command(about = "Fetch and aggregate PIX charge summaries, transactions and histories")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file (default: ./pix-monitor.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Payment API base URL (overrides configuration)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token (overrides configuration and PIX_API_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Daily charge summary per bank over a date window
    Summary(commands::summary::SummaryCommand),
    /// Charges of one bank over a date window
    Transactions(commands::transactions::TransactionsCommand),
    /// Details of a single charge
    Detail(commands::detail::DetailCommand),
    /// Activity history of a single charge
    History(commands::history::HistoryCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Summary(command) => command.run(&cli.global).await,
        Commands::Transactions(command) => command.run(&cli.global).await,
        Commands::Detail(command) => command.run(&cli.global).await,
        Commands::History(command) => command.run(&cli.global).await,
    };

    if let Err(AppError::Fetch(e)) = &result {
        if e.is_unauthenticated() {
            eprintln!(
                "Sign in first: set {} or pass --token with a valid bearer token",
                TOKEN_ENV_VAR
            );
        }
    }
    result
}
