//! FinAssist CLI - Conversational finance demo
//!
//! Usage:
//!   finassist summary             Print the budget summary
//!   finassist insights            Print spending insights
//!   finassist ask "question"      Route one free-text question
//!   finassist chat                Interactive session
//!   finassist model               Check the sentiment model

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let profile = commands::resolve_profile(&cli.demographic, &cli.age)?;

    match cli.command {
        Commands::Summary { json } => commands::cmd_summary(&profile, json),
        Commands::Insights => commands::cmd_insights(&profile),
        Commands::Ask { question } => commands::cmd_ask(&question),
        Commands::Transactions { json } => commands::cmd_transactions(json),
        Commands::Chat => commands::cmd_chat(profile).await,
        Commands::Model => commands::cmd_model().await,
    }
}
