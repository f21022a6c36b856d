//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

/// FinAssist - Conversational personal finance demo
#[derive(Parser)]
#[command(name = "finassist")]
#[command(about = "Rule-based personal finance assistant demo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// User demographic: student, professional, retiree
    #[arg(long, default_value = "student", global = true)]
    pub demographic: String,

    /// User age (display only)
    #[arg(long, default_value = "20", global = true)]
    pub age: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the budget summary for the demo transactions
    Summary {
        /// Output the raw report as JSON instead of the assistant message
        #[arg(long)]
        json: bool,
    },

    /// Print spending insights for the demo transactions
    Insights,

    /// Ask a single free-text question and print the reply
    Ask {
        /// Question text
        question: String,
    },

    /// List the demo transactions
    Transactions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive chat session
    Chat,

    /// Check availability of the sentiment model
    Model,
}
