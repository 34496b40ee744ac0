//! Monkey CLI - REPL and inspection tools for the Monkey programming language.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod diagnostics;

/// Monkey - a small programming language front end
#[derive(Parser)]
#[command(name = "monkey")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive REPL (default)
    Repl,

    /// Parse a Monkey file and show the reconstructed AST
    Parse {
        /// Input file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check Monkey files for parse errors
    Check {
        /// Input file(s)
        files: Vec<PathBuf>,
    },

    /// Tokenize a Monkey file and show tokens
    Lex {
        /// Input file
        file: PathBuf,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging; RUST_LOG takes precedence over --verbose
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl::run(),
        Commands::Parse { file, json } => commands::parse::run(&file, json),
        Commands::Check { files } => commands::check::run(&files),
        Commands::Lex { file } => commands::lex::run(&file),
    }
}
