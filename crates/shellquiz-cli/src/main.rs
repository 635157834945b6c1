//! shellquiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::turn::TurnAction;
use commands::Overrides;

#[derive(Parser)]
#[command(name = "shellquiz", version, about = "Adaptive Linux command trainer")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Question catalog (.json or .toml)
    #[arg(long, global = true)]
    questions: Option<PathBuf>,

    /// Ledger file with per-category accuracy
    #[arg(long, global = true)]
    stats: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive quiz in the terminal
    Play {
        /// Category to start with
        #[arg(long)]
        category: Option<String>,

        /// Difficulty to start with
        #[arg(long)]
        difficulty: Option<String>,
    },

    /// Perform one quiz step against a saved session and print JSON
    Turn {
        /// Session state file (created if missing)
        #[arg(long)]
        state: PathBuf,

        /// What to do
        #[arg(long, value_enum, default_value = "show")]
        action: TurnAction,

        /// Category filter to store in the session
        #[arg(long)]
        category: Option<String>,

        /// Difficulty filter to store in the session
        #[arg(long)]
        difficulty: Option<String>,

        /// Answer text for the check action
        #[arg(long, required_if_eq("action", "check"))]
        answer: Option<String>,
    },

    /// Show accumulated accuracy per category and difficulty
    Stats {
        /// Print the raw ledger as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories and difficulties in the catalog
    Categories,

    /// Validate the question catalog
    Validate,

    /// Create a starter config and question catalog
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shellquiz=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let overrides = Overrides {
        config: cli.config,
        questions: cli.questions,
        stats: cli.stats,
    };

    let result = match cli.command {
        Commands::Play {
            category,
            difficulty,
        } => commands::play::execute(&overrides, category, difficulty),
        Commands::Turn {
            state,
            action,
            category,
            difficulty,
            answer,
        } => commands::turn::execute(&overrides, state, action, category, difficulty, answer),
        Commands::Stats { json } => commands::stats::execute(&overrides, json),
        Commands::Categories => commands::categories::execute(&overrides),
        Commands::Validate => commands::validate::execute(&overrides),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
