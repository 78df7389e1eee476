mod cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gh-pin-actions",
    about = "Pin GitHub Actions references to immutable commit SHAs",
    version,
    propagate_version = true
)]
struct Cli {
    /// Debug-level diagnostics
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one action and print the pinnable `owner/repo@sha #version` line
    Pin {
        /// Repository in the owner/repo format
        #[arg(long, short = 'R')]
        repository: String,

        /// Version of the tag to pin to (ex. 3; 3.1; 3.1.1)
        #[arg(long, short = 'v', default_value = "latest")]
        pin_version: String,

        /// Branch name to pin to instead of a version
        #[arg(long, short = 'b')]
        branch: Option<String>,
    },

    /// Rewrite every workflow file with actions pinned to a specific sha
    Workflows {
        /// Directory containing workflow definitions
        #[arg(long, env = "PIN_ACTIONS_DIR", default_value = ".github/workflows")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        // Diagnostics on stderr; stdout carries only the pinned-reference lines.
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Pin {
            repository,
            pin_version,
            branch,
        } => cmd::pin::run(&repository, &pin_version, branch.as_deref()),
        Commands::Workflows { dir } => cmd::workflows::run(&dir),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
