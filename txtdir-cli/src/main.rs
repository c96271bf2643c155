// SPDX-License-Identifier: AGPL-3.0-or-later
//! txtdir CLI
//!
//! Resolves the text data directory and lists what it contains.

mod commands;

use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "txtdir")]
#[command(author, version, about = "txtdir - text data directory helper", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base directory the data path is resolved from
    #[arg(short, long, global = true)]
    base_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved data directory
    DataDir,

    /// List directory entry names
    #[command(alias = "dir")]
    Ls {
        /// Path to list (defaults to the data directory)
        path: Option<PathBuf>,

        /// Sort names instead of using directory read order
        #[arg(short, long)]
        sort: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let opts = commands::GlobalOpts {
        base_dir: cli.base_dir,
        config: cli.config,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::DataDir => commands::data_dir(&opts, &mut out),
        Commands::Ls { path, sort } => commands::ls(&opts, path.as_deref(), sort, &mut out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
