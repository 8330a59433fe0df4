mod commands;
mod error;
mod render;

use arbor_tree::BuildOptions;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::ExportFormat;
use crate::error::CliResult;

#[derive(Parser)]
#[command(name = "arbor-cli")]
#[command(about = "Arbor CLI - rebuild trees from flat parent/child records", long_about = None)]
struct Cli {
    /// Sort child lists on one thread regardless of input size
    #[arg(long, global = true)]
    sequential: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a record file describes exactly one well-formed tree
    Validate {
        /// Path to the record file (.yaml, .yml or .json)
        records_path: PathBuf,
    },
    /// Print the tree as an indented outline
    Show {
        /// Path to the record file (.yaml, .yml or .json)
        records_path: PathBuf,
        /// Only print nodes up to this depth (root = 0)
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Export the built tree
    Export {
        /// Path to the record file (.yaml, .yml or .json)
        records_path: PathBuf,
        /// What to write
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = if cli.sequential {
        BuildOptions::sequential()
    } else {
        BuildOptions::default()
    };

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Validate { records_path } => {
            commands::validate(&records_path, &options, &mut stdout)
        }
        Commands::Show {
            records_path,
            max_depth,
        } => commands::show(&records_path, max_depth, &options, &mut stdout),
        Commands::Export {
            records_path,
            format,
            output,
        } => commands::export(
            &records_path,
            format,
            output.as_deref(),
            &options,
            &mut stdout,
        ),
    }
}
