mod commands;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use critree_core::Catalog;

use commands::catalog::cmd_catalog;
use commands::fmt::cmd_fmt;
use commands::new::cmd_new;
use commands::show::cmd_show;
use commands::snapshot::{cmd_snapshot, SnapshotCommands};
use commands::validate::cmd_validate;

/// The built-in predicate catalog, used when `--catalog` is not given.
static DEFAULT_CATALOG_STR: &str = include_str!("catalog.json");

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Criteria tree toolchain.
#[derive(Parser)]
#[command(name = "critree", version, about = "Criteria tree toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reprint a portable expression in canonical form
    Fmt {
        /// Path to the expression JSON file
        file: PathBuf,
        /// On malformed input, emit the default empty-AND tree instead of failing
        #[arg(long)]
        or_default: bool,
    },

    /// Check an expression against the predicate catalog
    Validate {
        /// Path to the expression JSON file
        file: PathBuf,
        /// Path to a catalog JSON file (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Render an expression as an indented criteria tree
    Show {
        /// Path to the expression JSON file
        file: PathBuf,
        /// Path to a catalog JSON file (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List the predicate catalog
    Catalog {
        /// Path to a catalog JSON file (defaults to the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the default seed expression
    New,

    /// Manage saved expression snapshots
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt { file, or_default } => {
            cmd_fmt(&file, or_default, cli.output, cli.quiet);
        }
        Commands::Validate { file, catalog } => {
            cmd_validate(&file, catalog.as_deref(), cli.output, cli.quiet);
        }
        Commands::Show { file, catalog } => {
            cmd_show(&file, catalog.as_deref(), cli.output, cli.quiet);
        }
        Commands::Catalog { catalog } => {
            cmd_catalog(catalog.as_deref(), cli.output, cli.quiet);
        }
        Commands::New => {
            cmd_new(cli.output, cli.quiet);
        }
        Commands::Snapshot { command } => {
            cmd_snapshot(command, cli.output, cli.quiet);
        }
    }
}

// ── Shared helpers ──────────────────────────────────────────────────

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\""));
        }
    }
}

/// Read and parse an expression JSON file, exiting on failure.
pub(crate) fn read_expression(path: &Path, output: OutputFormat, quiet: bool) -> serde_json::Value {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("error parsing JSON in '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

/// Load the catalog from `--catalog`, or fall back to the built-in one.
pub(crate) fn load_catalog(path: Option<&Path>, output: OutputFormat, quiet: bool) -> Catalog {
    let text = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(s) => s,
            Err(e) => {
                let msg = format!("error reading catalog '{}': {}", p.display(), e);
                report_error(&msg, output, quiet);
                process::exit(1);
            }
        },
        None => DEFAULT_CATALOG_STR.to_string(),
    };

    match serde_json::from_str(&text) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!("error parsing catalog: {}", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}
