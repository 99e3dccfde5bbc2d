use std::path::{Path, PathBuf};
use std::process;

use clap::Subcommand;
use critree_logic::{deserialize, serialize};
use critree_storage::{JsonFileStore, LogicStore, StorageError};

use crate::{read_expression, report_error, OutputFormat};

#[derive(Subcommand)]
pub(crate) enum SnapshotCommands {
    /// Save an expression under a display name
    Save {
        /// Path to the expression JSON file
        file: PathBuf,
        /// Display name for the snapshot
        #[arg(long)]
        name: String,
        /// Path to the snapshot store file
        #[arg(long, default_value = "saved-logics.json")]
        store: PathBuf,
    },

    /// List saved snapshots
    List {
        /// Path to the snapshot store file
        #[arg(long, default_value = "saved-logics.json")]
        store: PathBuf,
    },

    /// Print a saved snapshot's expression
    Load {
        /// Snapshot id
        id: String,
        /// Path to the snapshot store file
        #[arg(long, default_value = "saved-logics.json")]
        store: PathBuf,
    },

    /// Delete a saved snapshot
    Delete {
        /// Snapshot id
        id: String,
        /// Path to the snapshot store file
        #[arg(long, default_value = "saved-logics.json")]
        store: PathBuf,
    },
}

pub(crate) fn cmd_snapshot(command: SnapshotCommands, output: OutputFormat, quiet: bool) {
    match command {
        SnapshotCommands::Save { file, name, store } => {
            cmd_save(&file, &name, &store, output, quiet)
        }
        SnapshotCommands::List { store } => cmd_list(&store, output, quiet),
        SnapshotCommands::Load { id, store } => cmd_load(&id, &store, output, quiet),
        SnapshotCommands::Delete { id, store } => cmd_delete(&id, &store, output, quiet),
    }
}

fn exit_storage(err: StorageError, output: OutputFormat, quiet: bool) -> ! {
    report_error(&err.to_string(), output, quiet);
    process::exit(1);
}

fn cmd_save(file: &Path, name: &str, store: &Path, output: OutputFormat, quiet: bool) {
    let expr = read_expression(file, output, quiet);

    // Only grammatical expressions are persisted; stored form is canonical.
    let tree = match deserialize(&expr) {
        Ok(t) => t,
        Err(e) => {
            let msg = format!("malformed expression in '{}': {}", file.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let mut backend = JsonFileStore::new(store);
    let saved = match backend.save(name, &serialize(&tree)) {
        Ok(record) => record,
        Err(e) => exit_storage(e, output, quiet),
    };

    if !quiet {
        match output {
            OutputFormat::Text => println!("saved '{}' as {}", saved.name, saved.id),
            OutputFormat::Json => println!(
                "{{\"id\": \"{}\", \"name\": \"{}\"}}",
                saved.id,
                saved.name.replace('"', "\\\"")
            ),
        }
    }
}

fn cmd_list(store: &Path, output: OutputFormat, quiet: bool) {
    let backend = JsonFileStore::new(store);
    let records = match backend.list() {
        Ok(r) => r,
        Err(e) => exit_storage(e, output, quiet),
    };

    if quiet {
        return;
    }

    match output {
        OutputFormat::Text => {
            for record in &records {
                println!("{}\t{}\t{}", record.id, record.saved_at, record.name);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&records) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                report_error(&format!("internal error: {}", e), output, quiet);
                process::exit(1);
            }
        },
    }
}

fn cmd_load(id: &str, store: &Path, output: OutputFormat, quiet: bool) {
    let backend = JsonFileStore::new(store);
    let record = match backend.load(id) {
        Ok(r) => r,
        Err(e) => exit_storage(e, output, quiet),
    };

    match serde_json::to_string_pretty(&record.logic) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            report_error(&format!("internal error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}

fn cmd_delete(id: &str, store: &Path, output: OutputFormat, quiet: bool) {
    let mut backend = JsonFileStore::new(store);
    if let Err(e) = backend.delete(id) {
        exit_storage(e, output, quiet);
    }

    if !quiet {
        match output {
            OutputFormat::Text => println!("deleted {}", id),
            OutputFormat::Json => println!("{{\"deleted\": \"{}\"}}", id),
        }
    }
}
