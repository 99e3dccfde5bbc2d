use std::path::Path;
use std::process;

use crate::{load_catalog, report_error, OutputFormat};

/// List the predicate catalog in provider order.
pub(crate) fn cmd_catalog(catalog_path: Option<&Path>, output: OutputFormat, quiet: bool) {
    let catalog = load_catalog(catalog_path, output, quiet);

    if quiet {
        return;
    }

    match output {
        OutputFormat::Text => {
            for item in catalog.items() {
                println!("{}\t{}", item.id, item.name);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&catalog) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                report_error(&format!("internal error: {}", e), output, quiet);
                process::exit(1);
            }
        },
    }
}
