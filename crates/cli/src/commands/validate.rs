use std::path::Path;
use std::process;

use critree_core::is_valid;
use critree_logic::deserialize;

use crate::{load_catalog, read_expression, report_error, OutputFormat};

/// Deserialize an expression and run the well-formedness gate against
/// the catalog. Exit 0 when valid, 1 when invalid or malformed.
pub(crate) fn cmd_validate(
    file: &Path,
    catalog_path: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) {
    let expr = read_expression(file, output, quiet);

    let tree = match deserialize(&expr) {
        Ok(t) => t,
        Err(e) => {
            let msg = format!("malformed expression in '{}': {}", file.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let catalog = load_catalog(catalog_path, output, quiet);
    let valid = is_valid(&tree, &catalog);

    if !quiet {
        match output {
            OutputFormat::Text => {
                if valid {
                    println!("valid");
                } else {
                    println!("invalid");
                }
            }
            OutputFormat::Json => {
                println!("{{\"valid\": {}}}", valid);
            }
        }
    }

    if !valid {
        process::exit(1);
    }
}
