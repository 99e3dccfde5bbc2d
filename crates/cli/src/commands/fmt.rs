use std::path::Path;
use std::process;

use critree_core::CriteriaNode;
use critree_logic::{deserialize, serialize};

use crate::{read_expression, report_error, OutputFormat};

/// Parse an expression and reprint it canonically: bare-string
/// shorthand becomes explicit equality, unfinished leaves never appear
/// (the parser cannot produce them).
pub(crate) fn cmd_fmt(file: &Path, or_default: bool, output: OutputFormat, quiet: bool) {
    let expr = read_expression(file, output, quiet);

    let tree = match deserialize(&expr) {
        Ok(t) => t,
        Err(e) if or_default => {
            // The editor-layer recovery policy: fall back to the seed tree.
            if !quiet && output == OutputFormat::Text {
                eprintln!("warning: malformed expression, using default: {}", e);
            }
            CriteriaNode::seed()
        }
        Err(e) => {
            let msg = format!("malformed expression in '{}': {}", file.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let canonical = serialize(&tree);
    match serde_json::to_string_pretty(&canonical) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            report_error(&format!("internal error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}
