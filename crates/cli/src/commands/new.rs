use std::process;

use critree_core::CriteriaNode;
use critree_logic::serialize;

use crate::{report_error, OutputFormat};

/// Print the serialized seed tree — the expression a fresh session
/// starts from.
pub(crate) fn cmd_new(output: OutputFormat, quiet: bool) {
    let expr = serialize(&CriteriaNode::seed());
    match serde_json::to_string_pretty(&expr) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            report_error(&format!("internal error: {}", e), output, quiet);
            process::exit(1);
        }
    }
}
