use std::fmt::Write as _;
use std::path::Path;
use std::process;

use critree_core::{Catalog, CriteriaNode};
use critree_logic::deserialize;

use crate::{load_catalog, read_expression, report_error, OutputFormat};

/// Render an expression as an indented criteria tree with catalog
/// display names. In json mode, print the tree's tagged document form.
pub(crate) fn cmd_show(
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

    match output {
        OutputFormat::Text => {
            let mut rendered = String::new();
            render(&tree, &catalog, 0, &mut rendered);
            print!("{}", rendered);
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&tree) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                report_error(&format!("internal error: {}", e), output, quiet);
                process::exit(1);
            }
        },
    }
}

fn render(node: &CriteriaNode, catalog: &Catalog, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        CriteriaNode::Criteria(c) if c.is_unassigned() => {
            let _ = writeln!(out, "{}(unassigned)", indent);
        }
        CriteriaNode::Criteria(c) => {
            let _ = writeln!(out, "{}{} = {}", indent, catalog.name_of(&c.item_id), c.value);
        }
        CriteriaNode::Group(g) => {
            let _ = writeln!(out, "{}{}", indent, g.operator.key().to_uppercase());
            for child in &g.conditions {
                render(child, catalog, depth + 1, out);
            }
        }
    }
}
