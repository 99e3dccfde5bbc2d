//! Criteria tree → portable expression.

use critree_core::CriteriaNode;
use serde_json::{json, Map, Value};

/// Serialize a criteria tree to its portable expression.
///
/// Total: never fails. Leaves always emit the explicit equality form
/// `{"==": [{"var": id}, value]}` — the bare-string shorthand is an
/// accepted input only. Group children with an unassigned leaf
/// (`item_id == ""`) are dropped; empty subgroups are emitted verbatim
/// as `{"and": []}` / `{"or": []}`, matching the editor's observed
/// behavior (emptiness is the validator's concern, not ours).
pub fn serialize(node: &CriteriaNode) -> Value {
    match node {
        CriteriaNode::Criteria(c) => json!({"==": [{"var": c.item_id}, c.value]}),
        CriteriaNode::Group(g) => {
            let conditions: Vec<Value> = g
                .conditions
                .iter()
                .filter(|child| match child {
                    CriteriaNode::Criteria(c) => !c.is_unassigned(),
                    CriteriaNode::Group(_) => true,
                })
                .map(serialize)
                .collect();

            let mut expr = Map::with_capacity(1);
            expr.insert(g.operator.key().to_string(), Value::Array(conditions));
            Value::Object(expr)
        }
    }
}
