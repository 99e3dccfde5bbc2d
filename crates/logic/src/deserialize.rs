//! Portable expression → criteria tree.
//!
//! The grammar has four cases: bare string, `and`, `or`, and `==`.
//! Dispatch is one decision point per case over the expression's sole
//! object key; anything else is a [`MalformedExpression`].

use critree_core::{Criteria, CriteriaGroup, CriteriaNode, GroupOperator};
use serde_json::Value;

/// Why an expression failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedExpression {
    /// The expression is neither a string nor an object.
    #[error("expression must be a predicate id string or an operator object")]
    NotAnExpression,

    /// An operator object must carry exactly one key.
    #[error("operator object must have exactly one key, found {count}")]
    KeyCount { count: usize },

    /// The sole key is not `and`, `or`, or `==`.
    #[error("unrecognized operator: '{key}'")]
    UnknownOperator { key: String },

    /// `and`/`or` take an array of sub-expressions.
    #[error("'{key}' expects an array of sub-expressions")]
    OperandNotAnArray { key: String },

    /// `==` takes exactly a two-element `[left, right]` pair.
    #[error("'==' expects a two-element [left, right] pair")]
    BadArity,

    /// The left side of `==` must be a `{"var": id}` reference.
    #[error("left side of '==' must be a {{\"var\": ...}} reference")]
    MissingVar,
}

/// Parse a portable expression into a criteria tree.
///
/// A bare string `s` is shorthand for `{"==": [{"var": s}, true]}`.
/// The right side of `==` is coerced: anything other than boolean
/// `true` — including `false`, numbers, strings — yields `value =
/// false` rather than an error.
pub fn deserialize(expr: &Value) -> Result<CriteriaNode, MalformedExpression> {
    if let Some(id) = expr.as_str() {
        return Ok(Criteria::new(id, true).into());
    }

    let obj = expr.as_object().ok_or(MalformedExpression::NotAnExpression)?;
    if obj.len() != 1 {
        return Err(MalformedExpression::KeyCount { count: obj.len() });
    }
    // len() == 1 guarantees the iterator yields.
    let (key, operand) = match obj.iter().next() {
        Some(entry) => entry,
        None => return Err(MalformedExpression::KeyCount { count: 0 }),
    };

    match GroupOperator::from_key(key) {
        Some(operator) => parse_group(operator, operand),
        None if key == "==" => parse_equality(operand),
        None => Err(MalformedExpression::UnknownOperator { key: key.clone() }),
    }
}

fn parse_group(
    operator: GroupOperator,
    operand: &Value,
) -> Result<CriteriaNode, MalformedExpression> {
    let elements = operand
        .as_array()
        .ok_or_else(|| MalformedExpression::OperandNotAnArray {
            key: operator.key().to_string(),
        })?;

    let conditions = elements
        .iter()
        .map(deserialize)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CriteriaGroup::new(operator, conditions).into())
}

fn parse_equality(operand: &Value) -> Result<CriteriaNode, MalformedExpression> {
    let pair = operand.as_array().ok_or(MalformedExpression::BadArity)?;
    let [left, right] = pair.as_slice() else {
        return Err(MalformedExpression::BadArity);
    };

    let item_id = left
        .as_object()
        .and_then(|l| l.get("var"))
        .and_then(Value::as_str)
        .ok_or(MalformedExpression::MissingVar)?;

    // Deliberate leniency: only boolean true means true.
    let value = *right == Value::Bool(true);

    Ok(Criteria::new(item_id, value).into())
}
