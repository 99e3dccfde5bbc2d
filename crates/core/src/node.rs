//! Criteria tree node types.
//!
//! The tree is an internally tagged sum type: a `"criteria"` leaf tests
//! one catalog predicate against a boolean, a `"group"` node combines an
//! ordered sequence of children under AND or OR. The serde shape matches
//! the editor-state documents the presentation layer stores, so a tree
//! can be persisted and reloaded without a separate schema.

use serde::{Deserialize, Serialize};

/// Boolean connective of a [`CriteriaGroup`]. Commutative; child order
/// is significant only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOperator {
    And,
    Or,
}

impl GroupOperator {
    /// The operator's key in the portable expression format.
    pub fn key(self) -> &'static str {
        match self {
            GroupOperator::And => "and",
            GroupOperator::Or => "or",
        }
    }

    pub fn from_key(key: &str) -> Option<GroupOperator> {
        match key {
            "and" => Some(GroupOperator::And),
            "or" => Some(GroupOperator::Or),
            _ => None,
        }
    }
}

/// A leaf predicate test: "catalog predicate `item_id` evaluates to
/// `value`".
///
/// `item_id` may be empty while the editor has added a row the user has
/// not yet assigned a predicate to. Such leaves are legal editor state
/// but are elided from serialized output and rejected by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub value: bool,
}

impl Criteria {
    pub fn new(item_id: impl Into<String>, value: bool) -> Criteria {
        Criteria {
            item_id: item_id.into(),
            value,
        }
    }

    /// The transient leaf the editor appends before the user picks a
    /// predicate: no item, value defaulted to true.
    pub fn unassigned() -> Criteria {
        Criteria::new("", true)
    }

    pub fn is_unassigned(&self) -> bool {
        self.item_id.is_empty()
    }
}

/// An AND/OR group over an ordered sequence of child nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaGroup {
    pub operator: GroupOperator,
    pub conditions: Vec<CriteriaNode>,
}

impl CriteriaGroup {
    pub fn new(operator: GroupOperator, conditions: Vec<CriteriaNode>) -> CriteriaGroup {
        CriteriaGroup {
            operator,
            conditions,
        }
    }

    /// An empty AND group — the shape of a freshly added subgroup.
    pub fn empty() -> CriteriaGroup {
        CriteriaGroup::new(GroupOperator::And, Vec::new())
    }
}

/// A node in the criteria tree. Each node is owned exclusively by its
/// parent; edits rebuild the spine rather than mutating in place (see
/// the `edit` module).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CriteriaNode {
    Criteria(Criteria),
    Group(CriteriaGroup),
}

impl CriteriaNode {
    /// The default tree a session starts from (and the fallback the
    /// presentation layer substitutes when an import fails): an empty
    /// AND group.
    pub fn seed() -> CriteriaNode {
        CriteriaNode::Group(CriteriaGroup::empty())
    }

    pub fn as_group(&self) -> Option<&CriteriaGroup> {
        match self {
            CriteriaNode::Group(g) => Some(g),
            CriteriaNode::Criteria(_) => None,
        }
    }

    pub fn as_criteria(&self) -> Option<&Criteria> {
        match self {
            CriteriaNode::Criteria(c) => Some(c),
            CriteriaNode::Group(_) => None,
        }
    }
}

impl From<Criteria> for CriteriaNode {
    fn from(c: Criteria) -> CriteriaNode {
        CriteriaNode::Criteria(c)
    }
}

impl From<CriteriaGroup> for CriteriaNode {
    fn from(g: CriteriaGroup) -> CriteriaNode {
        CriteriaNode::Group(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn operator_keys_round_trip() {
        assert_eq!(GroupOperator::And.key(), "and");
        assert_eq!(GroupOperator::Or.key(), "or");
        assert_eq!(GroupOperator::from_key("and"), Some(GroupOperator::And));
        assert_eq!(GroupOperator::from_key("or"), Some(GroupOperator::Or));
        assert_eq!(GroupOperator::from_key("not"), None);
    }

    #[test]
    fn seed_is_empty_and_group() {
        match CriteriaNode::seed() {
            CriteriaNode::Group(g) => {
                assert_eq!(g.operator, GroupOperator::And);
                assert!(g.conditions.is_empty());
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn tree_serde_shape_is_type_tagged() {
        let tree = CriteriaNode::Group(CriteriaGroup::new(
            GroupOperator::Or,
            vec![Criteria::new("user_active", false).into()],
        ));

        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "group",
                "operator": "or",
                "conditions": [
                    {"type": "criteria", "itemId": "user_active", "value": false}
                ]
            })
        );

        let back: CriteriaNode = serde_json::from_value(value).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn unassigned_leaf_defaults_true() {
        let c = Criteria::unassigned();
        assert!(c.is_unassigned());
        assert!(c.value);
        assert!(!Criteria::new("x", true).is_unassigned());
    }
}
