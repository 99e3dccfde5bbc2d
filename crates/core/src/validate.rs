//! Well-formedness gate for criteria trees.
//!
//! Callers invoke this explicitly before exporting or persisting a
//! tree; neither the serializer nor the deserializer consults it.

use crate::catalog::Catalog;
use crate::node::CriteriaNode;

/// True iff every leaf references a catalog predicate and every group
/// has at least one condition.
///
/// Total over the node type: there is no failure path, only a verdict.
/// Unassigned leaves (empty `item_id`) are invalid here even though
/// they are legal transient editor state.
pub fn is_valid(node: &CriteriaNode, catalog: &Catalog) -> bool {
    match node {
        CriteriaNode::Criteria(c) => catalog.contains(&c.item_id),
        CriteriaNode::Group(g) => {
            !g.conditions.is_empty()
                && g.conditions.iter().all(|child| is_valid(child, catalog))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::node::{Criteria, CriteriaGroup, GroupOperator};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("user_active", "User is Active"),
            Item::new("email_verified", "Email Verified"),
        ])
    }

    #[test]
    fn known_leaf_is_valid() {
        assert!(is_valid(
            &Criteria::new("user_active", false).into(),
            &catalog()
        ));
    }

    #[test]
    fn unknown_leaf_is_invalid() {
        assert!(!is_valid(&Criteria::new("nope", true).into(), &catalog()));
    }

    #[test]
    fn unassigned_leaf_is_invalid() {
        assert!(!is_valid(&Criteria::unassigned().into(), &catalog()));
    }

    #[test]
    fn empty_group_is_invalid_regardless_of_catalog() {
        let empty = CriteriaNode::seed();
        assert!(!is_valid(&empty, &catalog()));
        assert!(!is_valid(&empty, &Catalog::default()));
    }

    #[test]
    fn group_requires_all_children_valid() {
        let good = CriteriaGroup::new(
            GroupOperator::And,
            vec![
                Criteria::new("user_active", true).into(),
                Criteria::new("email_verified", false).into(),
            ],
        );
        assert!(is_valid(&good.clone().into(), &catalog()));

        let mut bad = good;
        bad.conditions.push(Criteria::new("unknown", true).into());
        assert!(!is_valid(&bad.into(), &catalog()));
    }

    #[test]
    fn nested_empty_subgroup_poisons_the_tree() {
        let tree = CriteriaGroup::new(
            GroupOperator::Or,
            vec![
                Criteria::new("user_active", true).into(),
                CriteriaGroup::empty().into(),
            ],
        );
        assert!(!is_valid(&tree.into(), &catalog()));
    }
}
