//! Pure structural edits over criteria trees.
//!
//! Every operation takes the current root plus a path of child indexes,
//! and returns a freshly built tree. The input is never mutated, so a
//! caller holding the previous root (a rendered preview, an undo stack)
//! keeps a consistent snapshot.
//!
//! An empty path addresses the root itself.

use crate::node::{Criteria, CriteriaGroup, CriteriaNode, GroupOperator};

/// A structural edit addressed a node the operation cannot apply to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// The node at path depth `depth` is a leaf, but the edit needs a group.
    #[error("node at path depth {depth} is not a group")]
    NotAGroup { depth: usize },

    /// The node at path depth `depth` is a group, but the edit needs a leaf.
    #[error("node at path depth {depth} is not a criteria leaf")]
    NotACriteria { depth: usize },

    /// A path index ran past the end of a group's conditions.
    #[error("child index {index} out of bounds for group of {len}")]
    OutOfBounds { index: usize, len: usize },

    /// The root has no parent to remove it from.
    #[error("cannot remove the root node")]
    CannotRemoveRoot,
}

/// Borrow the node at `path`, if the path resolves.
pub fn node_at<'a>(root: &'a CriteriaNode, path: &[usize]) -> Option<&'a CriteriaNode> {
    let mut node = root;
    for &index in path {
        node = node.as_group()?.conditions.get(index)?;
    }
    Some(node)
}

/// Append an unassigned leaf to the group at `path`.
pub fn add_criteria(root: &CriteriaNode, path: &[usize]) -> Result<CriteriaNode, EditError> {
    let mut next = root.clone();
    group_at_mut(&mut next, path)?
        .conditions
        .push(Criteria::unassigned().into());
    Ok(next)
}

/// Append an empty AND subgroup to the group at `path`.
pub fn add_group(root: &CriteriaNode, path: &[usize]) -> Result<CriteriaNode, EditError> {
    let mut next = root.clone();
    group_at_mut(&mut next, path)?
        .conditions
        .push(CriteriaGroup::empty().into());
    Ok(next)
}

/// Remove the node at `path` from its parent group.
pub fn remove(root: &CriteriaNode, path: &[usize]) -> Result<CriteriaNode, EditError> {
    let (&index, parent_path) = path.split_last().ok_or(EditError::CannotRemoveRoot)?;
    let mut next = root.clone();
    let parent = group_at_mut(&mut next, parent_path)?;
    if index >= parent.conditions.len() {
        return Err(EditError::OutOfBounds {
            index,
            len: parent.conditions.len(),
        });
    }
    parent.conditions.remove(index);
    Ok(next)
}

/// Change the operator of the group at `path`.
pub fn set_operator(
    root: &CriteriaNode,
    path: &[usize],
    operator: GroupOperator,
) -> Result<CriteriaNode, EditError> {
    let mut next = root.clone();
    group_at_mut(&mut next, path)?.operator = operator;
    Ok(next)
}

/// Point the leaf at `path` at a different catalog predicate.
pub fn assign(
    root: &CriteriaNode,
    path: &[usize],
    item_id: impl Into<String>,
) -> Result<CriteriaNode, EditError> {
    let mut next = root.clone();
    criteria_at_mut(&mut next, path)?.item_id = item_id.into();
    Ok(next)
}

/// Set the expected boolean of the leaf at `path`.
pub fn set_value(
    root: &CriteriaNode,
    path: &[usize],
    value: bool,
) -> Result<CriteriaNode, EditError> {
    let mut next = root.clone();
    criteria_at_mut(&mut next, path)?.value = value;
    Ok(next)
}

// ── Path resolution ─────────────────────────────────────────────────

fn node_at_mut<'a>(
    root: &'a mut CriteriaNode,
    path: &[usize],
) -> Result<&'a mut CriteriaNode, EditError> {
    let mut node = root;
    for (depth, &index) in path.iter().enumerate() {
        let group = match node {
            CriteriaNode::Group(g) => g,
            CriteriaNode::Criteria(_) => return Err(EditError::NotAGroup { depth }),
        };
        let len = group.conditions.len();
        node = group
            .conditions
            .get_mut(index)
            .ok_or(EditError::OutOfBounds { index, len })?;
    }
    Ok(node)
}

fn group_at_mut<'a>(
    root: &'a mut CriteriaNode,
    path: &[usize],
) -> Result<&'a mut CriteriaGroup, EditError> {
    match node_at_mut(root, path)? {
        CriteriaNode::Group(g) => Ok(g),
        CriteriaNode::Criteria(_) => Err(EditError::NotAGroup { depth: path.len() }),
    }
}

fn criteria_at_mut<'a>(
    root: &'a mut CriteriaNode,
    path: &[usize],
) -> Result<&'a mut Criteria, EditError> {
    match node_at_mut(root, path)? {
        CriteriaNode::Criteria(c) => Ok(c),
        CriteriaNode::Group(_) => Err(EditError::NotACriteria { depth: path.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CriteriaNode {
        // and(user_active=true, or(email_verified=false))
        CriteriaGroup::new(
            GroupOperator::And,
            vec![
                Criteria::new("user_active", true).into(),
                CriteriaGroup::new(
                    GroupOperator::Or,
                    vec![Criteria::new("email_verified", false).into()],
                )
                .into(),
            ],
        )
        .into()
    }

    #[test]
    fn node_at_resolves_nested_paths() {
        let tree = sample();
        assert_eq!(node_at(&tree, &[]), Some(&tree));
        assert_eq!(
            node_at(&tree, &[1, 0]),
            Some(&Criteria::new("email_verified", false).into())
        );
        assert_eq!(node_at(&tree, &[2]), None);
        assert_eq!(node_at(&tree, &[0, 0]), None);
    }

    #[test]
    fn add_criteria_appends_unassigned_leaf() {
        let tree = sample();
        let next = add_criteria(&tree, &[1]).unwrap();
        let subgroup = node_at(&next, &[1]).unwrap().as_group().unwrap();
        assert_eq!(subgroup.conditions.len(), 2);
        assert_eq!(
            subgroup.conditions[1],
            Criteria::unassigned().into()
        );
        // input untouched
        let original = node_at(&tree, &[1]).unwrap().as_group().unwrap();
        assert_eq!(original.conditions.len(), 1);
    }

    #[test]
    fn add_group_appends_empty_and_subgroup() {
        let tree = sample();
        let next = add_group(&tree, &[]).unwrap();
        let root = next.as_group().unwrap();
        assert_eq!(root.conditions.len(), 3);
        assert_eq!(root.conditions[2], CriteriaGroup::empty().into());
    }

    #[test]
    fn remove_deletes_addressed_child() {
        let tree = sample();
        let next = remove(&tree, &[0]).unwrap();
        let root = next.as_group().unwrap();
        assert_eq!(root.conditions.len(), 1);
        assert!(root.conditions[0].as_group().is_some());
    }

    #[test]
    fn remove_root_is_rejected() {
        assert_eq!(remove(&sample(), &[]), Err(EditError::CannotRemoveRoot));
    }

    #[test]
    fn remove_out_of_bounds_is_rejected() {
        assert_eq!(
            remove(&sample(), &[5]),
            Err(EditError::OutOfBounds { index: 5, len: 2 })
        );
    }

    #[test]
    fn set_operator_flips_group() {
        let next = set_operator(&sample(), &[1], GroupOperator::And).unwrap();
        let subgroup = node_at(&next, &[1]).unwrap().as_group().unwrap();
        assert_eq!(subgroup.operator, GroupOperator::And);
    }

    #[test]
    fn assign_and_set_value_rewrite_leaf() {
        let tree = sample();
        let next = assign(&tree, &[0], "premium_member").unwrap();
        let next = set_value(&next, &[0], false).unwrap();
        assert_eq!(
            node_at(&next, &[0]).unwrap().as_criteria().unwrap(),
            &Criteria::new("premium_member", false)
        );
    }

    #[test]
    fn leaf_edits_reject_groups_and_vice_versa() {
        let tree = sample();
        assert_eq!(
            set_operator(&tree, &[0], GroupOperator::Or),
            Err(EditError::NotAGroup { depth: 1 })
        );
        assert_eq!(
            assign(&tree, &[1], "x"),
            Err(EditError::NotACriteria { depth: 1 })
        );
        // descending through a leaf reports the depth it happened at
        assert_eq!(
            add_criteria(&tree, &[0, 0]),
            Err(EditError::NotAGroup { depth: 1 })
        );
    }
}
