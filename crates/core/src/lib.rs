//! critree-core: criteria tree model and editing invariants.
//!
//! A criteria tree is a rooted sum type of leaf predicates
//! ([`Criteria`]) and AND/OR groups ([`CriteriaGroup`]). This crate
//! owns the tree shape, the predicate [`Catalog`] it is validated
//! against, the [`is_valid`] well-formedness gate, and the pure
//! copy-on-write edit operations an editor drives the tree with.
//!
//! Conversion to and from the portable expression format lives in
//! `critree-logic`; this crate knows nothing about the wire shape.

pub mod catalog;
pub mod edit;
pub mod node;
pub mod validate;

// ── Convenience re-exports: key types ────────────────────────────────

pub use catalog::{Catalog, Item};
pub use edit::EditError;
pub use node::{Criteria, CriteriaGroup, CriteriaNode, GroupOperator};
pub use validate::is_valid;
