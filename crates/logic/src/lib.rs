//! critree-logic: the portable expression format.
//!
//! Converts criteria trees to and from the compact declarative form
//! external rule evaluators consume. An expression is a
//! `serde_json::Value` that is either a bare predicate id (string
//! shorthand for "is true"), `{"and": [...]}`, `{"or": [...]}`, or
//! `{"==": [{"var": id}, value]}`.
//!
//! [`serialize`] is total — unfinished editor leaves are dropped, never
//! an error. [`deserialize`] is the strict inverse and rejects anything
//! outside the grammar with [`MalformedExpression`].

pub mod deserialize;
pub mod serialize;

pub use deserialize::{deserialize, MalformedExpression};
pub use serialize::serialize;
