//! critree-storage: named snapshots of portable expressions.
//!
//! The core never touches storage; this crate is the opaque key-value
//! collaborator the presentation layer saves expressions through. It
//! defines the [`SavedLogic`] record, the [`LogicStore`] trait, and a
//! single-document JSON file backend.

mod error;
mod fs;
mod record;
mod traits;

pub use error::StorageError;
pub use fs::JsonFileStore;
pub use record::SavedLogic;
pub use traits::LogicStore;
