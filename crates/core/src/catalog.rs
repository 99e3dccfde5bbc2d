//! Predicate catalog: the fixed reference data criteria leaves point at.
//!
//! Supplied by an external provider as an ordered `{id, name}` list. The
//! core only ever reads it — the validator needs id membership, the
//! presentation layer needs display names.

use serde::{Deserialize, Serialize};

/// One catalog entry: a stable predicate identifier plus a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Item {
        Item {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An ordered predicate catalog. Order is the provider's display order;
/// lookups are by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Catalog {
        Catalog { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if some entry carries this id.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Display name for an id, falling back to the id itself when the
    /// catalog does not know it.
    pub fn name_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.as_str())
            .unwrap_or(id)
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Catalog {
        Catalog::new(iter.into_iter().collect())
    }
}
