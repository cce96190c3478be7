//! A single ordered, append-only id table.

use std::collections::HashSet;

use crate::error::{RegistryError, RegistryResult, TableKind};

/// An ordered table of string ids whose positions are the wire encoding.
///
/// Lookup is linear; tables hold at most a few dozen entries and are read a
/// handful of times per encode or decode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdTable {
    entries: Vec<String>,
}

impl IdTable {
    /// Builds a table after validating its entries.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyId`] or [`RegistryError::DuplicateId`];
    /// positional decoding cannot tolerate either.
    pub fn new(table: TableKind, entries: Vec<String>) -> RegistryResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.is_empty() {
                return Err(RegistryError::EmptyId { table });
            }
            if !seen.insert(entry.as_str()) {
                return Err(RegistryError::DuplicateId {
                    table,
                    id: entry.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Returns the position of `id`, or `None` when it is not registered.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == id)
    }

    /// Returns the id at `index`, or `None` past the end of the table.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the ids in wire order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns `true` if `older` is a prefix of this table.
    ///
    /// This is the append-only rule: every entry of the older table must
    /// still sit at the same position.
    #[must_use]
    pub fn extends(&self, older: &Self) -> bool {
        older.len() <= self.len()
            && older
                .entries
                .iter()
                .zip(self.entries.iter())
                .all(|(old, new)| old == new)
    }
}
