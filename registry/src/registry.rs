//! The five-table registry and its construction rules.

use crate::error::{RegistryError, RegistryResult, TableKind};
use crate::table::IdTable;

/// Maximum number of characters: the wire format stores a character as a
/// fixed 5-bit index.
pub const MAX_CHARACTERS: usize = 32;

/// Maximum number of difficulties: the wire format stores a difficulty as a
/// fixed 3-bit index.
pub const MAX_DIFFICULTIES: usize = 8;

/// The complete set of id dictionaries shared by encoder and decoder.
///
/// Read-only at runtime. Evolution across versions is append-only; see
/// [`Registry::is_extension_of`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    characters: IdTable,
    difficulties: IdTable,
    achievements: IdTable,
    compendium: IdTable,
    items: IdTable,
}

impl Registry {
    /// Builds a registry from raw tables after validation.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] for duplicate or empty ids in any table,
    /// or when characters/difficulties exceed their wire field budget.
    pub fn new(
        characters: Vec<String>,
        difficulties: Vec<String>,
        achievements: Vec<String>,
        compendium: Vec<String>,
        items: Vec<String>,
    ) -> RegistryResult<Self> {
        if characters.len() > MAX_CHARACTERS {
            return Err(RegistryError::CapacityExceeded {
                table: TableKind::Characters,
                limit: MAX_CHARACTERS,
                actual: characters.len(),
            });
        }
        if difficulties.len() > MAX_DIFFICULTIES {
            return Err(RegistryError::CapacityExceeded {
                table: TableKind::Difficulties,
                limit: MAX_DIFFICULTIES,
                actual: difficulties.len(),
            });
        }

        Ok(Self {
            characters: IdTable::new(TableKind::Characters, characters)?,
            difficulties: IdTable::new(TableKind::Difficulties, difficulties)?,
            achievements: IdTable::new(TableKind::Achievements, achievements)?,
            compendium: IdTable::new(TableKind::Compendium, compendium)?,
            items: IdTable::new(TableKind::Items, items)?,
        })
    }

    /// Creates a registry builder.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The playable character table.
    #[must_use]
    pub fn characters(&self) -> &IdTable {
        &self.characters
    }

    /// The difficulty table.
    #[must_use]
    pub fn difficulties(&self) -> &IdTable {
        &self.difficulties
    }

    /// The achievement table.
    #[must_use]
    pub fn achievements(&self) -> &IdTable {
        &self.achievements
    }

    /// The compendium (bestiary) entry table.
    #[must_use]
    pub fn compendium(&self) -> &IdTable {
        &self.compendium
    }

    /// The inventory item table.
    #[must_use]
    pub fn items(&self) -> &IdTable {
        &self.items
    }

    /// Returns `true` if every table of `older` is a positional prefix of
    /// the corresponding table here.
    ///
    /// Run this against the previous release's registry at load time: a
    /// `false` answer means an existing entry moved, was renamed, or was
    /// removed, and codes minted by that release would decode to the wrong
    /// entities.
    #[must_use]
    pub fn is_extension_of(&self, older: &Self) -> bool {
        self.characters.extends(&older.characters)
            && self.difficulties.extends(&older.difficulties)
            && self.achievements.extends(&older.achievements)
            && self.compendium.extends(&older.compendium)
            && self.items.extends(&older.items)
    }
}

/// Builder for [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    characters: Vec<String>,
    difficulties: Vec<String>,
    achievements: Vec<String>,
    compendium: Vec<String>,
    items: Vec<String>,
}

impl RegistryBuilder {
    /// Appends a character id.
    #[must_use]
    pub fn character(mut self, id: &str) -> Self {
        self.characters.push(id.to_owned());
        self
    }

    /// Appends a difficulty id.
    #[must_use]
    pub fn difficulty(mut self, id: &str) -> Self {
        self.difficulties.push(id.to_owned());
        self
    }

    /// Appends an achievement id.
    #[must_use]
    pub fn achievement(mut self, id: &str) -> Self {
        self.achievements.push(id.to_owned());
        self
    }

    /// Appends a compendium entry id.
    #[must_use]
    pub fn compendium_entry(mut self, id: &str) -> Self {
        self.compendium.push(id.to_owned());
        self
    }

    /// Appends an item id.
    #[must_use]
    pub fn item(mut self, id: &str) -> Self {
        self.items.push(id.to_owned());
        self
    }

    /// Builds the registry after validation.
    pub fn build(self) -> RegistryResult<Registry> {
        Registry::new(
            self.characters,
            self.difficulties,
            self.achievements,
            self.compendium,
            self.items,
        )
    }
}
