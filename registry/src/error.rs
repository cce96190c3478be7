//! Error types for registry construction.

use std::fmt;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// The five dictionaries a registry carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Characters,
    Difficulties,
    Achievements,
    Compendium,
    Items,
}

/// Errors that can occur while building a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The same id appears twice in one table.
    DuplicateId { table: TableKind, id: String },

    /// A table contains an empty id.
    EmptyId { table: TableKind },

    /// A table exceeds its wire field budget.
    CapacityExceeded {
        table: TableKind,
        limit: usize,
        actual: usize,
    },
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Characters => "characters",
            Self::Difficulties => "difficulties",
            Self::Achievements => "achievements",
            Self::Compendium => "compendium",
            Self::Items => "items",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { table, id } => {
                write!(f, "duplicate id {id:?} in {table} table")
            }
            Self::EmptyId { table } => {
                write!(f, "empty id in {table} table")
            }
            Self::CapacityExceeded {
                table,
                limit,
                actual,
            } => {
                write!(f, "{table} table exceeds its budget: {actual} > {limit}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
