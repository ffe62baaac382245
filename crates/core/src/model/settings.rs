use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("multiplication table must be between 1 and 12, got {0}")]
    OutOfRange(u8),
}

//
// ─── TABLE ────────────────────────────────────────────────────────────────────
//

/// Facts generated per table entry: `i x 1` through `i x 4`.
pub const FACTS_PER_TABLE: usize = 4;

/// Multiplication table selected for a game, validated to 1..=12.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Table(u8);

impl Table {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 12;

    /// Creates a validated table.
    ///
    /// # Errors
    ///
    /// Returns `TableError::OutOfRange` if `value` is not in 1..=12.
    pub fn new(value: u8) -> Result<Self, TableError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TableError::OutOfRange(value))
        }
    }

    /// Returns the underlying table number.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// All selectable tables, for presenter pickers.
    pub fn all() -> impl Iterator<Item = Table> {
        (Self::MIN..=Self::MAX).map(Table)
    }

    /// Number of questions a game on this table generates.
    #[must_use]
    pub fn question_total(self) -> usize {
        usize::from(self.0) * FACTS_PER_TABLE
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── QUESTION COUNT ───────────────────────────────────────────────────────────
//

/// How many correct answers the player asked to reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionCount {
    #[default]
    Five,
    Ten,
    Twenty,
    /// One pass over every question of the table.
    All,
}

impl QuestionCount {
    /// The picker choices, in display order.
    pub const VARIANTS: [QuestionCount; 4] = [
        QuestionCount::Five,
        QuestionCount::Ten,
        QuestionCount::Twenty,
        QuestionCount::All,
    ];

    /// Parses a picker label.
    ///
    /// Anything that is not "5", "10" or "20" behaves as `All`: the
    /// unrecognized-count fallback is a deliberate local default, never an
    /// error.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "5" => Self::Five,
            "10" => Self::Ten,
            "20" => Self::Twenty,
            _ => Self::All,
        }
    }

    /// Resolves the requested count against the size of the question set.
    #[must_use]
    pub fn resolve(self, total: usize) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::All => total,
        }
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Five => write!(f, "5"),
            Self::Ten => write!(f, "10"),
            Self::Twenty => write!(f, "20"),
            Self::All => write!(f, "All"),
        }
    }
}

//
// ─── GAME SETTINGS ────────────────────────────────────────────────────────────
//

/// Configuration chosen in Setup: which table, and how many questions.
///
/// Settings outlive a game: ending or winning keeps them as the defaults for
/// the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    table: Table,
    count: QuestionCount,
}

impl GameSettings {
    #[must_use]
    pub fn new(table: Table, count: QuestionCount) -> Self {
        Self { table, count }
    }

    #[must_use]
    pub fn table(self) -> Table {
        self.table
    }

    #[must_use]
    pub fn count(self) -> QuestionCount {
        self.count
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            table: Table(1),
            count: QuestionCount::Five,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
