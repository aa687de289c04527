// All repository functions are generic over `E: Executor<'e, Database = Postgres>`
// so they accept both a `&PgPool` (direct query) and a `&mut Transaction` (atomic operations).
// Multi-statement writes take a `&mut PgConnection` instead and expect the caller
// to have opened a transaction.

pub mod deck;
pub mod deck_group;
pub mod flashcard;

/// Result of an update or delete keyed by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum WriteOutcome {
    /// The row existed and was written
    Applied,
    /// No row has the requested id
    NotFound,
}

impl WriteOutcome {
    /// Interpret the affected row count of a statement keyed by primary key.
    pub const fn from_rows_affected(rows_affected: u64) -> Self {
        if rows_affected == 0 {
            Self::NotFound
        } else {
            Self::Applied
        }
    }

    /// `true` when a row was written
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
