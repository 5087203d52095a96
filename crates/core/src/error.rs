//! Grid error model.

use thiserror::Error;

use crate::action::RowAction;

/// Result type used across the grid crates.
pub type GridResult<T> = Result<T, GridError>;

/// Grid-level error.
///
/// Keep this focused on deterministic configuration and addressing failures.
/// Rendering problems (missing cells, empty result sets) are not errors; they
/// degrade to placeholders instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A column descriptor was built without a key.
    #[error("column key cannot be empty")]
    EmptyColumnKey,

    /// Two column descriptors share the same key.
    #[error("duplicate column key: {0}")]
    DuplicateColumnKey(String),

    /// A command addressed a column that is not part of the column set.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Page sizes must be positive.
    #[error("page size must be a positive integer")]
    InvalidPageSize,

    /// Restored pagination state named page 0.
    #[error("page numbers start at 1")]
    InvalidPageNumber,

    /// A row position outside the current page was addressed.
    #[error("row position {position} is out of range (page has {len} rows)")]
    RowOutOfRange { position: usize, len: usize },

    /// The host did not register a handler for this action.
    #[error("row action not available: {0}")]
    ActionUnavailable(RowAction),

    /// A record could not be built from its source representation.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl GridError {
    pub fn duplicate_column(key: impl Into<String>) -> Self {
        Self::DuplicateColumnKey(key.into())
    }

    pub fn unknown_column(key: impl Into<String>) -> Self {
        Self::UnknownColumn(key.into())
    }

    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }
}
