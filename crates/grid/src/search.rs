//! Free-text search over every column of a row.

use bizgrid_core::GridRow;

use crate::column::ColumnSet;

/// The search box contents plus its lowercased form used for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// An empty query filters nothing.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// A row matches when the stringified value of any column contains the
    /// query, ignoring case.
    ///
    /// Hidden columns are searched too, so hiding a column never changes
    /// which rows are listed.
    pub fn matches<R: GridRow>(&self, row: &R, columns: &ColumnSet<R>) -> bool {
        if self.is_empty() {
            return true;
        }
        columns
            .iter()
            .any(|column| column.value(row).contains_lowercase(&self.needle))
    }
}

/// Latest-wins buffer for search input arriving faster than it should be
/// evaluated.
///
/// Each queued query supersedes the previous pending one; the host decides
/// when to flush (after a keystroke pause, on enter, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDebounce {
    pending: Option<String>,
}

impl SearchDebounce {
    pub fn queue(&mut self, text: impl Into<String>) {
        self.pending = Some(text.into());
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn take(&mut self) -> Option<String> {
        self.pending.take()
    }
}
