//! Column descriptors and the validated column set.

use std::collections::HashSet;
use std::sync::Arc;

use bizgrid_core::{CellValue, GridError, GridResult, GridRow};

/// Computed cell function: pure mapping from a row to a display value.
pub type CellFn<R> = Arc<dyn Fn(&R) -> CellValue + Send + Sync>;

/// Where a column gets its value from.
pub enum ColumnSource<R> {
    /// Look up the column key in the row.
    Field,
    /// Derive the value from the whole row (formatted totals, joined names, ...).
    Computed(CellFn<R>),
}

impl<R> Clone for ColumnSource<R> {
    fn clone(&self) -> Self {
        match self {
            ColumnSource::Field => ColumnSource::Field,
            ColumnSource::Computed(f) => ColumnSource::Computed(Arc::clone(f)),
        }
    }
}

impl<R> core::fmt::Debug for ColumnSource<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColumnSource::Field => f.write_str("Field"),
            ColumnSource::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Describes how one field of a row is labelled, displayed and addressed.
#[derive(Debug, Clone)]
pub struct Column<R> {
    key: String,
    header: String,
    visible: bool,
    sortable: bool,
    source: ColumnSource<R>,
}

impl<R> Column<R> {
    /// A visible, non-sortable column reading `key` from each row.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            visible: true,
            sortable: false,
            source: ColumnSource::Field,
        }
    }

    /// A column whose value is computed from the whole row.
    pub fn computed<F>(key: impl Into<String>, header: impl Into<String>, f: F) -> Self
    where
        F: Fn(&R) -> CellValue + Send + Sync + 'static,
    {
        Self {
            source: ColumnSource::Computed(Arc::new(f)),
            ..Self::new(key, header)
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Start hidden; the user can reveal it from the column menu.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn source(&self) -> &ColumnSource<R> {
        &self.source
    }
}

impl<R: GridRow> Column<R> {
    /// Resolve this column's value for `row`.
    ///
    /// Panics raised by a computed cell function propagate to the caller.
    pub fn value(&self, row: &R) -> CellValue {
        match &self.source {
            ColumnSource::Field => row.cell(&self.key),
            ColumnSource::Computed(f) => f(row),
        }
    }
}

/// Ordered column descriptors with unique, non-empty keys.
#[derive(Debug, Clone)]
pub struct ColumnSet<R> {
    columns: Vec<Column<R>>,
}

impl<R> ColumnSet<R> {
    /// Validate and wrap a column list.
    ///
    /// Rejects blank keys and duplicate keys; both would break visibility
    /// toggling and sort addressing.
    pub fn new(columns: Vec<Column<R>>) -> GridResult<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.key.trim().is_empty() {
                return Err(GridError::EmptyColumnKey);
            }
            if !seen.insert(column.key.as_str()) {
                return Err(GridError::duplicate_column(&column.key));
            }
        }
        Ok(Self { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column<R>> {
        self.columns.iter()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Column<R>> {
        self.columns.iter().filter(|c| c.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn get(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Like `get`, but an unknown key is an error.
    pub fn require(&self, key: &str) -> GridResult<&Column<R>> {
        self.get(key).ok_or_else(|| GridError::unknown_column(key))
    }

    /// Flip visibility of `key`; returns the new visibility.
    ///
    /// Hiding the last visible column is allowed and leaves a grid that only
    /// shows row actions.
    pub fn toggle(&mut self, key: &str) -> GridResult<bool> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.key == key)
            .ok_or_else(|| GridError::unknown_column(key))?;
        column.visible = !column.visible;
        Ok(column.visible)
    }
}
