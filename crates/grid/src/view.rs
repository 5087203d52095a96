//! Derived, render-ready snapshot of a grid.
//!
//! A `GridView` is computed once from the grid state and handed to whichever
//! renderer the layout policy picked. Table and card renderers read the same
//! rows, so they can never disagree about filtering, sorting or paging.

use bizgrid_core::{CellValue, RowAction};
use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::pagination::PageSummary;
use crate::sort::SortDirection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridView {
    pub layout: Layout,
    /// Visible columns in display order.
    pub headers: Vec<HeaderCell>,
    /// Every column with its visibility, for the column menu.
    pub columns: Vec<ColumnToggle>,
    /// Rows on the current page.
    pub rows: Vec<ViewRow>,
    pub page: PageSummary,
    pub page_size_choices: Vec<usize>,
    /// Row controls the host wired up.
    pub actions: Vec<RowAction>,
    pub query: String,
}

impl GridView {
    /// The filtered set is empty; render the "no data" placeholder.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    /// Non-sortable headers are inert decorations.
    pub sortable: bool,
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnToggle {
    pub key: String,
    pub label: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRow {
    /// 0-based position on the current page; what row actions address.
    pub position: usize,
    /// Index into the dataset the grid was given.
    pub source_index: usize,
    /// One cell per visible column.
    pub cells: Vec<ViewCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewCell {
    pub key: String,
    pub label: String,
    pub value: CellValue,
}

impl ViewCell {
    /// Display text; empty for missing values.
    pub fn text(&self) -> String {
        self.value.to_string()
    }
}
