//! Grid commands and the transitions they produce.
//!
//! Every user interaction maps to one `GridCommand`. Hosts that drive the grid
//! from serialized input (a web front end, a scripted console session) send
//! commands; `DataGrid::dispatch` applies them and reports a `GridChange`.

use serde::{Deserialize, Serialize};

use crate::sort::SortState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum GridCommand {
    SetSearchQuery(String),
    ToggleColumnVisibility(String),
    SetSort(String),
    ClearSort,
    SetPageSize(usize),
    GoToPage(usize),
    NextPage,
    PreviousPage,
}

impl GridCommand {
    pub fn name(&self) -> &'static str {
        match self {
            GridCommand::SetSearchQuery(_) => "set_search_query",
            GridCommand::ToggleColumnVisibility(_) => "toggle_column_visibility",
            GridCommand::SetSort(_) => "set_sort",
            GridCommand::ClearSort => "clear_sort",
            GridCommand::SetPageSize(_) => "set_page_size",
            GridCommand::GoToPage(_) => "go_to_page",
            GridCommand::NextPage => "next_page",
            GridCommand::PreviousPage => "previous_page",
        }
    }
}

/// Outcome of a dispatched command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridChange {
    SearchChanged { query: String, matched: usize },
    ColumnToggled { key: String, visible: bool },
    SortChanged { sort: SortState },
    /// The column exists but is not sortable.
    SortIgnored { key: String },
    PageSizeChanged { page_size: usize, current_page: usize },
    PageChanged { current_page: usize },
}
