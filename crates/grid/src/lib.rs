//! `bizgrid-grid`: the generic data grid used by list pages.
//!
//! Hosts hand the grid an ordered dataset and column descriptors; the grid owns
//! search, sort, column visibility and pagination state and hands back a
//! render-ready [`GridView`] plus row-action callbacks. No IO, no rendering.

pub mod actions;
pub mod column;
pub mod command;
pub mod grid;
pub mod layout;
pub mod pagination;
pub mod search;
pub mod sort;
pub mod view;

pub use actions::RowActions;
pub use column::{CellFn, Column, ColumnSet, ColumnSource};
pub use command::{GridChange, GridCommand};
pub use grid::DataGrid;
pub use layout::{DEFAULT_BREAKPOINT, Layout, LayoutPolicy};
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES, PageSummary, Pagination};
pub use search::{SearchDebounce, SearchQuery};
pub use sort::{SortDirection, SortState};
pub use view::{ColumnToggle, GridView, HeaderCell, ViewCell, ViewRow};

pub use bizgrid_core::{CellValue, GridError, GridResult, GridRow, Record, RowAction};
