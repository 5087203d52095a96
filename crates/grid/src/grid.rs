//! The data grid: search, sort, column visibility, pagination and row actions
//! over a caller-supplied dataset.
//!
//! ## Pipeline
//!
//! Rows flow through three fixed stages, each consuming the previous one's
//! output:
//!
//! 1. **Filter** by the search query (any column, hidden ones included)
//! 2. **Sort** the filtered subset by the sort state (stable)
//! 3. **Paginate** the sorted subset
//!
//! Page counts therefore reflect matched rows only, and re-sorting never moves
//! page boundaries.
//!
//! ## State
//!
//! The filtered + sorted order is kept as a list of indices into the dataset and
//! recomputed after every transition, before the method returns. A view built
//! after any call always sees a consistent state, and the current page is
//! always clamped to the filtered row count.
//!
//! The dataset itself is shared (`Arc<[R]>`) and never mutated. Row actions
//! receive references into it.

use std::sync::Arc;

use bizgrid_core::{GridError, GridResult, GridRow, RowAction};

use crate::actions::RowActions;
use crate::column::{Column, ColumnSet};
use crate::command::{GridChange, GridCommand};
use crate::layout::LayoutPolicy;
use crate::pagination::{PAGE_SIZE_CHOICES, Pagination};
use crate::search::{SearchDebounce, SearchQuery};
use crate::sort::{SortState, stable_sort_indices};
use crate::view::{ColumnToggle, GridView, HeaderCell, ViewCell, ViewRow};

#[derive(Debug)]
pub struct DataGrid<R> {
    rows: Arc<[R]>,
    columns: ColumnSet<R>,
    query: SearchQuery,
    debounce: SearchDebounce,
    sort: SortState,
    pagination: Pagination,
    layout: LayoutPolicy,
    actions: RowActions<R>,
    /// Filtered + sorted dataset indices.
    derived: Vec<usize>,
}

impl<R: GridRow> DataGrid<R> {
    /// Mount a grid over `rows` with the given column descriptors.
    ///
    /// Fails fast on malformed columns (blank or duplicate keys).
    pub fn new(rows: impl Into<Arc<[R]>>, columns: Vec<Column<R>>) -> GridResult<Self> {
        let columns = ColumnSet::new(columns)?;
        let mut grid = Self {
            rows: rows.into(),
            columns,
            query: SearchQuery::default(),
            debounce: SearchDebounce::default(),
            sort: SortState::unsorted(),
            pagination: Pagination::default(),
            layout: LayoutPolicy::default(),
            actions: RowActions::default(),
            derived: Vec::new(),
        };
        grid.refresh();
        Ok(grid)
    }

    pub fn with_page_size(mut self, page_size: usize) -> GridResult<Self> {
        self.set_page_size(page_size)?;
        Ok(self)
    }

    pub fn with_layout_policy(mut self, layout: LayoutPolicy) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_actions(mut self, actions: RowActions<R>) -> Self {
        self.actions = actions;
        self
    }

    pub fn set_actions(&mut self, actions: RowActions<R>) {
        self.actions = actions;
    }

    pub fn rows(&self) -> &Arc<[R]> {
        &self.rows
    }

    pub fn columns(&self) -> &ColumnSet<R> {
        &self.columns
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.derived.len())
    }

    /// Number of rows matching the current query.
    pub fn filtered_len(&self) -> usize {
        self.derived.len()
    }

    /// Filtered rows in sorted order, across all pages.
    pub fn filtered_rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.derived.iter().map(move |&i| &self.rows[i])
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.page_indices().iter().map(move |&i| &self.rows[i])
    }

    /// Row at `position` (0-based) on the current page.
    pub fn row_at(&self, position: usize) -> GridResult<&R> {
        self.source_index(position).map(|i| &self.rows[i])
    }

    /// Index into [`rows`](Self::rows) of the row at `position` on the
    /// current page. Tells duplicate rows apart.
    pub fn source_index(&self, position: usize) -> GridResult<usize> {
        let page = self.page_indices();
        page.get(position).copied().ok_or(GridError::RowOutOfRange {
            position,
            len: page.len(),
        })
    }

    fn page_indices(&self) -> &[usize] {
        &self.derived[self.pagination.range(self.derived.len())]
    }

    // ---------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------

    /// Replace the search query and go back to page 1.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query = SearchQuery::new(text);
        self.pagination.reset();
        self.refresh();
        tracing::debug!(
            query = %self.query.as_str(),
            matched = self.derived.len(),
            "search query updated"
        );
    }

    /// Record search input without evaluating it yet; supersedes any pending
    /// query.
    pub fn queue_search(&mut self, text: impl Into<String>) {
        self.debounce.queue(text);
    }

    /// Apply the latest queued query. Returns `false` if nothing was pending.
    pub fn flush_search(&mut self) -> bool {
        match self.debounce.take() {
            Some(text) => {
                self.set_search_query(text);
                true
            }
            None => false,
        }
    }

    /// Flip visibility of a column; returns the new visibility.
    pub fn toggle_column_visibility(&mut self, key: &str) -> GridResult<bool> {
        let visible = self.columns.toggle(key)?;
        if self.columns.visible_count() == 0 {
            tracing::debug!(key, "last visible column hidden; only row actions remain");
        }
        Ok(visible)
    }

    /// Sort by `key`, or flip direction if it is already the sort column.
    ///
    /// Returns `Ok(false)` without changing anything when the column is not
    /// sortable.
    pub fn set_sort(&mut self, key: &str) -> GridResult<bool> {
        if !self.columns.require(key)?.is_sortable() {
            tracing::debug!(key, "ignoring sort on non-sortable column");
            return Ok(false);
        }
        self.sort.toggle(key);
        self.refresh();
        tracing::debug!(key, direction = ?self.sort.direction(), "sort updated");
        Ok(true)
    }

    /// Back to input order.
    pub fn clear_sort(&mut self) {
        self.sort.clear();
        self.refresh();
    }

    pub fn set_page_size(&mut self, page_size: usize) -> GridResult<()> {
        self.pagination
            .set_page_size(page_size, self.derived.len())?;
        tracing::debug!(
            page_size,
            current_page = self.pagination.current_page(),
            "page size updated"
        );
        Ok(())
    }

    /// Go to a 1-based page, clamped to the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page, self.derived.len());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page().saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page().saturating_sub(1));
    }

    /// Swap the dataset, keeping query, sort and column visibility.
    pub fn replace_rows(&mut self, rows: impl Into<Arc<[R]>>) {
        self.rows = rows.into();
        self.refresh();
    }

    /// Swap dataset and columns and reset all transient state.
    ///
    /// Columns are validated first; on error the grid is left untouched.
    pub fn reconfigure(
        &mut self,
        rows: impl Into<Arc<[R]>>,
        columns: Vec<Column<R>>,
    ) -> GridResult<()> {
        let columns = ColumnSet::new(columns)?;
        self.rows = rows.into();
        self.columns = columns;
        self.query = SearchQuery::default();
        self.debounce = SearchDebounce::default();
        self.sort.clear();
        self.pagination.reset();
        self.refresh();
        Ok(())
    }

    /// Apply a command and describe the resulting transition.
    pub fn dispatch(&mut self, command: GridCommand) -> GridResult<GridChange> {
        let name = command.name();
        let change = match command {
            GridCommand::SetSearchQuery(text) => {
                self.set_search_query(text);
                GridChange::SearchChanged {
                    query: self.query.as_str().to_string(),
                    matched: self.derived.len(),
                }
            }
            GridCommand::ToggleColumnVisibility(key) => {
                let visible = self.toggle_column_visibility(&key)?;
                GridChange::ColumnToggled { key, visible }
            }
            GridCommand::SetSort(key) => {
                if self.set_sort(&key)? {
                    GridChange::SortChanged {
                        sort: self.sort.clone(),
                    }
                } else {
                    GridChange::SortIgnored { key }
                }
            }
            GridCommand::ClearSort => {
                self.clear_sort();
                GridChange::SortChanged {
                    sort: self.sort.clone(),
                }
            }
            GridCommand::SetPageSize(page_size) => {
                self.set_page_size(page_size)?;
                GridChange::PageSizeChanged {
                    page_size,
                    current_page: self.current_page(),
                }
            }
            GridCommand::GoToPage(page) => {
                self.go_to_page(page);
                self.page_changed()
            }
            GridCommand::NextPage => {
                self.next_page();
                self.page_changed()
            }
            GridCommand::PreviousPage => {
                self.previous_page();
                self.page_changed()
            }
        };
        tracing::debug!(command = name, ?change, "grid command applied");
        Ok(change)
    }

    fn page_changed(&self) -> GridChange {
        GridChange::PageChanged {
            current_page: self.current_page(),
        }
    }

    /// Invoke a row action for the row at `position` on the current page.
    ///
    /// The handler receives the row from the supplied dataset, unmodified.
    pub fn activate(&mut self, action: RowAction, position: usize) -> GridResult<()> {
        if !self.actions.has(action) {
            return Err(GridError::ActionUnavailable(action));
        }
        let index = self.source_index(position)?;
        tracing::debug!(%action, position, index, "row action activated");
        self.actions.dispatch(action, &self.rows[index])
    }

    /// Build the render-ready view for a viewport of `viewport_width`.
    pub fn view(&self, viewport_width: u32) -> GridView {
        let visible: Vec<&Column<R>> = self.columns.visible().collect();

        let headers = visible
            .iter()
            .map(|column| HeaderCell {
                key: column.key().to_string(),
                label: column.header().to_string(),
                sortable: column.is_sortable(),
                sort: self.sort.direction_for(column.key()),
            })
            .collect();

        let columns = self
            .columns
            .iter()
            .map(|column| ColumnToggle {
                key: column.key().to_string(),
                label: column.header().to_string(),
                visible: column.is_visible(),
            })
            .collect();

        let rows = self
            .page_indices()
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                let row = &self.rows[index];
                ViewRow {
                    position,
                    source_index: index,
                    cells: visible
                        .iter()
                        .map(|column| ViewCell {
                            key: column.key().to_string(),
                            label: column.header().to_string(),
                            value: column.value(row),
                        })
                        .collect(),
                }
            })
            .collect();

        GridView {
            layout: self.layout.layout_for(viewport_width),
            headers,
            columns,
            rows,
            page: self.pagination.summary(self.derived.len()),
            page_size_choices: PAGE_SIZE_CHOICES.to_vec(),
            actions: self.actions.available(),
            query: self.query.as_str().to_string(),
        }
    }

    /// Recompute filter + sort and re-clamp the page.
    fn refresh(&mut self) {
        let rows = &self.rows;
        let columns = &self.columns;
        let query = &self.query;

        let mut derived: Vec<usize> = (0..rows.len())
            .filter(|&i| query.matches(&rows[i], columns))
            .collect();

        if let Some(column) = self.sort.key().and_then(|key| columns.get(key)) {
            stable_sort_indices(&mut derived, self.sort.direction(), |i| {
                column.value(&rows[i])
            });
        }

        self.derived = derived;
        self.pagination.clamp(self.derived.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizgrid_core::{CellValue, Record};
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::layout::Layout;
    use crate::sort::SortDirection;

    fn supplier(name: &str, city: &str, total: f64) -> Record {
        Record::new()
            .with("name", name)
            .with("city", city)
            .with("totalSpent", total)
    }

    fn supplier_columns() -> Vec<Column<Record>> {
        vec![
            Column::new("name", "Supplier").sortable(),
            Column::new("city", "City"),
            Column::new("totalSpent", "Total Spent").sortable(),
        ]
    }

    fn suppliers() -> Vec<Record> {
        vec![
            supplier("Acme Supplies Inc.", "Chicago", 32450.75),
            supplier("TechParts Co.", "Austin", 24680.50),
            supplier("Global Metals", "Chicago", 15750.25),
        ]
    }

    fn numbered(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| Record::new().with("id", i as i64).with("name", format!("Row {i}")))
            .collect()
    }

    fn ids(grid: &DataGrid<Record>) -> Vec<CellValue> {
        grid.page_rows().map(|r| r.cell("id")).collect()
    }

    #[test]
    fn new_rejects_malformed_columns() {
        let err = DataGrid::new(suppliers(), vec![Column::new("", "Nameless")]).unwrap_err();
        assert_eq!(err, GridError::EmptyColumnKey);
    }

    #[test]
    fn search_resets_to_first_page() {
        let mut grid = DataGrid::new(numbered(120), vec![Column::new("name", "Name")]).unwrap();
        grid.go_to_page(3);
        assert_eq!(grid.current_page(), 3);

        grid.set_search_query("row 1");
        assert_eq!(grid.current_page(), 1);
        // "Row 1", "Row 10".."Row 19", "Row 100".."Row 120"
        assert_eq!(grid.filtered_len(), 1 + 10 + 21);
    }

    #[test]
    fn set_sort_on_non_sortable_column_is_inert() {
        let mut grid = DataGrid::new(suppliers(), supplier_columns()).unwrap();
        assert_eq!(grid.set_sort("city"), Ok(false));
        assert_eq!(grid.sort(), &SortState::unsorted());
        assert_eq!(
            grid.set_sort("nope"),
            Err(GridError::UnknownColumn("nope".to_string()))
        );
    }

    #[test]
    fn sort_applies_to_filtered_subset_only() {
        let mut grid = DataGrid::new(suppliers(), supplier_columns()).unwrap();
        grid.set_search_query("chicago");
        grid.set_sort("totalSpent").unwrap();

        let names: Vec<_> = grid.page_rows().map(|r| r.cell("name").to_string()).collect();
        assert_eq!(names, vec!["Global Metals", "Acme Supplies Inc."]);
    }

    #[test]
    fn clear_sort_restores_input_order() {
        let mut grid = DataGrid::new(suppliers(), supplier_columns()).unwrap();
        grid.set_sort("name").unwrap();
        grid.set_sort("name").unwrap();
        grid.clear_sort();
        let names: Vec<_> = grid.page_rows().map(|r| r.cell("name").to_string()).collect();
        assert_eq!(names, vec!["Acme Supplies Inc.", "TechParts Co.", "Global Metals"]);
    }

    #[test]
    fn sorting_keeps_current_page() {
        let mut grid = DataGrid::new(
            numbered(120),
            vec![Column::new("id", "Id").sortable()],
        )
        .unwrap();
        grid.go_to_page(2);
        grid.set_sort("id").unwrap();
        grid.set_sort("id").unwrap();
        assert_eq!(grid.current_page(), 2);
        assert_eq!(ids(&grid).first(), Some(&CellValue::Integer(70)));
    }

    #[test]
    fn page_size_change_reclamps() {
        let mut grid = DataGrid::new(numbered(120), vec![Column::new("id", "Id")]).unwrap();
        grid.go_to_page(3);
        grid.set_page_size(250).unwrap();
        assert_eq!(grid.current_page(), 1);
        assert_eq!(grid.page_rows().count(), 120);
        assert_eq!(grid.set_page_size(0), Err(GridError::InvalidPageSize));
    }

    #[test]
    fn next_and_previous_stay_in_range() {
        let mut grid = DataGrid::new(numbered(60), vec![Column::new("id", "Id")]).unwrap();
        grid.previous_page();
        assert_eq!(grid.current_page(), 1);
        grid.next_page();
        grid.next_page();
        assert_eq!(grid.current_page(), 2);
    }

    #[test]
    fn replace_rows_clamps_page_and_keeps_query() {
        let mut grid = DataGrid::new(numbered(120), vec![Column::new("name", "Name")]).unwrap();
        grid.set_search_query("row");
        grid.go_to_page(3);
        grid.replace_rows(numbered(30));
        assert_eq!(grid.query(), "row");
        assert_eq!(grid.current_page(), 1);
        assert_eq!(grid.filtered_len(), 30);
    }

    #[test]
    fn reconfigure_resets_state_and_validates_first() {
        let mut grid = DataGrid::new(suppliers(), supplier_columns()).unwrap();
        grid.set_search_query("acme");
        grid.set_sort("name").unwrap();

        let err = grid
            .reconfigure(numbered(3), vec![Column::new("id", "Id"), Column::new("id", "Dup")])
            .unwrap_err();
        assert_eq!(err, GridError::DuplicateColumnKey("id".to_string()));
        assert_eq!(grid.query(), "acme");

        grid.reconfigure(numbered(3), vec![Column::new("id", "Id")]).unwrap();
        assert_eq!(grid.query(), "");
        assert!(!grid.sort().is_sorted());
        assert_eq!(grid.filtered_len(), 3);
    }

    #[test]
    fn flush_search_applies_latest_queued_query() {
        let mut grid = DataGrid::new(suppliers(), supplier_columns()).unwrap();
        assert!(!grid.flush_search());
        grid.queue_search("a");
        grid.queue_search("tech");
        assert_eq!(grid.filtered_len(), 3);
        assert!(grid.flush_search());
        assert_eq!(grid.query(), "tech");
        assert_eq!(grid.filtered_len(), 1);
    }

    #[test]
    fn dispatch_reports_changes() {
        let mut grid = DataGrid::new(suppliers(), supplier_columns()).unwrap();

        let change = grid
            .dispatch(GridCommand::SetSearchQuery("chicago".to_string()))
            .unwrap();
        assert_eq!(
            change,
            GridChange::SearchChanged {
                query: "chicago".to_string(),
                matched: 2,
            }
        );

        let change = grid.dispatch(GridCommand::SetSort("city".to_string())).unwrap();
        assert_eq!(change, GridChange::SortIgnored { key: "city".to_string() });

        let change = grid
            .dispatch(GridCommand::SetSort("totalSpent".to_string()))
            .unwrap();
        assert_eq!(
            change,
            GridChange::SortChanged {
                sort: SortState::by("totalSpent", SortDirection::Ascending),
            }
        );

        let change = grid
            .dispatch(GridCommand::ToggleColumnVisibility("city".to_string()))
            .unwrap();
        assert_eq!(
            change,
            GridChange::ColumnToggled {
                key: "city".to_string(),
                visible: false,
            }
        );

        assert_eq!(
            grid.dispatch(GridCommand::GoToPage(9)).unwrap(),
            GridChange::PageChanged { current_page: 1 }
        );
        assert_eq!(
            grid.dispatch(GridCommand::SetPageSize(0)),
            Err(GridError::InvalidPageSize)
        );
    }

    #[test]
    fn activate_passes_the_supplied_row_by_reference() {
        let rows: Arc<[Record]> = suppliers().into();
        let seen: Rc<RefCell<Vec<*const Record>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut grid = DataGrid::new(Arc::clone(&rows), supplier_columns())
            .unwrap()
            .with_actions(RowActions::new().on_edit(move |row: &Record| {
                sink.borrow_mut().push(row as *const Record);
            }));

        grid.set_sort("totalSpent").unwrap();
        grid.activate(RowAction::Edit, 0).unwrap();

        // Lowest total is the third supplied row.
        assert_eq!(seen.borrow().as_slice(), &[&rows[2] as *const Record]);
        assert_eq!(rows[2].cell("totalSpent"), CellValue::Number(15750.25));
    }

    #[test]
    fn activate_rejects_missing_handler_and_bad_position() {
        let mut grid = DataGrid::new(suppliers(), supplier_columns())
            .unwrap()
            .with_actions(RowActions::new().on_view(|_| {}));

        assert_eq!(
            grid.activate(RowAction::Delete, 0),
            Err(GridError::ActionUnavailable(RowAction::Delete))
        );
        assert_eq!(
            grid.activate(RowAction::View, 3),
            Err(GridError::RowOutOfRange { position: 3, len: 3 })
        );
        assert!(grid.activate(RowAction::View, 2).is_ok());
    }

    #[test]
    fn source_index_distinguishes_identical_rows() {
        let twin = Record::new().with("name", "Twin");
        let rows = vec![
            twin.clone(),
            Record::new().with("name", "Alpha"),
            twin.clone(),
        ];
        let mut grid = DataGrid::new(rows, vec![Column::new("name", "Name").sortable()]).unwrap();
        grid.set_sort("name").unwrap();

        assert_eq!(grid.source_index(0), Ok(1));
        assert_eq!(grid.source_index(1), Ok(0));
        assert_eq!(grid.source_index(2), Ok(2));
        assert_eq!(
            grid.source_index(3),
            Err(GridError::RowOutOfRange { position: 3, len: 3 })
        );

        grid.set_page_size(2).unwrap();
        grid.next_page();
        assert_eq!(grid.source_index(0), Ok(2));
    }

    #[test]
    fn view_reflects_visible_columns_sort_and_actions() {
        let mut grid = DataGrid::new(suppliers(), supplier_columns())
            .unwrap()
            .with_actions(RowActions::new().on_view(|_| {}).on_delete(|_| {}));
        grid.toggle_column_visibility("city").unwrap();
        grid.set_sort("name").unwrap();

        let view = grid.view(1280);
        assert_eq!(view.layout, Layout::Table);
        let keys: Vec<_> = view.headers.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "totalSpent"]);
        assert_eq!(view.headers[0].sort, Some(SortDirection::Ascending));
        assert_eq!(view.headers[1].sort, None);
        assert_eq!(view.actions, vec![RowAction::View, RowAction::Delete]);
        assert_eq!(view.columns.len(), 3);
        assert!(!view.columns[1].visible);
        assert_eq!(view.rows[0].cells.len(), 2);
        assert_eq!(view.rows[0].cells[0].text(), "Acme Supplies Inc.");
        assert_eq!(view.page_size_choices, vec![50, 100, 250]);
    }

    #[test]
    fn narrow_viewport_renders_same_rows_as_cards() {
        let mut grid = DataGrid::new(suppliers(), supplier_columns()).unwrap();
        grid.set_search_query("co");
        let wide = grid.view(1024);
        let narrow = grid.view(375);
        assert_eq!(narrow.layout, Layout::Cards);
        assert_eq!(wide.rows, narrow.rows);
        assert_eq!(wide.page, narrow.page);
    }

    #[test]
    fn empty_result_is_page_one_of_one() {
        let mut grid = DataGrid::new(suppliers(), supplier_columns()).unwrap();
        grid.set_search_query("zzz");
        let view = grid.view(1024);
        assert!(view.is_empty());
        assert_eq!(view.page.current_page, 1);
        assert_eq!(view.page.page_count, 1);
        assert!(!view.page.controls_enabled());
    }

    #[test]
    fn hiding_every_column_leaves_actions_only() {
        let mut grid = DataGrid::new(suppliers(), supplier_columns())
            .unwrap()
            .with_actions(RowActions::new().on_view(|_| {}));
        for key in ["name", "city", "totalSpent"] {
            grid.toggle_column_visibility(key).unwrap();
        }
        let view = grid.view(1024);
        assert!(view.headers.is_empty());
        assert_eq!(view.rows.len(), 3);
        assert!(view.rows.iter().all(|r| r.cells.is_empty()));
        assert_eq!(view.actions, vec![RowAction::View]);

        // Hidden columns still drive search.
        grid.set_search_query("austin");
        assert_eq!(grid.filtered_len(), 1);
    }

    #[test]
    fn missing_values_render_as_empty_cells() {
        let rows = vec![Record::new().with("name", "No city on file")];
        let grid = DataGrid::new(rows, supplier_columns()).unwrap();
        let view = grid.view(1024);
        assert_eq!(view.rows[0].cells[1].value, CellValue::Empty);
        assert_eq!(view.rows[0].cells[1].text(), "");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn record_strategy() -> impl Strategy<Value = Record> {
            ("[a-cA-C ]{0,6}", 0i64..5, prop::option::of("[a-c]{0,3}")).prop_map(
                |(name, qty, note)| {
                    Record::new()
                        .with("name", name)
                        .with("qty", qty)
                        .with("note", note)
                },
            )
        }

        fn columns() -> Vec<Column<Record>> {
            vec![
                Column::new("name", "Name").sortable(),
                Column::new("qty", "Qty").sortable(),
                Column::new("note", "Note").hidden(),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a row is listed iff some column value contains the query, ignoring case.
            #[test]
            fn filter_matches_any_column_case_insensitively(
                rows in prop::collection::vec(record_strategy(), 0..40),
                query in "[a-cA-C0-4 ]{0,2}"
            ) {
                let mut grid = DataGrid::new(rows.clone(), columns()).unwrap();
                grid.set_search_query(query.clone());

                let needle = query.to_lowercase();
                let expected: Vec<&Record> = rows
                    .iter()
                    .filter(|r| {
                        query.is_empty()
                            || ["name", "qty", "note"].iter().any(|k| {
                                r.cell(k).to_string().to_lowercase().contains(&needle)
                            })
                    })
                    .collect();
                let actual: Vec<&Record> = grid.filtered_rows().collect();
                prop_assert_eq!(actual, expected);
            }

            /// Property: ties keep their filtered-input order in both directions.
            #[test]
            fn sort_is_stable_in_both_directions(
                rows in prop::collection::vec(record_strategy(), 0..40),
                flips in 1usize..4
            ) {
                let indexed: Vec<Record> = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, r)| r.with("seq", i as i64))
                    .collect();
                let mut grid = DataGrid::new(indexed, columns()).unwrap();
                for _ in 0..flips {
                    grid.set_sort("qty").unwrap();
                }
                let descending = grid.sort().direction() == SortDirection::Descending;

                let sorted: Vec<&Record> = grid.filtered_rows().collect();
                for pair in sorted.windows(2) {
                    let (a, b) = (pair[0].cell("qty"), pair[1].cell("qty"));
                    let order = a.compare(&b);
                    if descending {
                        prop_assert_ne!(order, core::cmp::Ordering::Less);
                    } else {
                        prop_assert_ne!(order, core::cmp::Ordering::Greater);
                    }
                    if order == core::cmp::Ordering::Equal {
                        prop_assert_eq!(
                            pair[0].cell("seq").compare(&pair[1].cell("seq")),
                            core::cmp::Ordering::Less
                        );
                    }
                }
            }

            /// Property: the current page always lies in range and holds the expected row count.
            #[test]
            fn pagination_stays_in_bounds(
                rows in prop::collection::vec(record_strategy(), 0..120),
                page_size in 1usize..30,
                page in 0usize..20,
                query in "[a-c]{0,1}"
            ) {
                let mut grid = DataGrid::new(rows, columns()).unwrap();
                grid.set_page_size(page_size).unwrap();
                grid.go_to_page(page);
                grid.set_search_query(query);
                grid.go_to_page(page);

                let n = grid.filtered_len();
                let last = n.div_ceil(page_size).max(1);
                let current = grid.current_page();
                prop_assert!((1..=last).contains(&current));

                let expected = page_size.min(n.saturating_sub((current - 1) * page_size));
                prop_assert_eq!(grid.page_rows().count(), expected);
            }

            /// Property: clearing the query restores the full sorted dataset from page 1.
            #[test]
            fn clearing_query_restores_full_sorted_set(
                rows in prop::collection::vec(record_strategy(), 0..80),
                query in "[a-c]{1,2}",
                page in 1usize..5
            ) {
                let mut grid = DataGrid::new(rows.clone(), columns())
                    .unwrap()
                    .with_page_size(10)
                    .unwrap();
                grid.set_sort("name").unwrap();
                grid.set_search_query(query);
                grid.go_to_page(page);
                grid.set_search_query("");

                prop_assert_eq!(grid.current_page(), 1);
                prop_assert_eq!(grid.filtered_len(), rows.len());

                let mut expected: Vec<usize> = (0..rows.len()).collect();
                expected.sort_by(|&a, &b| rows[a].cell("name").compare(&rows[b].cell("name")));
                let expected: Vec<&Record> = expected.into_iter().map(|i| &rows[i]).collect();
                let actual: Vec<&Record> = grid.filtered_rows().collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }
}
