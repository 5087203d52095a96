//! Pagination state.
//!
//! The current page is always kept inside `[1, max(1, ceil(total / page_size))]`
//! for the filtered row count it was last clamped against. Every mutating
//! method takes that count so the invariant can be restored immediately.

use core::num::NonZeroUsize;
use core::ops::Range;

use bizgrid_core::{GridError, GridResult};
use serde::{Deserialize, Serialize};

/// Page sizes offered by the page-size menu.
pub const PAGE_SIZE_CHOICES: [usize; 3] = [50, 100, 250];

/// Page size a new grid starts with.
pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaginationSnapshot")]
pub struct Pagination {
    page_size: NonZeroUsize,
    current_page: usize,
}

/// Wire form of [`Pagination`], checked before it becomes live state.
#[derive(Deserialize)]
struct PaginationSnapshot {
    page_size: NonZeroUsize,
    current_page: usize,
}

impl TryFrom<PaginationSnapshot> for Pagination {
    type Error = GridError;

    fn try_from(snapshot: PaginationSnapshot) -> GridResult<Self> {
        if snapshot.current_page == 0 {
            return Err(GridError::InvalidPageNumber);
        }
        Ok(Self {
            page_size: snapshot.page_size,
            current_page: snapshot.current_page,
        })
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
            current_page: 1,
        }
    }
}

impl Pagination {
    /// Any positive page size is accepted; the presets are only a menu.
    pub fn new(page_size: usize) -> GridResult<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or(GridError::InvalidPageSize)?;
        Ok(Self {
            page_size,
            current_page: 1,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages for `total` rows; never less than one.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.get()).max(1)
    }

    pub fn go_to(&mut self, page: usize, total: usize) {
        self.current_page = page.clamp(1, self.page_count(total));
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.current_page, total);
    }

    /// Change the page size, keeping the first row of the current page on
    /// screen.
    pub fn set_page_size(&mut self, page_size: usize, total: usize) -> GridResult<()> {
        let new_size = NonZeroUsize::new(page_size).ok_or(GridError::InvalidPageSize)?;
        let first_row = self.range(total).start;
        self.page_size = new_size;
        self.go_to(first_row / new_size.get() + 1, total);
        Ok(())
    }

    /// Index range of the current page within `total` rows.
    pub fn range(&self, total: usize) -> Range<usize> {
        let size = self.page_size.get();
        let start = (self.page_within(total) - 1)
            .saturating_mul(size)
            .min(total);
        let end = start.saturating_add(size).min(total);
        start..end
    }

    pub fn summary(&self, total: usize) -> PageSummary {
        let range = self.range(total);
        let page_count = self.page_count(total);
        let current_page = self.page_within(total);
        PageSummary {
            current_page,
            page_count,
            page_size: self.page_size.get(),
            total_rows: total,
            first_row: if range.is_empty() { 0 } else { range.start + 1 },
            last_row: range.end,
            has_previous: current_page > 1,
            has_next: current_page < page_count,
        }
    }

    /// Current page as seen against `total` rows, for state that has not been
    /// clamped against that count yet (a restored snapshot).
    fn page_within(&self, total: usize) -> usize {
        self.current_page.clamp(1, self.page_count(total))
    }
}

/// What the pagination footer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub current_page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_rows: usize,
    /// 1-based index of the first row on the page, 0 when there are none.
    pub first_row: usize,
    pub last_row: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageSummary {
    /// Footer controls are inert when everything fits on one page.
    pub fn controls_enabled(&self) -> bool {
        self.page_count > 1
    }
}
