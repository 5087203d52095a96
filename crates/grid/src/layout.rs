//! Narrow-viewport policy: table above the breakpoint, stacked cards below.

use serde::{Deserialize, Serialize};

/// Viewport width below which rows render as cards.
pub const DEFAULT_BREAKPOINT: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Header row plus one line per row.
    Table,
    /// One label/value block per visible column, per row.
    Cards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutPolicy {
    breakpoint: u32,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

impl LayoutPolicy {
    pub fn with_breakpoint(breakpoint: u32) -> Self {
        Self { breakpoint }
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    pub fn layout_for(&self, viewport_width: u32) -> Layout {
        if viewport_width < self.breakpoint {
            Layout::Cards
        } else {
            Layout::Table
        }
    }
}
