//! Row actions a grid can hand back to its host.

use serde::{Deserialize, Serialize};

/// Per-row control the host may wire up.
///
/// The grid only dispatches these; navigation, confirmation dialogs and any
/// mutation of the underlying record belong to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    /// All actions in display order.
    pub const ALL: [RowAction; 3] = [RowAction::View, RowAction::Edit, RowAction::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::View => "view",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }
}

impl core::fmt::Display for RowAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
