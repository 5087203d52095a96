//! Sort state and the stable column sort.

use bizgrid_core::CellValue;
use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator glyph.
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort column and direction. No key means input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    key: Option<String>,
    direction: SortDirection,
}

impl SortState {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_sorted(&self) -> bool {
        self.key.is_some()
    }

    /// Direction applied to `key`, if it is the active sort column.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        (self.key.as_deref() == Some(key)).then_some(self.direction)
    }

    /// Header click semantics: a new key starts ascending, the active key
    /// flips direction. Never returns to unsorted.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::unsorted();
    }
}

/// Reorder `indices` by the value `key_of` yields for each index.
///
/// The sort is stable in both directions: ties keep their incoming relative
/// order, descending included.
pub fn stable_sort_indices<F>(indices: &mut Vec<usize>, direction: SortDirection, key_of: F)
where
    F: Fn(usize) -> CellValue,
{
    let mut keyed: Vec<(usize, CellValue)> = indices.iter().map(|&i| (i, key_of(i))).collect();
    keyed.sort_by(|(_, a), (_, b)| match direction {
        SortDirection::Ascending => a.compare(b),
        SortDirection::Descending => b.compare(a),
    });
    indices.clear();
    indices.extend(keyed.into_iter().map(|(i, _)| i));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_between_ascending_and_descending() {
        let mut sort = SortState::unsorted();
        sort.toggle("totalSpent");
        assert_eq!(sort, SortState::by("totalSpent", SortDirection::Ascending));
        sort.toggle("totalSpent");
        assert_eq!(sort.direction(), SortDirection::Descending);
        sort.toggle("totalSpent");
        assert_eq!(sort.direction(), SortDirection::Ascending);
        assert!(sort.is_sorted());
    }

    #[test]
    fn switching_key_restarts_ascending() {
        let mut sort = SortState::by("name", SortDirection::Descending);
        sort.toggle("city");
        assert_eq!(sort.key(), Some("city"));
        assert_eq!(sort.direction(), SortDirection::Ascending);
        assert_eq!(sort.direction_for("name"), None);
    }

    #[test]
    fn descending_keeps_ties_in_input_order() {
        let values = [
            CellValue::Integer(2),
            CellValue::Integer(1),
            CellValue::Integer(2),
            CellValue::Integer(1),
        ];
        let mut indices: Vec<usize> = (0..values.len()).collect();
        stable_sort_indices(&mut indices, SortDirection::Descending, |i| values[i].clone());
        assert_eq!(indices, vec![0, 2, 1, 3]);

        let mut indices: Vec<usize> = (0..values.len()).collect();
        stable_sort_indices(&mut indices, SortDirection::Ascending, |i| values[i].clone());
        assert_eq!(indices, vec![1, 3, 0, 2]);
    }
}
