//! Cell values: the heterogeneous payload of a grid row.
//!
//! Rows coming out of ERP read models mix text (names, SKUs), integers
//! (quantities), decimals (amounts), dates and flags. `CellValue` keeps those
//! kinds apart so sorting can compare like with like, while `Display` gives the
//! single stringified form used for both rendering and search.

use core::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used when reading and displaying date cells.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single cell value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing field or explicit null. Renders as an empty cell.
    #[default]
    Empty,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Convert a JSON value into a cell.
    ///
    /// Strings shaped like `YYYY-MM-DD` become dates; nested arrays and objects
    /// are kept as their compact JSON text.
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Integer(i),
                None => CellValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => match NaiveDate::parse_from_str(s, DATE_FORMAT) {
                Ok(date) => CellValue::Date(date),
                Err(_) => CellValue::Text(s.clone()),
            },
            other => CellValue::Text(other.to_string()),
        }
    }

    /// Case-insensitive substring match on the stringified value.
    ///
    /// `needle` must already be lowercased.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => s.to_lowercase().contains(needle),
            other => other.to_string().to_lowercase().contains(needle),
        }
    }

    /// Loose ordering used by column sorting.
    ///
    /// Integers and decimals compare numerically with each other, dates
    /// chronologically, text by code point (not locale-aware). Values of
    /// different kinds order by kind: empty, bool, numeric, date, text.
    /// NaN sorts after every other number.
    pub fn compare(&self, other: &Self) -> Ordering {
        use CellValue::*;

        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Integer(a), Number(b)) => compare_f64(*a as f64, *b),
            (Number(a), Integer(b)) => compare_f64(*a, *b as f64),
            (Number(a), Number(b)) => compare_f64(*a, *b),
            (Date(a), Date(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Integer(_) | CellValue::Number(_) => 2,
            CellValue::Date(_) => 3,
            CellValue::Text(_) => 4,
        }
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

impl core::fmt::Display for CellValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u32> for CellValue {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
