//! Row abstraction consumed by the grid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::value::CellValue;

/// A row the grid can display.
///
/// The grid never inspects rows beyond this lookup, so hosts can hand over
/// typed read models directly instead of converting them to maps first.
/// Lookups for fields the row does not have must return `CellValue::Empty`.
pub trait GridRow {
    fn cell(&self, key: &str) -> CellValue;
}

impl<T: GridRow + ?Sized> GridRow for &T {
    fn cell(&self, key: &str) -> CellValue {
        (**self).cell(key)
    }
}

/// Schema-free row: column key → value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Build a record from a JSON object (as returned by the read-model API).
    pub fn from_json(value: &serde_json::Value) -> GridResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            GridError::invalid_record(format!("expected a JSON object, got {}", json_kind(value)))
        })?;

        Ok(Self {
            fields: object
                .iter()
                .map(|(k, v)| (k.clone(), CellValue::from_json(v)))
                .collect(),
        })
    }

    /// Parse a JSON array of objects into records.
    pub fn many_from_json(value: &serde_json::Value) -> GridResult<Vec<Self>> {
        let items = value.as_array().ok_or_else(|| {
            GridError::invalid_record(format!("expected a JSON array, got {}", json_kind(value)))
        })?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                Self::from_json(item)
                    .map_err(|e| GridError::invalid_record(format!("row {}: {e}", i + 1)))
            })
            .collect()
    }
}

impl GridRow for Record {
    fn cell(&self, key: &str) -> CellValue {
        self.fields.get(key).cloned().unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_field_is_empty_cell() {
        let record = Record::new().with("name", "Acme Supplies Inc.");
        assert_eq!(record.cell("name"), CellValue::text("Acme Supplies Inc."));
        assert_eq!(record.cell("email"), CellValue::Empty);
    }

    #[test]
    fn from_json_converts_each_field() {
        let record = Record::from_json(&json!({
            "name": "TechParts Co.",
            "orders": 12,
            "totalSpent": 24680.50,
            "since": "2021-06-30",
            "active": true
        }))
        .unwrap();

        assert_eq!(record.len(), 5);
        assert_eq!(record.cell("orders"), CellValue::Integer(12));
        assert_eq!(record.cell("totalSpent"), CellValue::Number(24680.5));
        assert_eq!(record.cell("active"), CellValue::Bool(true));
        assert!(matches!(record.cell("since"), CellValue::Date(_)));
    }

    #[test]
    fn from_json_rejects_non_objects() {
        let err = Record::from_json(&json!([1, 2, 3])).unwrap_err();
        match err {
            GridError::InvalidRecord(msg) if msg.contains("an array") => {}
            other => panic!("Expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn many_from_json_reports_offending_row() {
        let err = Record::many_from_json(&json!([{ "name": "ok" }, "nope"])).unwrap_err();
        match err {
            GridError::InvalidRecord(msg) if msg.starts_with("row 2") => {}
            other => panic!("Expected InvalidRecord for row 2, got {other:?}"),
        }
    }

    #[test]
    fn collects_from_pairs() {
        let record: Record = [("sku", CellValue::text("SKU-001")), ("qty", CellValue::Integer(4))]
            .into_iter()
            .collect();
        assert_eq!(record.cell("qty"), CellValue::Integer(4));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["qty", "sku"]);
    }
}
