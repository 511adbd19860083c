use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::normalize::{extract_rows, pick_str};

pub const TABLE_ENVELOPES: &[&str] = &["data", "tables", "rows"];

/// Rendered value of one cell in the raw table browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Null,
    Text(String),
    /// Nested object or array, kept as compact JSON.
    Json(String),
}

impl CellValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Object(_) | Value::Array(_) => CellValue::Json(value.to_string()),
            other => CellValue::Text(other.to_string()),
        }
    }

    pub fn display(&self) -> &str {
        match self {
            CellValue::Null => "NULL",
            CellValue::Text(s) | CellValue::Json(s) => s,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// One row of `GET /api/tables/{tableName}`. Cells follow the column order
/// derived from the first row of the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    pub index: usize,
    pub cells: Vec<(String, CellValue)>,
}

impl TableRecord {
    pub fn cell(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

/// Column names taken from the keys of the first row.
pub fn columns_of(payload: &Value) -> Vec<String> {
    extract_rows(payload, TABLE_ENVELOPES)
        .first()
        .and_then(Value::as_object)
        .map(|first| first.keys().cloned().collect())
        .unwrap_or_default()
}

pub fn records_from_payload(payload: &Value) -> Vec<TableRecord> {
    let columns = columns_of(payload);
    extract_rows(payload, TABLE_ENVELOPES)
        .iter()
        .enumerate()
        .map(|(index, row)| TableRecord {
            index,
            cells: columns
                .iter()
                .map(|column| {
                    let value = row.get(column).map(CellValue::from_json).unwrap_or(CellValue::Null);
                    (column.clone(), value)
                })
                .collect(),
        })
        .collect()
}

/// Table names from `GET /api/tables/`; entries may be bare strings or
/// objects carrying the name.
pub fn table_names(payload: &Value) -> Vec<String> {
    extract_rows(payload, TABLE_ENVELOPES)
        .iter()
        .filter_map(|entry| match entry {
            Value::String(name) if !name.trim().is_empty() => Some(name.trim().to_string()),
            Value::Object(_) => pick_str(entry, &["table_name", "tableName", "name"]),
            _ => None,
        })
        .collect()
}
