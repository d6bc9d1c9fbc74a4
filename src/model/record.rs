//! Filtered Records
//!
//! A [`Record`] keeps the two identifying columns typed and every other
//! column as a [`Cell`], so optional indicator columns can be looked up by
//! name without guessing at sentinel values.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

use super::IndicatorKey;

pub const COL_COUNTRY: &str = "Pais";
pub const COL_YEAR: &str = "Ano";
pub const COL_GDP_PER_CAPITA: &str = "PIB_per_Capita";
pub const COL_CONTINENT: &str = "Continent";
pub const COL_TYPE: &str = "Type";
pub const COL_CAGR_FORECAST: &str = "CAGR_Forecast";

/// A single column value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Number(f64),
    Text(String),
}

impl Cell {
    fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Null),
            Value::String(s) => Cell::Text(s),
            other => Cell::Text(other.to_string()),
        }
    }

    /// Numeric value, only for cells that hold a JSON number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Text value, only for cells that hold a JSON string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Number(v as f64)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Cell::Null)
    }
}

/// Result of looking up an indicator on a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// A finite number (JSON number, or text starting with one)
    Value(f64),
    /// The column is not part of the record
    Absent,
    /// The column is present and null
    Null,
    /// The column holds something that is not a number, e.g. `"N/A"`
    Placeholder,
}

impl Reading {
    pub fn value(self) -> Option<f64> {
        match self {
            Reading::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Errors converting a JSON object into a [`Record`]
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("Record is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("Column '{column}' has an invalid value: {value}")]
    InvalidValue { column: &'static str, value: String },

    #[error("Record is not a JSON object: {0}")]
    NotAnObject(String),
}

/// One country-year observation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Record {
    pub country: String,
    pub year: i32,
    columns: BTreeMap<String, Cell>,
}

impl Record {
    /// Create a record with only the identifying columns
    pub fn new(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
            columns: BTreeMap::new(),
        }
    }

    /// Add or replace a column value
    pub fn column(mut self, name: impl Into<String>, value: impl Into<Cell>) -> Self {
        self.columns.insert(name.into(), value.into());
        self
    }

    /// Whether the column was part of the payload (null values count)
    pub fn has_column(&self, name: &str) -> bool {
        name == COL_COUNTRY || name == COL_YEAR || self.columns.contains_key(name)
    }

    /// Raw value of a column; `None` when the column is absent
    pub fn cell(&self, name: &str) -> Option<Cell> {
        match name {
            COL_COUNTRY => Some(Cell::Text(self.country.clone())),
            COL_YEAR => Some(Cell::Number(self.year as f64)),
            _ => self.columns.get(name).cloned(),
        }
    }

    /// Names of every column in the record, identifying columns first
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        [COL_COUNTRY, COL_YEAR]
            .into_iter()
            .chain(self.columns.keys().map(String::as_str))
    }

    pub fn gdp_per_capita(&self) -> Option<f64> {
        self.columns.get(COL_GDP_PER_CAPITA).and_then(Cell::as_f64)
    }

    pub fn continent(&self) -> Option<&str> {
        self.columns.get(COL_CONTINENT).and_then(Cell::as_str)
    }

    /// Historical vs. forecast marker (`Type` column)
    pub fn kind(&self) -> Option<&str> {
        self.columns.get(COL_TYPE).and_then(Cell::as_str)
    }

    pub fn cagr_forecast(&self) -> Option<f64> {
        self.columns.get(COL_CAGR_FORECAST).and_then(Cell::as_f64)
    }

    /// Look up an indicator column by key
    pub fn indicator(&self, key: &IndicatorKey) -> Reading {
        match self.cell(key.as_str()) {
            None => Reading::Absent,
            Some(Cell::Null) => Reading::Null,
            Some(Cell::Number(v)) if v.is_finite() => Reading::Value(v),
            Some(Cell::Number(_)) => Reading::Placeholder,
            Some(Cell::Text(s)) => leading_number(&s)
                .filter(|v| v.is_finite())
                .map(Reading::Value)
                .unwrap_or(Reading::Placeholder),
        }
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = RecordError;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let country = match map.remove(COL_COUNTRY) {
            Some(Value::String(s)) => s,
            Some(other) => {
                return Err(RecordError::InvalidValue {
                    column: COL_COUNTRY,
                    value: other.to_string(),
                })
            }
            None => return Err(RecordError::MissingColumn(COL_COUNTRY)),
        };

        let year = match map.remove(COL_YEAR) {
            Some(value) => parse_year(&value).ok_or_else(|| RecordError::InvalidValue {
                column: COL_YEAR,
                value: value.to_string(),
            })?,
            None => return Err(RecordError::MissingColumn(COL_YEAR)),
        };

        let columns = map
            .into_iter()
            .map(|(name, value)| (name, Cell::from_json(value)))
            .collect();

        Ok(Self {
            country,
            year,
            columns,
        })
    }
}

/// Decode a records payload row by row.
///
/// A row that is not a valid record is logged and skipped; the rest of the
/// result set still renders.
pub fn decode_records(rows: Vec<Value>) -> Vec<Record> {
    let total = rows.len();
    let records: Vec<Record> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let decoded = match row {
                Value::Object(map) => Record::try_from(map),
                other => Err(RecordError::NotAnObject(other.to_string())),
            };
            decoded
                .map_err(|e| tracing::warn!(row = index, error = %e, "Skipping invalid record"))
                .ok()
        })
        .collect();

    if records.len() < total {
        tracing::warn!(
            skipped = total - records.len(),
            total,
            "Some records could not be decoded"
        );
    }
    records
}

/// Number at the start of the text, ignoring whatever follows it
/// (`"3.5%"` reads as 3.5, `"N/A"` as nothing)
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        start + bytes[start.min(bytes.len())..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if digits > 0 || frac_end > end + 1 {
            digits += frac_end - (end + 1);
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Years arrive as integers, but pandas exports sometimes emit `2020.0`
fn parse_year(value: &Value) -> Option<i32> {
    if let Some(y) = value.as_i64() {
        return i32::try_from(y).ok();
    }
    let y = value.as_f64()?;
    if y.fract() == 0.0 && y >= i32::MIN as f64 && y <= i32::MAX as f64 {
        Some(y as i32)
    } else {
        None
    }
}
