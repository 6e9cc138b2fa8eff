//! Immutable columnar tables for the report pipeline.
//!
//! A [`Frame`] is loaded once from a delimited text file and never mutated:
//! every transformation (derived column, filter) produces a new `Frame`,
//! leaving the source table intact. Columns are either numeric (`f64`, with
//! NaN standing in for missing/undefined values) or text.

pub mod loader;
pub mod ops;

pub use loader::{load_table, Delimiter};
pub use ops::CmpOp;

use crate::error::DataError;

/// A single typed column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric values; NaN marks a missing or undefined entry.
    Number(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Number(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    /// Copy of the column restricted to the given row indices (in order).
    fn take(&self, rows: &[usize]) -> Column {
        match self {
            Column::Number(v) => Column::Number(rows.iter().map(|&i| v[i]).collect()),
            Column::Text(v) => Column::Text(rows.iter().map(|&i| v[i].clone()).collect()),
        }
    }
}

/// An ordered collection of named, equal-length columns.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Label used in logs, usually the source file stem.
    name: String,
    names: Vec<String>,
    columns: Vec<Column>,
    rows: usize,
}

impl Frame {
    /// Build a frame from (name, column) pairs. All columns must have the
    /// same length; callers construct frames only through the loader or the
    /// transform ops, which uphold this.
    pub(crate) fn from_columns(name: String, cols: Vec<(String, Column)>) -> Frame {
        let rows = cols.first().map(|(_, c)| c.len()).unwrap_or(0);
        debug_assert!(cols.iter().all(|(_, c)| c.len() == rows));
        let (names, columns) = cols.into_iter().unzip();
        Frame {
            name,
            names,
            columns,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    pub fn column(&self, name: &str) -> Result<&Column, DataError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
            .ok_or_else(|| DataError::UnknownColumn(name.to_string()))
    }

    /// Numeric column accessor; fails if the column is text.
    pub fn numbers(&self, name: &str) -> Result<&[f64], DataError> {
        match self.column(name)? {
            Column::Number(v) => Ok(v),
            Column::Text(_) => Err(DataError::NotNumeric(name.to_string())),
        }
    }

    /// Text column accessor; fails if the column is numeric.
    pub fn texts(&self, name: &str) -> Result<&[String], DataError> {
        match self.column(name)? {
            Column::Text(v) => Ok(v),
            Column::Number(_) => Err(DataError::NotText(name.to_string())),
        }
    }

    /// New frame containing only the given rows, in the given order.
    pub(crate) fn take_rows(&self, rows: &[usize]) -> Frame {
        Frame {
            name: self.name.clone(),
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.take(rows)).collect(),
            rows: rows.len(),
        }
    }

    /// New frame with an extra column appended.
    pub(crate) fn with_column(&self, name: String, col: Column) -> Frame {
        debug_assert_eq!(col.len(), self.rows);
        let mut names = self.names.clone();
        let mut columns = self.columns.clone();
        names.push(name);
        columns.push(col);
        Frame {
            name: self.name.clone(),
            names,
            columns,
            rows: self.rows,
        }
    }
}
