#![deny(unsafe_code)]

use crate::error::{Result, TableError};

/// One cell of a table. Blank source fields are `Missing` rather than an
/// empty string, so the email and name columns have an explicit nullable
/// representation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Build a cell from a raw field: trimmed, with empty content mapping to
    /// `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// One row, positionally aligned with the owning table's column list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub cells: Vec<CellValue>,
}

/// An ordered sequence of records sharing one column set. Column order is
/// meaningful and preserved by every operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. The cell count must match the column count; a table can
    /// never hold a malformed row.
    pub fn push_row(&mut self, record: Record) -> Result<()> {
        if record.cells.len() != self.columns.len() {
            return Err(TableError::WidthMismatch {
                expected: self.columns.len(),
                actual: record.cells.len(),
            });
        }
        self.rows.push(record);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.cells.get(index)
    }

    /// Remove the named columns where present; absent names are ignored.
    /// Returns the names actually removed, in table order.
    pub fn drop_columns(&mut self, names: &[&str]) -> Vec<String> {
        let doomed: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| names.contains(&column.as_str()))
            .map(|(index, _)| index)
            .collect();
        if doomed.is_empty() {
            return Vec::new();
        }
        let mut removed = Vec::with_capacity(doomed.len());
        for index in doomed.iter().rev() {
            removed.push(self.columns.remove(*index));
            for row in &mut self.rows {
                row.cells.remove(*index);
            }
        }
        removed.reverse();
        removed
    }

    /// Rename a column in place. Returns false when the source name is
    /// absent.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(index) => {
                self.columns[index] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Insert a column at the given position (clamped to the column count)
    /// with one value per existing row.
    pub fn insert_column(
        &mut self,
        index: usize,
        name: impl Into<String>,
        values: Vec<CellValue>,
    ) -> Result<()> {
        let name = name.into();
        if values.len() != self.rows.len() {
            return Err(TableError::ColumnLength {
                column: name,
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        let index = index.min(self.columns.len());
        self.columns.insert(index, name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.cells.insert(index, value);
        }
        Ok(())
    }
}
