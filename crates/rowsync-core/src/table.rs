//! Dynamic table, column, and row model.
//!
//! A [`Table`] is an in-memory snapshot: ordered columns, an ordered
//! primary-key column list, and owned rows. Column value types are not
//! declared — they are inferred from the values a column holds.

use crate::error::{Result, SyncError};
use crate::value::{SqlValue, ValueKind};

/// A named column. Its value type is implicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
}

impl Column {
    /// Creates a column with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A single row: one value per table column, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<SqlValue>,
}

impl Row {
    /// Creates a row from values aligned with the owning table's columns.
    #[must_use]
    pub fn new(values: Vec<SqlValue>) -> Self {
        Self { values }
    }

    /// Returns the row's values in column order.
    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    pub(crate) fn set(&mut self, index: usize, value: SqlValue) {
        self.values[index] = value;
    }
}

/// An in-memory table snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    primary_key: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            primary_key: vec![],
            rows: vec![],
        }
    }

    /// Specifies the table's columns, in order.
    #[must_use]
    pub fn columns(mut self, names: &[&str]) -> Self {
        self.columns = names.iter().map(|n| Column::new(*n)).collect();
        self
    }

    /// Declares the ordered primary-key column list.
    ///
    /// Key order matters for predicate construction. Membership is checked
    /// when a key-scoped operation resolves the key via [`Self::key_indices`].
    #[must_use]
    pub fn primary_key(mut self, names: &[&str]) -> Self {
        self.primary_key = names.iter().map(|n| String::from(*n)).collect();
        self
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column at `index`.
    #[must_use]
    pub fn column(&self, index: usize) -> &Column {
        &self.columns[index]
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterates over column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// Returns the position of the named column.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns the ordered primary-key column names.
    #[must_use]
    pub fn primary_key_columns(&self) -> &[String] {
        &self.primary_key
    }

    /// Returns the table's rows.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns `true` when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::ArityMismatch`] when the value count does not
    /// match the column count.
    pub fn push_row(&mut self, values: Vec<SqlValue>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(SyncError::ArityMismatch {
                table: self.name.clone(),
                expected: self.columns.len(),
                got: values.len(),
            });
        }
        self.rows.push(Row::new(values));
        Ok(())
    }

    /// Schema-only clone: same name, columns, and primary key, no rows.
    #[must_use]
    pub fn clone_structure(&self) -> Self {
        Self {
            name: self.name.clone(),
            columns: self.columns.clone(),
            primary_key: self.primary_key.clone(),
            rows: vec![],
        }
    }

    /// Infers a column's value type from its first non-null value.
    ///
    /// Returns `None` when every value in the column is NULL or the table
    /// has no rows.
    #[must_use]
    pub fn column_kind(&self, index: usize) -> Option<ValueKind> {
        self.rows.iter().find_map(|row| row.values()[index].kind())
    }

    /// Resolves the primary-key columns to indices.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingPrimaryKey`] when no key is declared and
    /// [`SyncError::UnknownColumn`] when a key column is not in the table.
    pub fn key_indices(&self) -> Result<Vec<usize>> {
        if self.primary_key.is_empty() {
            return Err(SyncError::MissingPrimaryKey(self.name.clone()));
        }
        self.primary_key
            .iter()
            .map(|key| {
                self.column_index(key).ok_or_else(|| SyncError::UnknownColumn {
                    table: self.name.clone(),
                    column: key.clone(),
                })
            })
            .collect()
    }
}
