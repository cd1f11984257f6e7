//! UPDATE statement formatting.

use super::QueryBuilder;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::table::{Row, Table};

impl<D: Dialect> QueryBuilder<D> {
    /// Builds an UPDATE statement keyed on the row's primary key.
    ///
    /// With a baseline row, only the columns whose value differs from the
    /// baseline appear in the SET list; comparison is plain value equality
    /// (the trim option never applies here). When no column differs the
    /// statement is a no-op and the empty string is returned. Without a
    /// baseline every column is set unconditionally.
    ///
    /// # Errors
    ///
    /// Fails when the table has no usable primary key.
    pub fn update_row(&self, table: &Table, row: &Row, baseline: Option<&Row>) -> Result<String> {
        let predicate = self.key_predicate(table, row)?;

        let mut assignments: Vec<String> = Vec::new();
        for (i, value) in row.values().iter().enumerate() {
            let changed = baseline.map_or(true, |base| *value != base.values()[i]);
            if changed {
                assignments.push(format!(
                    "{} = {}",
                    table.column(i).name(),
                    value.to_sql_literal(&self.dialect)
                ));
            }
        }
        if assignments.is_empty() {
            return Ok(String::new());
        }
        Ok(format!(
            "UPDATE {} SET {} WHERE {};",
            table.name(),
            assignments.join(", "),
            predicate
        ))
    }
}
