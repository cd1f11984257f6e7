//! DELETE statement formatting.

use super::QueryBuilder;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::table::{Row, Table};

impl<D: Dialect> QueryBuilder<D> {
    /// Builds `DELETE FROM t WHERE <clause>;`.
    ///
    /// An empty clause yields the empty string: deleting with no predicate
    /// is treated as "nothing to do", never as "delete everything".
    #[must_use]
    pub fn delete_where(&self, table: &Table, where_clause: &str) -> String {
        if where_clause.is_empty() {
            return String::new();
        }
        format!("DELETE FROM {} WHERE {};", table.name(), where_clause)
    }

    /// Deletes one row by its primary-key predicate.
    ///
    /// # Errors
    ///
    /// Fails when the table has no usable primary key.
    pub fn delete_row(&self, table: &Table, row: &Row) -> Result<String> {
        let clause = self.key_predicate(table, row)?;
        Ok(self.delete_where(table, &clause))
    }

    /// Builds one statement deleting every row of the table, with
    /// OR-combined parenthesized per-row predicates:
    /// `DELETE FROM t WHERE ( p1 ) OR ( p2 );`.
    ///
    /// A table with zero rows yields the empty string.
    ///
    /// # Errors
    ///
    /// Fails when the table has no usable primary key.
    pub fn delete(&self, table: &Table) -> Result<String> {
        if table.is_empty() {
            return Ok(String::new());
        }
        let predicates: Vec<String> = table
            .rows()
            .iter()
            .map(|row| Ok(format!("( {} )", self.key_predicate(table, row)?)))
            .collect::<Result<_>>()?;
        Ok(self.delete_where(table, &predicates.join(" OR ")))
    }
}
