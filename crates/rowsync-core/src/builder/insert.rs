//! INSERT statement formatting.

use super::QueryBuilder;
use crate::dialect::Dialect;
use crate::table::{Row, Table};

impl<D: Dialect> QueryBuilder<D> {
    /// Builds the statement head: `INSERT INTO t ( c1, c2 ) VALUES `
    /// (note the trailing space).
    #[must_use]
    pub fn insert_header(&self, table: &Table) -> String {
        let names: Vec<&str> = table.column_names().collect();
        format!("INSERT INTO {} ( {} ) VALUES ", table.name(), names.join(", "))
    }

    /// Builds one `( v1, v2 )` value tuple for a row.
    ///
    /// With `use_default_for_null` set, a value whose encoding is exactly
    /// `null` renders as `default` instead.
    #[must_use]
    pub fn insert_values(&self, row: &Row) -> String {
        let parts: Vec<String> = row
            .values()
            .iter()
            .map(|value| {
                let literal = value.to_sql_literal(&self.dialect);
                if self.options.use_default_for_null && literal == "null" {
                    String::from("default")
                } else {
                    literal
                }
            })
            .collect();
        format!("( {} )", parts.join(", "))
    }

    /// Builds a single-row INSERT statement.
    #[must_use]
    pub fn insert_row(&self, table: &Table, row: &Row) -> String {
        format!("{}{};", self.insert_header(table), self.insert_values(row))
    }

    /// Builds one multi-row INSERT covering every row of the table.
    ///
    /// A table with zero rows yields the empty string, not a bare header.
    #[must_use]
    pub fn insert(&self, table: &Table) -> String {
        if table.is_empty() {
            return String::new();
        }
        let tuples: Vec<String> = table
            .rows()
            .iter()
            .map(|row| self.insert_values(row))
            .collect();
        format!("{}{};", self.insert_header(table), tuples.join(", "))
    }
}
