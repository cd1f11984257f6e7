//! SQL statement formatting.
//!
//! [`QueryBuilder`] is a stateless formatter over a dialect and a set of
//! [`BuildOptions`]: one method per statement shape, composing the literal
//! encoder per column value. Statements come back as plain `;`-terminated
//! text with no trailing newline.
//!
//! Emitted SQL embeds literals directly — see the crate-level notes on the
//! absence of escaping.

mod delete;
mod insert;
mod procedure;
mod update;

use crate::dialect::Dialect;
use crate::error::Result;
use crate::table::{Row, Table};

/// Formatting flags read by the statement builders.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Render `default` instead of `null` in INSERT value tuples.
    pub use_default_for_null: bool,
    /// Trim text values before equality comparison while diffing.
    /// Affects comparison only, never emitted literals.
    pub trim_before_compare: bool,
}

/// Stateless statement formatter for one dialect and option set.
#[derive(Debug, Clone)]
pub struct QueryBuilder<D: Dialect> {
    dialect: D,
    options: BuildOptions,
}

impl<D: Dialect> QueryBuilder<D> {
    /// Creates a builder with default options.
    #[must_use]
    pub fn new(dialect: D) -> Self {
        Self {
            dialect,
            options: BuildOptions::default(),
        }
    }

    /// Replaces the formatting options.
    #[must_use]
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the builder's dialect.
    #[must_use]
    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Returns the builder's options.
    #[must_use]
    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Builds the `pk1 = v1 AND pk2 = v2` equality predicate for a row,
    /// in primary-key column order.
    ///
    /// # Errors
    ///
    /// Fails when the table has no usable primary key.
    pub fn key_predicate(&self, table: &Table, row: &Row) -> Result<String> {
        let indices = table.key_indices()?;
        let parts: Vec<String> = indices
            .iter()
            .map(|&i| {
                format!(
                    "{} = {}",
                    table.column(i).name(),
                    row.values()[i].to_sql_literal(&self.dialect)
                )
            })
            .collect();
        Ok(parts.join(" AND "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::AnsiDialect;
    use crate::value::ToSqlValue;

    #[test]
    fn test_key_predicate_composite_key_order() {
        let mut table = Table::new("events")
            .columns(&["day", "seq", "payload"])
            .primary_key(&["seq", "day"]);
        table
            .push_row(vec![
                "2024-01-15".to_sql_value(),
                3_i64.to_sql_value(),
                "x".to_sql_value(),
            ])
            .unwrap();

        let builder = QueryBuilder::new(AnsiDialect::new());
        let predicate = builder.key_predicate(&table, &table.rows()[0]).unwrap();
        assert_eq!(predicate, "seq = '3' AND day = '2024-01-15'");
    }

    #[test]
    fn test_key_predicate_requires_key() {
        let mut table = Table::new("t").columns(&["a"]);
        table.push_row(vec![1_i64.to_sql_value()]).unwrap();
        let builder = QueryBuilder::new(AnsiDialect::new());
        assert!(builder.key_predicate(&table, &table.rows()[0]).is_err());
    }
}
