//! Row-level diff engine.
//!
//! Matches source rows against target rows by primary-key equality,
//! classifies each pairing, and drives the statement builders to emit the
//! DML that transforms the target's persisted state into the source's
//! state: interleaved INSERTs/UPDATEs in source-row order, then one
//! trailing OR-combined DELETE for the target rows the source no longer
//! has.

use tracing::{debug, trace};

use crate::builder::QueryBuilder;
use crate::dialect::Dialect;
use crate::error::{Result, SyncError};
use crate::script::Script;
use crate::table::{Row, Table};
use crate::value::ValueKind;

/// Compares `source` against `target` and builds the reconciliation
/// script.
///
/// Source columns are matched to target columns by name, and source values
/// are re-encoded through the target's inferred column types before
/// comparison, so representation mismatches across heterogeneous sources
/// (booleans against 0/1 integer columns) do not produce spurious updates.
/// Columns named in `excepted` are excluded from change detection: a
/// difference confined to them never triggers an UPDATE.
///
/// Row pairing is first-match-wins in target row order; a source-row key
/// matching several target rows consumes only the first. Statements are
/// emitted against the target table's name. Caller-owned tables are never
/// mutated.
///
/// # Errors
///
/// Fails when the target has no usable primary key, when `excepted` names
/// an unknown column, or when the source lacks one of the target's
/// columns.
pub fn diff_tables<D: Dialect>(
    builder: &QueryBuilder<D>,
    source: &Table,
    target: &Table,
    excepted: &[&str],
) -> Result<Script> {
    let key = target.key_indices()?;
    let schema = target.clone_structure();
    let excepted_indices = resolve_columns(target, excepted)?;
    let mapping = column_mapping(source, target)?;
    let kinds: Vec<Option<ValueKind>> = (0..target.column_count())
        .map(|i| target.column_kind(i))
        .collect();

    // Source rows, reshaped into target column order and re-encoded
    // through the target's column typing.
    let source_rows: Vec<Row> = source
        .rows()
        .iter()
        .map(|row| {
            let values = mapping
                .iter()
                .enumerate()
                .map(|(ti, &si)| {
                    let value = row.values()[si].clone();
                    match kinds[ti] {
                        Some(kind) => value.coerce(kind),
                        None => value,
                    }
                })
                .collect();
            Row::new(values)
        })
        .collect();

    // The remaining set: target rows not yet consumed by a match.
    let mut remaining: Vec<Row> = target.rows().to_vec();
    let mut script = Script::new();
    let mut inserts = 0_usize;
    let mut updates = 0_usize;

    for mut row in source_rows {
        let matched = remaining
            .iter()
            .position(|candidate| key.iter().all(|&i| row.values()[i] == candidate.values()[i]));
        match matched {
            Some(position) => {
                // First match wins; ties broken by target row order.
                let candidate = remaining.remove(position);
                for &i in &excepted_indices {
                    row.set(i, candidate.values()[i].clone());
                }
                if !rows_equal(&row, &candidate, builder.options().trim_before_compare) {
                    trace!(table = schema.name(), "row changed");
                    script.push(builder.update_row(&schema, &row, Some(&candidate))?);
                    updates += 1;
                }
            }
            None => {
                trace!(table = schema.name(), "row missing from target");
                script.push(builder.insert_row(&schema, &row));
                inserts += 1;
            }
        }
    }

    let deletes = remaining.len();
    if !remaining.is_empty() {
        let mut doomed = schema.clone_structure();
        for row in remaining {
            doomed.push_row(row.values().to_vec())?;
        }
        script.push(builder.delete(&doomed)?);
    }

    debug!(
        table = schema.name(),
        inserts,
        updates,
        deletes,
        statements = script.len(),
        "built reconciliation script"
    );
    Ok(script)
}

impl<D: Dialect> QueryBuilder<D> {
    /// Convenience method form of [`diff_tables`].
    ///
    /// # Errors
    ///
    /// See [`diff_tables`].
    pub fn diff(&self, source: &Table, target: &Table, excepted: &[&str]) -> Result<Script> {
        diff_tables(self, source, target, excepted)
    }
}

/// Full-row equality across all columns, trimming text values when `trim`
/// is set.
fn rows_equal(a: &Row, b: &Row, trim: bool) -> bool {
    a.values().len() == b.values().len()
        && a.values()
            .iter()
            .zip(b.values())
            .all(|(x, y)| x.equals_trimmed(y, trim))
}

/// Resolves column names to indices in `table`.
fn resolve_columns(table: &Table, names: &[&str]) -> Result<Vec<usize>> {
    names
        .iter()
        .map(|name| {
            table.column_index(name).ok_or_else(|| SyncError::UnknownColumn {
                table: table.name().to_string(),
                column: (*name).to_string(),
            })
        })
        .collect()
}

/// For each target column, the index of the same-named source column.
fn column_mapping(source: &Table, target: &Table) -> Result<Vec<usize>> {
    target
        .column_names()
        .map(|name| {
            source.column_index(name).ok_or_else(|| SyncError::SchemaMismatch {
                source_table: source.name().to_string(),
                target: target.name().to_string(),
                column: name.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildOptions;
    use crate::dialect::AnsiDialect;
    use crate::value::{SqlValue, ToSqlValue};

    // ============================================================
    // Helpers
    // ============================================================

    fn users_schema(name: &str) -> Table {
        Table::new(name)
            .columns(&["id", "name", "active"])
            .primary_key(&["id"])
    }

    fn user(table: &mut Table, id: i64, name: &str, active: bool) {
        table
            .push_row(vec![
                id.to_sql_value(),
                name.to_sql_value(),
                active.to_sql_value(),
            ])
            .unwrap();
    }

    fn builder() -> QueryBuilder<AnsiDialect> {
        QueryBuilder::new(AnsiDialect::new())
    }

    // ============================================================
    // Round trips
    // ============================================================

    #[test]
    fn source_only_rows_become_inserts() {
        let mut source = users_schema("users");
        user(&mut source, 1, "Alice", true);
        user(&mut source, 2, "Bob", false);
        let target = users_schema("users");

        let script = builder().diff(&source, &target, &[]).unwrap();
        assert_eq!(script.len(), 2);
        assert_eq!(
            script.sql(),
            "INSERT INTO users ( id, name, active ) VALUES ( '1', 'Alice', '1' );\
             INSERT INTO users ( id, name, active ) VALUES ( '2', 'Bob', '0' );"
        );
    }

    #[test]
    fn target_only_rows_become_one_combined_delete() {
        let source = users_schema("users");
        let mut target = users_schema("users");
        user(&mut target, 1, "Alice", true);
        user(&mut target, 2, "Bob", false);

        let script = builder().diff(&source, &target, &[]).unwrap();
        assert_eq!(script.len(), 1);
        assert_eq!(
            script.sql(),
            builder().delete(&target).unwrap(),
        );
    }

    #[test]
    fn identical_tables_produce_empty_script() {
        let mut source = users_schema("users");
        user(&mut source, 1, "Alice", true);
        let target = source.clone();

        let script = builder().diff(&source, &target, &[]).unwrap();
        assert!(script.is_empty());
        assert_eq!(script.sql(), "");
    }

    // ============================================================
    // Classification
    // ============================================================

    #[test]
    fn changed_row_becomes_update_of_changed_columns() {
        let mut source = users_schema("users");
        user(&mut source, 1, "Bob", true);
        let mut target = users_schema("users");
        user(&mut target, 1, "Alice", true);

        let script = builder().diff(&source, &target, &[]).unwrap();
        assert_eq!(script.sql(), "UPDATE users SET name = 'Bob' WHERE id = '1';");
    }

    #[test]
    fn inserts_and_updates_interleave_then_delete_trails() {
        let mut source = users_schema("users");
        user(&mut source, 1, "Alice2", true);
        user(&mut source, 3, "Carol", true);
        let mut target = users_schema("users");
        user(&mut target, 1, "Alice", true);
        user(&mut target, 2, "Bob", false);

        let script = builder().diff(&source, &target, &[]).unwrap();
        assert_eq!(
            script.sql(),
            "UPDATE users SET name = 'Alice2' WHERE id = '1';\
             INSERT INTO users ( id, name, active ) VALUES ( '3', 'Carol', '1' );\
             DELETE FROM users WHERE ( id = '2' );"
        );
    }

    #[test]
    fn statements_use_the_target_table_name() {
        let mut source = users_schema("users_staging");
        user(&mut source, 1, "Alice", true);
        let target = users_schema("users");

        let script = builder().diff(&source, &target, &[]).unwrap();
        assert!(script.sql().starts_with("INSERT INTO users "));
    }

    // ============================================================
    // Excepted columns
    // ============================================================

    #[test]
    fn excepted_columns_never_trigger_updates() {
        let mut source = users_schema("users");
        user(&mut source, 1, "Alice", false);
        let mut target = users_schema("users");
        user(&mut target, 1, "Alice", true);

        let script = builder().diff(&source, &target, &["active"]).unwrap();
        assert!(script.is_empty());
    }

    #[test]
    fn excepted_column_differences_are_dropped_from_updates() {
        let mut source = users_schema("users");
        user(&mut source, 1, "Bob", false);
        let mut target = users_schema("users");
        user(&mut target, 1, "Alice", true);

        let script = builder().diff(&source, &target, &["active"]).unwrap();
        assert_eq!(script.sql(), "UPDATE users SET name = 'Bob' WHERE id = '1';");
    }

    #[test]
    fn unknown_excepted_column_fails() {
        let source = users_schema("users");
        let target = users_schema("users");
        assert!(matches!(
            builder().diff(&source, &target, &["nope"]),
            Err(SyncError::UnknownColumn { column, .. }) if column == "nope"
        ));
    }

    // ============================================================
    // Normalization and comparison options
    // ============================================================

    #[test]
    fn bool_source_matches_zero_one_target_column() {
        // Source stores booleans; target stores the same data as 0/1
        // integers. Normalization makes them compare equal.
        let mut source = users_schema("users");
        user(&mut source, 1, "Alice", true);
        let mut target = users_schema("users");
        target
            .push_row(vec![
                1_i64.to_sql_value(),
                "Alice".to_sql_value(),
                SqlValue::Int(1),
            ])
            .unwrap();

        let script = builder().diff(&source, &target, &[]).unwrap();
        assert!(script.is_empty());
    }

    #[test]
    fn trim_before_compare_ignores_whitespace_only_changes() {
        let mut source = users_schema("users");
        user(&mut source, 1, "Alice  ", true);
        let mut target = users_schema("users");
        user(&mut target, 1, "Alice", true);

        let trimming = builder().with_options(BuildOptions {
            trim_before_compare: true,
            ..BuildOptions::default()
        });
        assert!(trimming.diff(&source, &target, &[]).unwrap().is_empty());

        // Without the option the difference is real.
        let script = builder().diff(&source, &target, &[]).unwrap();
        assert_eq!(
            script.sql(),
            "UPDATE users SET name = 'Alice  ' WHERE id = '1';"
        );
    }

    #[test]
    fn source_column_order_may_differ_from_target() {
        let mut source = Table::new("users")
            .columns(&["name", "active", "id"])
            .primary_key(&["id"]);
        source
            .push_row(vec![
                "Alice".to_sql_value(),
                true.to_sql_value(),
                1_i64.to_sql_value(),
            ])
            .unwrap();
        let mut target = users_schema("users");
        user(&mut target, 1, "Alice", true);

        let script = builder().diff(&source, &target, &[]).unwrap();
        assert!(script.is_empty());
    }

    // ============================================================
    // Tie-breaking and error policy
    // ============================================================

    #[test]
    fn duplicate_key_consumes_first_match_only() {
        let mut source = users_schema("users");
        user(&mut source, 1, "Alice", true);
        let mut target = users_schema("users");
        user(&mut target, 1, "Alice", true);
        user(&mut target, 1, "Shadow", true);

        let script = builder().diff(&source, &target, &[]).unwrap();
        // The first duplicate pairs cleanly; the second survives into
        // the trailing delete block.
        assert_eq!(script.sql(), "DELETE FROM users WHERE ( id = '1' );");
    }

    #[test]
    fn missing_primary_key_fails_fast() {
        let source = Table::new("users").columns(&["id"]);
        let target = Table::new("users").columns(&["id"]);
        assert!(matches!(
            builder().diff(&source, &target, &[]),
            Err(SyncError::MissingPrimaryKey(name)) if name == "users"
        ));
    }

    #[test]
    fn source_missing_target_column_fails() {
        let source = Table::new("users").columns(&["id"]).primary_key(&["id"]);
        let target = users_schema("users");
        assert!(matches!(
            builder().diff(&source, &target, &[]),
            Err(SyncError::SchemaMismatch { column, .. }) if column == "name"
        ));
    }
}
