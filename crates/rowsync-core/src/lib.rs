//! # rowsync-core
//!
//! A table-diff-to-DML synthesizer: given two in-memory snapshots of the
//! same logical table, compute the minimal INSERT/UPDATE/DELETE script that
//! transforms the target's persisted state into the source's state.
//!
//! This crate provides:
//! - A dynamic table model (ordered columns, ordered primary key, typed
//!   scalar cells inferred from values)
//! - Dialect-aware literal encoding (ANSI and Oracle date forms, MSSQL and
//!   MySQL procedure-call families)
//! - Stateless statement formatters for INSERT, UPDATE, DELETE, and
//!   procedure calls
//! - A primary-key row matcher that classifies rows as unchanged, changed,
//!   insert-only, or delete-only, with deterministic first-match
//!   tie-breaking
//!
//! ## Reconciling two snapshots
//!
//! ```rust
//! use rowsync_core::builder::QueryBuilder;
//! use rowsync_core::dialect::AnsiDialect;
//! use rowsync_core::table::Table;
//! use rowsync_core::value::ToSqlValue;
//!
//! # fn main() -> rowsync_core::Result<()> {
//! let mut source = Table::new("users")
//!     .columns(&["id", "name"])
//!     .primary_key(&["id"]);
//! source.push_row(vec![1_i64.to_sql_value(), "Alice".to_sql_value()])?;
//! let target = source.clone_structure();
//!
//! let builder = QueryBuilder::new(AnsiDialect::new());
//! let script = builder.diff(&source, &target, &[])?;
//! assert_eq!(
//!     script.sql(),
//!     "INSERT INTO users ( id, name ) VALUES ( '1', 'Alice' );"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## No SQL-injection protection
//!
//! Output is raw literal-embedded SQL by design: text values embed verbatim,
//! quotes included. Do **not** feed this engine untrusted input unless you
//! override [`dialect::Dialect::escape_text`] or add parameterization in the
//! execution layer. The engine itself never executes SQL.

pub mod builder;
pub mod dialect;
pub mod diff;
pub mod error;
pub mod script;
pub mod table;
pub mod value;

pub use builder::{BuildOptions, QueryBuilder};
pub use dialect::{AnsiDialect, Dialect, MsSqlDialect, MySqlDialect, OracleDialect};
pub use diff::diff_tables;
pub use error::{Result, SyncError};
pub use script::Script;
pub use table::{Column, Row, Table};
pub use value::{SqlValue, ToSqlValue, ValueKind};
