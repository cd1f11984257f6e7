//! Error types for the reconciliation engine.

use thiserror::Error;

/// Errors produced while building statements or diffing tables.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A key-scoped operation was requested on a table without a primary key.
    #[error("table '{0}' has no primary key")]
    MissingPrimaryKey(String),

    /// A referenced column does not exist in the table.
    #[error("unknown column '{column}' in table '{table}'")]
    UnknownColumn {
        /// Table that was searched.
        table: String,
        /// The missing column name.
        column: String,
    },

    /// A row's value count does not match the table's column count.
    #[error("row has {got} values but table '{table}' has {expected} columns")]
    ArityMismatch {
        /// Table the row was pushed into.
        table: String,
        /// The table's column count.
        expected: usize,
        /// The row's value count.
        got: usize,
    },

    /// Source and target tables do not share the required column set.
    #[error("source table '{source_table}' is missing column '{column}' required by target '{target}'")]
    SchemaMismatch {
        /// Source table name.
        source_table: String,
        /// Target table name.
        target: String,
        /// The column missing from the source.
        column: String,
    },

    /// The dialect has no syntax for the requested statement.
    #[error("dialect '{0}' has no procedure-call syntax")]
    UnsupportedDialect(&'static str),
}

/// Result type alias for reconciliation operations.
pub type Result<T> = std::result::Result<T, SyncError>;
