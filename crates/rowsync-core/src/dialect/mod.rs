//! SQL dialect support.
//!
//! Different databases spell literals and procedure calls slightly
//! differently. This module provides a trait for dialect-specific behavior
//! and one implementation per supported dialect family.

mod generic;
mod mssql;
mod mysql;
mod oracle;

pub use generic::AnsiDialect;
pub use mssql::MsSqlDialect;
pub use mysql::MySqlDialect;
pub use oracle::OracleDialect;

use chrono::NaiveDateTime;

/// How a dialect family spells a stored-procedure invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureSyntax {
    /// `EXEC name p1, p2;`
    Exec,
    /// `CALL name(p1, p2);`
    Call,
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Renders a date/time instant as a SQL literal.
    ///
    /// The default is a quoted ANSI timestamp with millisecond precision.
    fn format_datetime(&self, value: &NaiveDateTime) -> String {
        format!("'{}'", value.format("%Y-%m-%d %H:%M:%S%.3f"))
    }

    /// Escapes a text value before it is embedded in a quoted literal.
    ///
    /// The default is pass-through: text embeds verbatim, including quote
    /// characters. Override this to opt in to escaping when the engine is
    /// fed untrusted input.
    fn escape_text(&self, value: &str) -> String {
        String::from(value)
    }

    /// Returns the dialect's procedure-call syntax, or `None` when the
    /// dialect has no procedure-call form.
    fn procedure_syntax(&self) -> Option<ProcedureSyntax> {
        None
    }
}
