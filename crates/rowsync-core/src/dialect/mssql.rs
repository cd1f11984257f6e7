//! Microsoft SQL Server dialect.

use super::{Dialect, ProcedureSyntax};

/// SQL Server dialect: ANSI date literals, `EXEC` procedure calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct MsSqlDialect;

impl MsSqlDialect {
    /// Creates a new SQL Server dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MsSqlDialect {
    fn name(&self) -> &'static str {
        "mssql"
    }

    fn procedure_syntax(&self) -> Option<ProcedureSyntax> {
        Some(ProcedureSyntax::Exec)
    }
}
