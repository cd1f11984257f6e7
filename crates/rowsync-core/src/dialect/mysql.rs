//! MySQL dialect.

use super::{Dialect, ProcedureSyntax};

/// MySQL dialect: ANSI date literals, `CALL` procedure calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn procedure_syntax(&self) -> Option<ProcedureSyntax> {
        Some(ProcedureSyntax::Call)
    }
}
