//! Stored-procedure call formatting.

use super::QueryBuilder;
use crate::dialect::{Dialect, ProcedureSyntax};
use crate::error::{Result, SyncError};
use crate::value::SqlValue;

impl<D: Dialect> QueryBuilder<D> {
    /// Builds a stored-procedure invocation in the dialect's family syntax.
    ///
    /// Parameters render through the literal encoder. A zero-parameter call
    /// omits the parameter list entirely, separators included.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::UnsupportedDialect`] when the dialect has no
    /// procedure-call syntax. Callers that want the legacy "silently emit
    /// nothing" behavior can use `unwrap_or_default()`.
    pub fn procedure_call(&self, name: &str, parameters: &[SqlValue]) -> Result<String> {
        let syntax = self
            .dialect
            .procedure_syntax()
            .ok_or(SyncError::UnsupportedDialect(self.dialect.name()))?;
        let rendered: Vec<String> = parameters
            .iter()
            .map(|p| p.to_sql_literal(&self.dialect))
            .collect();
        let sql = match syntax {
            ProcedureSyntax::Exec => {
                if rendered.is_empty() {
                    format!("EXEC {name};")
                } else {
                    format!("EXEC {name} {};", rendered.join(", "))
                }
            }
            ProcedureSyntax::Call => {
                if rendered.is_empty() {
                    format!("CALL {name};")
                } else {
                    format!("CALL {name}({});", rendered.join(", "))
                }
            }
        };
        Ok(sql)
    }
}
