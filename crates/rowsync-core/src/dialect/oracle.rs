//! Oracle dialect.

use chrono::NaiveDateTime;

use super::Dialect;

/// Oracle dialect: dates render as `TO_DATE` construction expressions
/// with an explicit format mask.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleDialect;

impl OracleDialect {
    /// Creates a new Oracle dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn format_datetime(&self, value: &NaiveDateTime) -> String {
        format!(
            "TO_DATE('{}','YYYYMMDDHH24MISS')",
            value.format("%Y%m%d%H%M%S")
        )
    }
}
