//! SQL scalar values and literal encoding.
//!
//! Every table cell carries a [`SqlValue`]: a closed tagged union covering
//! the scalar shapes the engine understands. The literal encoder renders a
//! value as inline SQL text through a [`Dialect`], and never fails — shapes
//! without a dedicated encoding fall back to quoted stringification.
//!
//! **No escaping is applied by default.** Embedded quote characters pass
//! through verbatim unless the dialect overrides
//! [`Dialect::escape_text`](crate::dialect::Dialect::escape_text).

use chrono::{NaiveDateTime, NaiveTime};

use crate::dialect::Dialect;

/// A typed scalar value held by a table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL.
    Null,
    /// Boolean value, encoded as `'1'` / `'0'`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Date/time instant, encoded per dialect.
    DateTime(NaiveDateTime),
    /// Time-of-day interval.
    Time(NaiveTime),
    /// Any other scalar, carried as its default text representation.
    Other(String),
}

/// Discriminant-only mirror of [`SqlValue`], used for column typing.
///
/// NULL has no kind: type inference skips null cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Boolean column.
    Bool,
    /// Integer column.
    Int,
    /// Floating-point column.
    Float,
    /// Text column.
    Text,
    /// Date/time column.
    DateTime,
    /// Time-of-day column.
    Time,
    /// Uninterpreted scalar column.
    Other,
}

impl SqlValue {
    /// Returns the value's kind, or `None` for NULL.
    #[must_use]
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(ValueKind::Bool),
            Self::Int(_) => Some(ValueKind::Int),
            Self::Float(_) => Some(ValueKind::Float),
            Self::Text(_) => Some(ValueKind::Text),
            Self::DateTime(_) => Some(ValueKind::DateTime),
            Self::Time(_) => Some(ValueKind::Time),
            Self::Other(_) => Some(ValueKind::Other),
        }
    }

    /// Returns `true` for NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the SQL literal text for inline use.
    ///
    /// NULL renders unquoted as `null`; booleans as `'1'` / `'0'`; instants
    /// and intervals through the dialect's date formatting; everything else
    /// as the quoted default text representation. Numeric formatting is
    /// locale-invariant.
    #[must_use]
    pub fn to_sql_literal(&self, dialect: &impl Dialect) -> String {
        match self {
            Self::Null => String::from("null"),
            Self::Bool(b) => String::from(if *b { "'1'" } else { "'0'" }),
            Self::Int(n) => format!("'{n}'"),
            Self::Float(f) => format!("'{f}'"),
            Self::Text(s) | Self::Other(s) => format!("'{}'", dialect.escape_text(s)),
            Self::DateTime(dt) => dialect.format_datetime(dt),
            Self::Time(t) => format!("'{}'", t.format("%H:%M:%S")),
        }
    }

    /// Re-encodes the value into a column's inferred kind.
    ///
    /// Covers the representation mismatches that arise between heterogeneous
    /// sources (booleans stored as 0/1 integers, integers widening to float,
    /// scalars landing in text columns). A value with no sensible conversion
    /// passes through unchanged; NULL always stays NULL.
    #[must_use]
    pub fn coerce(self, kind: ValueKind) -> Self {
        if self.is_null() || self.kind() == Some(kind) {
            return self;
        }
        match (self, kind) {
            (Self::Bool(b), ValueKind::Int) => Self::Int(i64::from(b)),
            (Self::Int(0), ValueKind::Bool) => Self::Bool(false),
            (Self::Int(1), ValueKind::Bool) => Self::Bool(true),
            #[allow(clippy::cast_precision_loss)]
            (Self::Int(i), ValueKind::Float) => Self::Float(i as f64),
            #[allow(clippy::cast_possible_truncation)]
            (Self::Float(f), ValueKind::Int) if f.fract() == 0.0 => Self::Int(f as i64),
            (Self::Bool(b), ValueKind::Text) => Self::Text(String::from(if b { "1" } else { "0" })),
            (Self::Int(i), ValueKind::Text) => Self::Text(i.to_string()),
            (Self::Float(f), ValueKind::Text) => Self::Text(f.to_string()),
            (value, _) => value,
        }
    }

    /// Equality with optional whitespace trimming of text values.
    ///
    /// Trimming affects comparison only, never emitted literals.
    pub(crate) fn equals_trimmed(&self, other: &Self, trim: bool) -> bool {
        if trim {
            if let (Self::Text(a), Self::Text(b)) = (self, other) {
                return a.trim() == b.trim();
            }
        }
        self == other
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a [`SqlValue`].
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

impl ToSqlValue for i32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for i16 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for u32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(f64::from(self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl ToSqlValue for NaiveDateTime {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::DateTime(self)
    }
}

impl ToSqlValue for NaiveTime {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Time(self)
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}
