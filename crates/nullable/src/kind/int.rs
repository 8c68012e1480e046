use std::num::IntErrorKind;

use serde_json::{Number, Value};

use super::{json_mismatch, sql_mismatch, sql_utf8, Kind, Sealed};
use crate::error::Error;
use crate::sql::SqlValue;

impl Sealed for i64 {}

impl Kind for i64 {
    const NAME: &'static str = "int64";

    fn zero() -> Self {
        0
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    /// Numbers must be integral and fit `i64`; strings are parsed.
    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Number(n) => from_number(n),
            Value::String(s) => Self::parse_text(s),
            other => Err(json_mismatch::<Self>(other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        text.parse::<i64>()
            .map_err(|err| Error::parse(Self::NAME, text, err))
    }

    fn format_text(&self) -> String {
        self.to_string()
    }

    fn from_sql(value: &SqlValue) -> Result<Self, Error> {
        match value {
            SqlValue::Int64(i) => Ok(*i),
            SqlValue::Float64(f) => Self::parse_text(&f.to_string()),
            SqlValue::Text(s) => Self::parse_text(s),
            SqlValue::Bytes(b) => Self::parse_text(sql_utf8::<Self>(b)?),
            other => Err(sql_mismatch::<Self>(other)),
        }
    }

    fn to_sql(&self) -> SqlValue {
        SqlValue::Int64(*self)
    }
}

/// Integrality and range are judged on the literal as written, so `-0` is
/// an integer and `-9223372036854775809` overflows rather than rounding.
fn from_number(n: &Number) -> Result<i64, Error> {
    let literal = n.to_string();
    if literal.contains(['.', 'e', 'E']) {
        return Err(Error::Precision {
            kind: i64::NAME,
            literal,
        });
    }
    literal.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::Range {
            kind: i64::NAME,
            literal: literal.clone(),
        },
        _ => Error::parse(i64::NAME, &literal, err),
    })
}
