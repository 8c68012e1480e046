use serde_json::Value;

use super::{json_mismatch, sql_mismatch, sql_utf8, Kind, Sealed};
use crate::error::Error;
use crate::sql::SqlValue;

impl Sealed for f64 {}

impl Kind for f64 {
    const NAME: &'static str = "float64";

    fn zero() -> Self {
        0.0
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| Error::Range {
                kind: Self::NAME,
                literal: n.to_string(),
            }),
            Value::String(s) => Self::parse_text(s),
            other => Err(json_mismatch::<Self>(other)),
        }
    }

    /// Non-finite values have no JSON spelling and encode as `null`.
    fn to_json(&self) -> Value {
        Value::from(*self)
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        text.parse::<f64>()
            .map_err(|err| Error::parse(Self::NAME, text, err))
    }

    fn format_text(&self) -> String {
        self.to_string()
    }

    fn from_sql(value: &SqlValue) -> Result<Self, Error> {
        match value {
            SqlValue::Float64(f) => Ok(*f),
            SqlValue::Int64(i) => Ok(*i as f64),
            SqlValue::Text(s) => Self::parse_text(s),
            SqlValue::Bytes(b) => Self::parse_text(sql_utf8::<Self>(b)?),
            other => Err(sql_mismatch::<Self>(other)),
        }
    }

    fn to_sql(&self) -> SqlValue {
        SqlValue::Float64(*self)
    }
}
