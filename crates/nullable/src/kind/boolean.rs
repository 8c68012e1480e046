use serde_json::Value;

use super::{json_mismatch, sql_mismatch, sql_utf8, Kind, Sealed};
use crate::error::Error;
use crate::sql::SqlValue;

impl Sealed for bool {}

impl Kind for bool {
    const NAME: &'static str = "bool";

    fn zero() -> Self {
        false
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(json_mismatch::<Self>(other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        match text {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(Error::parse(Self::NAME, text, "expected true or false")),
        }
    }

    fn format_text(&self) -> String {
        self.to_string()
    }

    fn from_sql(value: &SqlValue) -> Result<Self, Error> {
        match value {
            SqlValue::Bool(b) => Ok(*b),
            SqlValue::Int64(1) => Ok(true),
            SqlValue::Int64(0) => Ok(false),
            SqlValue::Int64(i) => Err(Error::parse(Self::NAME, &i.to_string(), "expected 0 or 1")),
            SqlValue::Text(s) => driver_bool(s),
            SqlValue::Bytes(b) => driver_bool(sql_utf8::<Self>(b)?),
            other => Err(sql_mismatch::<Self>(other)),
        }
    }

    fn to_sql(&self) -> SqlValue {
        SqlValue::Bool(*self)
    }
}

/// The boolean spellings database drivers hand out for text columns.
fn driver_bool(text: &str) -> Result<bool, Error> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Error::parse(bool::NAME, text, "not a boolean")),
    }
}
