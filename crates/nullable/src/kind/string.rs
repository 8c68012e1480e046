use chrono::SecondsFormat;
use serde_json::Value;

use super::{json_mismatch, sql_mismatch, sql_utf8, Kind, Sealed};
use crate::error::Error;
use crate::sql::SqlValue;

impl Sealed for String {}

impl Kind for String {
    const NAME: &'static str = "string";

    fn zero() -> Self {
        String::new()
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(json_mismatch::<Self>(other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        Ok(text.to_string())
    }

    fn format_text(&self) -> String {
        self.clone()
    }

    fn from_sql(value: &SqlValue) -> Result<Self, Error> {
        Ok(match value {
            SqlValue::Text(s) => s.clone(),
            SqlValue::Bytes(b) => sql_utf8::<Self>(b)?.to_string(),
            SqlValue::Int64(i) => i.to_string(),
            SqlValue::Float64(f) => f.to_string(),
            SqlValue::Bool(b) => b.to_string(),
            SqlValue::Time(t) => t.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            SqlValue::Null => return Err(sql_mismatch::<Self>(value)),
        })
    }

    fn to_sql(&self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}
