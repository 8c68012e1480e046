use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde_json::Value;

use super::{json_mismatch, sql_mismatch, Kind, Sealed};
use crate::error::Error;
use crate::nullable::Nullable;
use crate::sql::SqlValue;

/// Primitive of the timestamp kind: an instant plus the UTC offset it was
/// written with.
pub type Timestamp = DateTime<FixedOffset>;

impl Sealed for Timestamp {}

impl Kind for Timestamp {
    const NAME: &'static str = "timestamp";

    /// The Unix epoch in UTC.
    fn zero() -> Self {
        DateTime::<Utc>::default().fixed_offset()
    }

    /// Instants are compared; offsets are ignored.
    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        match value {
            Value::String(s) => Self::parse_text(s),
            other => Err(json_mismatch::<Self>(other)),
        }
    }

    fn to_json(&self) -> Value {
        Value::String(self.format_text())
    }

    fn parse_text(text: &str) -> Result<Self, Error> {
        DateTime::parse_from_rfc3339(text).map_err(|err| Error::parse(Self::NAME, text, err))
    }

    /// RFC 3339, fractional seconds only when present, `Z` for UTC.
    fn format_text(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn from_sql(value: &SqlValue) -> Result<Self, Error> {
        match value {
            SqlValue::Time(t) => Ok(*t),
            other => Err(sql_mismatch::<Self>(other)),
        }
    }

    fn to_sql(&self) -> SqlValue {
        SqlValue::Time(*self)
    }
}

impl Nullable<Timestamp> {
    /// Like [`equal`](Nullable::equal), but two present timestamps must also
    /// carry the same UTC offset.
    pub fn exact_equal(&self, other: &Self) -> bool {
        match (self.valid, other.valid) {
            (false, false) => true,
            (true, true) => {
                self.value == other.value && self.value.offset() == other.value.offset()
            }
            _ => false,
        }
    }
}
