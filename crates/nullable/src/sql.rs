//! Database-driver bridge: scanning column values into nullable scalars
//! and handing them back as driver values.

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::Error;
use crate::kind::Kind;
use crate::nullable::Nullable;

/// A column value as delivered by a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int64(i64),
    Float64(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Text(String),
    Time(DateTime<FixedOffset>),
}

impl SqlValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Int64(_) => "int64",
            SqlValue::Float64(_) => "float64",
            SqlValue::Bool(_) => "bool",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Text(_) => "text",
            SqlValue::Time(_) => "time",
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int64(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int64(i64::from(v))
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float64(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(v: &[u8]) -> Self {
        SqlValue::Bytes(v.to_vec())
    }
}

impl From<DateTime<FixedOffset>> for SqlValue {
    fn from(v: DateTime<FixedOffset>) -> Self {
        SqlValue::Time(v)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        SqlValue::Time(v.fixed_offset())
    }
}

impl<V: Into<SqlValue>> From<Option<V>> for SqlValue {
    fn from(v: Option<V>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

impl<T: Kind> Nullable<T> {
    /// Ingests a driver value.
    ///
    /// `Null` yields an invalid scalar. Other values are coerced with the
    /// kind's driver rules; on failure the receiver is left invalid and zero.
    pub fn scan(&mut self, src: impl Into<SqlValue>) -> Result<(), Error> {
        let src = src.into();
        if let SqlValue::Null = src {
            *self = Self::null();
            return Ok(());
        }
        let decoded = T::from_sql(&src).map(Self::from_value);
        self.settle(decoded)
    }

    /// Driver value: `Null` when invalid.
    pub fn sql_value(&self) -> SqlValue {
        match self.ptr() {
            Some(value) => value.to_sql(),
            None => SqlValue::Null,
        }
    }
}

impl<T: Kind> From<Nullable<T>> for SqlValue {
    fn from(n: Nullable<T>) -> Self {
        n.sql_value()
    }
}
