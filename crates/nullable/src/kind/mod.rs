//! Per-kind policy table.
//!
//! Every primitive that can sit inside a [`Nullable`](crate::Nullable)
//! implements [`Kind`]. The trait is sealed: the set of kinds is fixed.

mod boolean;
mod float;
mod int;
mod string;
mod time;

use serde_json::Value;

use crate::error::Error;
use crate::sql::SqlValue;

pub use time::Timestamp;

mod private {
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// Conversion rules for one primitive kind.
///
/// Implementations only deal with present values. The null spellings of
/// each protocol (`null`, empty text, BSON null, SQL `NULL`) are handled
/// once, generically, by the codecs.
pub trait Kind: Sealed + Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Value stored by every null produced by this crate.
    fn zero() -> Self;

    /// Equality of two present values.
    fn same(&self, other: &Self) -> bool;

    /// Decodes a non-null JSON token.
    fn from_json(value: &Value) -> Result<Self, Error>;

    /// Encodes a present value as a JSON token.
    fn to_json(&self) -> Value;

    /// Parses non-empty flat text other than `null`.
    fn parse_text(text: &str) -> Result<Self, Error>;

    /// Canonical flat text of a present value.
    fn format_text(&self) -> String;

    /// Coerces a non-null driver value.
    fn from_sql(value: &SqlValue) -> Result<Self, Error>;

    /// Driver value of a present value.
    fn to_sql(&self) -> SqlValue;

    /// The `is_zero` predicate: "should an omit-empty encoder skip this?".
    ///
    /// The default, used by every kind, ignores the payload, so a present
    /// `0`, `""`, `false` or `0.0` is not zero.
    fn is_zero(_value: &Self, valid: bool) -> bool {
        !valid
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn json_mismatch<T: Kind>(value: &Value) -> Error {
    Error::TypeMismatch {
        kind: T::NAME,
        found: json_type_name(value),
    }
}

pub(crate) fn sql_mismatch<T: Kind>(value: &SqlValue) -> Error {
    Error::Conversion {
        kind: T::NAME,
        from: value.type_name(),
    }
}

pub(crate) fn sql_utf8<T: Kind>(bytes: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(bytes)
        .map_err(|err| Error::parse(T::NAME, &String::from_utf8_lossy(bytes), err))
}
