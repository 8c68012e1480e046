//! Nullable scalar types.
//!
//! [`Nullable<T>`] pairs a primitive with a validity flag so that "no value"
//! (SQL `NULL`, JSON `null`, BSON null) stays distinct from the primitive's
//! zero value. The kinds are fixed: [`NullInt`], [`NullString`],
//! [`NullBool`], [`NullFloat`] and [`NullTime`].
//!
//! Each kind speaks three external protocols:
//!
//! - JSON, through [`Nullable::unmarshal_json`] / [`Nullable::marshal_json`]
//!   and the serde impls;
//! - flat text, through [`Nullable::unmarshal_text`] /
//!   [`Nullable::marshal_text`], `FromStr` and `Display`;
//! - BSON, through [`register_null_types`] (feature `bson`, on by default).
//!
//! Database drivers feed values in with [`Nullable::scan`].
//!
//! ```
//! use nullable::{NullInt, NullString};
//!
//! let n: NullInt = serde_json::from_str("12345").unwrap();
//! assert_eq!(n.ptr(), Some(&12345));
//!
//! let s = NullString::from_ptr(None);
//! assert_eq!(serde_json::to_string(&s).unwrap(), "null");
//! assert!(s.is_zero());
//! assert!(!NullString::from_value(String::new()).is_zero());
//! ```

#[cfg(feature = "bson")]
mod bson;
mod error;
mod json;
pub mod kind;
mod nullable;
pub mod sql;
mod text;

#[cfg(feature = "bson")]
pub use bson::register_null_types;
pub use error::Error;
pub use kind::{Kind, Timestamp};
pub use nullable::Nullable;
pub use sql::SqlValue;

/// Nullable `i64`.
pub type NullInt = Nullable<i64>;
/// Nullable `String`.
pub type NullString = Nullable<String>;
/// Nullable `bool`.
pub type NullBool = Nullable<bool>;
/// Nullable `f64`.
pub type NullFloat = Nullable<f64>;
/// Nullable timestamp with its UTC offset.
pub type NullTime = Nullable<Timestamp>;
