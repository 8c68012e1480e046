//! Error type for BSON encoding, decoding and registry dispatch.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BsonError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid BSON document length: {0}")]
    InvalidLength(i32),
    #[error("unsupported BSON element type: 0x{0:02x}")]
    UnsupportedType(u8),
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("no encoder registered for {0}")]
    NoEncoder(&'static str),
    #[error("no decoder registered for {0}")]
    NoDecoder(&'static str),
    #[error("cannot decode BSON {found} into {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("BSON {found} value {value} does not fit into {expected}")]
    OutOfRange {
        expected: &'static str,
        found: &'static str,
        value: String,
    },
    #[error("field {0:?} not present in document")]
    MissingField(String),
}
