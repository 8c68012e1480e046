//! BSON value model.

/// BSON binary data (subtype + raw bytes).
#[derive(Debug, Clone, PartialEq)]
pub struct BsonBinary {
    pub subtype: u8,
    pub data: Vec<u8>,
}

/// A BSON value that can appear as a document field value.
///
/// Only the element types a scalar-oriented document needs are modelled;
/// anything else is rejected by the decoder as
/// [`BsonError::UnsupportedType`](crate::BsonError::UnsupportedType).
#[derive(Debug, Clone, PartialEq)]
pub enum BsonValue {
    /// BSON double (0x01)
    Float(f64),
    /// BSON UTF-8 string (0x02)
    Str(String),
    /// Embedded BSON document (0x03)
    Document(Vec<(String, BsonValue)>),
    /// BSON array (0x04)
    Array(Vec<BsonValue>),
    /// BSON binary data (0x05)
    Binary(BsonBinary),
    /// BSON undefined (deprecated) (0x06)
    Undefined,
    /// BSON boolean (0x08)
    Boolean(bool),
    /// BSON UTC datetime, milliseconds since the Unix epoch (0x09)
    DateTime(i64),
    /// BSON null (0x0a)
    Null,
    /// BSON int32 (0x10)
    Int32(i32),
    /// BSON int64 (0x12)
    Int64(i64),
}

impl BsonValue {
    /// Element type byte written in front of the field name.
    pub fn element_type(&self) -> u8 {
        match self {
            BsonValue::Float(_) => 0x01,
            BsonValue::Str(_) => 0x02,
            BsonValue::Document(_) => 0x03,
            BsonValue::Array(_) => 0x04,
            BsonValue::Binary(_) => 0x05,
            BsonValue::Undefined => 0x06,
            BsonValue::Boolean(_) => 0x08,
            BsonValue::DateTime(_) => 0x09,
            BsonValue::Null => 0x0a,
            BsonValue::Int32(_) => 0x10,
            BsonValue::Int64(_) => 0x12,
        }
    }

    /// Human readable element type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            BsonValue::Float(_) => "double",
            BsonValue::Str(_) => "string",
            BsonValue::Document(_) => "embedded document",
            BsonValue::Array(_) => "array",
            BsonValue::Binary(_) => "binary",
            BsonValue::Undefined => "undefined",
            BsonValue::Boolean(_) => "boolean",
            BsonValue::DateTime(_) => "UTC datetime",
            BsonValue::Null => "null",
            BsonValue::Int32(_) => "32-bit integer",
            BsonValue::Int64(_) => "64-bit integer",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, BsonValue::Null)
    }
}
