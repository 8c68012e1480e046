//! Structured (JSON) codec.
//!
//! `null` is the only absent spelling. Present values are encoded with the
//! primitive's own literal; see [`Kind::from_json`] for what each kind
//! accepts on the way in.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::Error;
use crate::kind::Kind;
use crate::nullable::Nullable;

impl<T: Kind> Nullable<T> {
    /// Decodes a complete JSON document.
    pub fn from_json(data: &[u8]) -> Result<Self, Error> {
        let value: Value = serde_json::from_slice(data).map_err(Error::Syntax)?;
        Self::from_json_value(&value)
    }

    /// Decodes an already parsed JSON token.
    pub fn from_json_value(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(Self::null()),
            other => T::from_json(other).map(Self::from_value),
        }
    }

    /// Decodes `data` into `self`; on error `self` becomes invalid and zero.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), Error> {
        let decoded = Self::from_json(data);
        self.settle(decoded)
    }

    pub fn to_json_value(&self) -> Value {
        self.ptr().map_or(Value::Null, Kind::to_json)
    }

    /// `null` when invalid, the primitive's JSON literal otherwise.
    pub fn marshal_json(&self) -> Vec<u8> {
        self.to_json_value().to_string().into_bytes()
    }
}

impl<T: Kind> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.ptr() {
            Some(value) => value.to_json().serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Kind> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(&value).map_err(D::Error::custom)
    }
}
