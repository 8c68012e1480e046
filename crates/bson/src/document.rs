//! Typed document helpers that route every field through a [`Registry`].

use super::decoder::BsonDecoder;
use super::encoder::BsonEncoder;
use super::error::BsonError;
use super::registry::Registry;
use super::values::BsonValue;

/// Builds a top-level document field by field.
#[derive(Debug)]
pub struct DocumentWriter<'r> {
    registry: &'r Registry,
    fields: Vec<(String, BsonValue)>,
}

impl<'r> DocumentWriter<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            fields: Vec::new(),
        }
    }

    /// Appends `value` encoded with the handler registered for `T`.
    pub fn append<T: 'static>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<&mut Self, BsonError> {
        let encoded = self.registry.encode_value(value)?;
        Ok(self.append_value(key, encoded))
    }

    /// Appends an already encoded value.
    pub fn append_value(&mut self, key: impl Into<String>, value: BsonValue) -> &mut Self {
        self.fields.push((key.into(), value));
        self
    }

    pub fn finish(self) -> Vec<u8> {
        BsonEncoder::new().encode(&self.fields)
    }
}

/// A parsed top-level document whose fields decode through a [`Registry`].
#[derive(Debug)]
pub struct DocumentReader<'r> {
    registry: &'r Registry,
    fields: Vec<(String, BsonValue)>,
}

impl<'r> DocumentReader<'r> {
    pub fn parse(registry: &'r Registry, bytes: &[u8]) -> Result<Self, BsonError> {
        Ok(Self {
            registry,
            fields: BsonDecoder::decode(bytes)?,
        })
    }

    /// Raw value of the first field named `key`.
    pub fn raw(&self, key: &str) -> Option<&BsonValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Decodes the first field named `key` with the handler registered for `T`.
    pub fn get<T: 'static>(&self, key: &str) -> Result<T, BsonError> {
        let value = self
            .raw(key)
            .ok_or_else(|| BsonError::MissingField(key.to_string()))?;
        self.registry.decode_value(value)
    }

    pub fn fields(&self) -> &[(String, BsonValue)] {
        &self.fields
    }
}
