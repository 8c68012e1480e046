//! BSON document decoder.
//!
//! BSON is a little-endian binary format.

use super::error::BsonError;
use super::values::{BsonBinary, BsonValue};

/// BSON document decoder over a borrowed byte slice.
pub struct BsonDecoder<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> BsonDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Decodes a top-level BSON document, returning an error on malformed input.
    pub fn decode(data: &'a [u8]) -> Result<Vec<(String, BsonValue)>, BsonError> {
        Self::new(data).read_document()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], BsonError> {
        let end = self.x.checked_add(n).ok_or(BsonError::UnexpectedEof)?;
        let bytes = self.data.get(self.x..end).ok_or(BsonError::UnexpectedEof)?;
        self.x = end;
        Ok(bytes)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], BsonError> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8, BsonError> {
        Ok(self.take(1)?[0])
    }

    fn i32_le(&mut self) -> Result<i32, BsonError> {
        Ok(i32::from_le_bytes(self.array()?))
    }

    fn i64_le(&mut self) -> Result<i64, BsonError> {
        Ok(i64::from_le_bytes(self.array()?))
    }

    fn f64_le(&mut self) -> Result<f64, BsonError> {
        Ok(f64::from_le_bytes(self.array()?))
    }

    fn utf8(&mut self, n: usize) -> Result<String, BsonError> {
        let bytes = self.take(n)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| BsonError::InvalidUtf8)
    }

    fn read_document(&mut self) -> Result<Vec<(String, BsonValue)>, BsonError> {
        let start = self.x;
        let declared = self.i32_le()?;
        // 4-byte size + terminating null byte
        if declared < 5 {
            return Err(BsonError::InvalidLength(declared));
        }
        let end = start + declared as usize;
        if end > self.data.len() {
            return Err(BsonError::UnexpectedEof);
        }

        let mut fields = Vec::new();
        loop {
            if self.x >= end {
                return Err(BsonError::UnexpectedEof);
            }
            let element_type = self.u8()?;
            if element_type == 0 {
                break;
            }
            let key = self.read_cstring()?;
            let value = self.read_element_value(element_type)?;
            fields.push((key, value));
        }
        if self.x != end {
            return Err(BsonError::InvalidLength(declared));
        }
        Ok(fields)
    }

    fn read_cstring(&mut self) -> Result<String, BsonError> {
        let rest = &self.data[self.x..];
        let len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(BsonError::UnexpectedEof)?;
        let s = self.utf8(len)?;
        self.x += 1; // null terminator
        Ok(s)
    }

    fn read_string(&mut self) -> Result<String, BsonError> {
        let length = self.i32_le()?;
        if length < 1 {
            return Err(BsonError::InvalidLength(length));
        }
        let s = self.utf8(length as usize - 1)?;
        if self.u8()? != 0 {
            return Err(BsonError::InvalidLength(length));
        }
        Ok(s)
    }

    fn read_element_value(&mut self, typ: u8) -> Result<BsonValue, BsonError> {
        match typ {
            0x01 => Ok(BsonValue::Float(self.f64_le()?)),
            0x02 => Ok(BsonValue::Str(self.read_string()?)),
            0x03 => Ok(BsonValue::Document(self.read_document()?)),
            0x04 => Ok(BsonValue::Array(self.read_array()?)),
            0x05 => self.read_binary(),
            0x06 => Ok(BsonValue::Undefined),
            0x08 => Ok(BsonValue::Boolean(self.u8()? == 1)),
            0x09 => Ok(BsonValue::DateTime(self.i64_le()?)),
            0x0a => Ok(BsonValue::Null),
            0x10 => Ok(BsonValue::Int32(self.i32_le()?)),
            0x12 => Ok(BsonValue::Int64(self.i64_le()?)),
            t => Err(BsonError::UnsupportedType(t)),
        }
    }

    fn read_array(&mut self) -> Result<Vec<BsonValue>, BsonError> {
        let fields = self.read_document()?;
        let mut indexed: Vec<(usize, BsonValue)> = fields
            .into_iter()
            .map(|(k, v)| (k.parse::<usize>().unwrap_or(usize::MAX), v))
            .collect();
        indexed.sort_by_key(|(i, _)| *i);
        Ok(indexed.into_iter().map(|(_, v)| v).collect())
    }

    fn read_binary(&mut self) -> Result<BsonValue, BsonError> {
        let length = self.i32_le()?;
        if length < 0 {
            return Err(BsonError::InvalidLength(length));
        }
        let subtype = self.u8()?;
        let data = self.take(length as usize)?.to_vec();
        Ok(BsonValue::Binary(BsonBinary { subtype, data }))
    }
}
