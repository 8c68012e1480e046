//! BSON document encoder.
//!
//! BSON is a little-endian binary format. All multi-byte integers are
//! written in little-endian byte order.

use super::values::BsonValue;

/// Encodes a BSON document (a slice of key-value pairs) to bytes.
///
/// The top-level must always be a document (list of key-value pairs). BSON
/// does not have a scalar top-level encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct BsonEncoder;

impl BsonEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encodes a BSON document to bytes.
    pub fn encode(&self, fields: &[(String, BsonValue)]) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_document(&mut out, fields.iter().map(|(k, v)| (k.as_str(), v)));
        out
    }

    fn write_document<'a, I>(&self, buf: &mut Vec<u8>, fields: I)
    where
        I: Iterator<Item = (&'a str, &'a BsonValue)>,
    {
        let size_at = buf.len();
        buf.extend_from_slice(&[0u8; 4]);
        for (key, value) in fields {
            self.write_key_value(buf, key, value);
        }
        buf.push(0);
        let size = (buf.len() - size_at) as i32;
        buf[size_at..size_at + 4].copy_from_slice(&size.to_le_bytes());
    }

    fn write_key_value(&self, buf: &mut Vec<u8>, key: &str, value: &BsonValue) {
        buf.push(value.element_type());
        self.write_cstring(buf, key);
        match value {
            BsonValue::Float(f) => buf.extend_from_slice(&f.to_le_bytes()),
            BsonValue::Str(s) => self.write_string(buf, s),
            BsonValue::Document(fields) => {
                self.write_document(buf, fields.iter().map(|(k, v)| (k.as_str(), v)))
            }
            BsonValue::Array(items) => {
                // Arrays are documents keyed "0", "1", ...
                let keys: Vec<String> = (0..items.len()).map(|i| i.to_string()).collect();
                self.write_document(buf, keys.iter().map(String::as_str).zip(items.iter()));
            }
            BsonValue::Binary(bin) => {
                buf.extend_from_slice(&(bin.data.len() as i32).to_le_bytes());
                buf.push(bin.subtype);
                buf.extend_from_slice(&bin.data);
            }
            BsonValue::Boolean(b) => buf.push(u8::from(*b)),
            BsonValue::DateTime(ms) => buf.extend_from_slice(&ms.to_le_bytes()),
            BsonValue::Int32(i) => buf.extend_from_slice(&i.to_le_bytes()),
            BsonValue::Int64(i) => buf.extend_from_slice(&i.to_le_bytes()),
            BsonValue::Undefined | BsonValue::Null => {}
        }
    }

    /// Writes a null-terminated C-string. Stops at any null byte in the input.
    fn write_cstring(&self, buf: &mut Vec<u8>, s: &str) {
        buf.extend(s.bytes().take_while(|&b| b != 0));
        buf.push(0);
    }

    /// Writes a BSON string: little-endian i32 (byte_count+1) + UTF-8 bytes + null byte.
    fn write_string(&self, buf: &mut Vec<u8>, s: &str) {
        let bytes = s.as_bytes();
        buf.extend_from_slice(&((bytes.len() as i32) + 1).to_le_bytes());
        buf.extend_from_slice(bytes);
        buf.push(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_five_bytes() {
        assert_eq!(BsonEncoder::new().encode(&[]), vec![5, 0, 0, 0, 0]);
    }

    #[test]
    fn int64_field_layout() {
        let bytes = BsonEncoder::new().encode(&[("a".to_string(), BsonValue::Int64(2))]);
        assert_eq!(
            bytes,
            vec![16, 0, 0, 0, 0x12, b'a', 0, 2, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn null_field_has_no_payload() {
        let bytes = BsonEncoder::new().encode(&[("k".to_string(), BsonValue::Null)]);
        assert_eq!(bytes, vec![8, 0, 0, 0, 0x0a, b'k', 0, 0]);
    }

    #[test]
    fn key_is_truncated_at_interior_nul() {
        let bytes = BsonEncoder::new().encode(&[("a\0b".to_string(), BsonValue::Null)]);
        assert_eq!(bytes, vec![8, 0, 0, 0, 0x0a, b'a', 0, 0]);
    }
}
