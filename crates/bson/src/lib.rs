//! BSON (Binary JSON) documents with a pluggable type-codec registry.
//!
//! The wire layer ([`BsonEncoder`], [`BsonDecoder`]) works on [`BsonValue`]
//! trees. The registry layer maps Rust types to encode/decode handlers so
//! that callers can write and read typed fields:
//!
//! ```
//! use nullable_bson::{DocumentReader, DocumentWriter, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! nullable_bson::register_default_encoders(&mut builder);
//! nullable_bson::register_default_decoders(&mut builder);
//! let registry = builder.build();
//!
//! let mut doc = DocumentWriter::new(&registry);
//! doc.append("key", &1i64).unwrap();
//! let bytes = doc.finish();
//!
//! let doc = DocumentReader::parse(&registry, &bytes).unwrap();
//! assert_eq!(doc.get::<i64>("key"), Ok(1));
//! ```

pub mod decoder;
pub mod defaults;
pub mod document;
pub mod encoder;
pub mod error;
pub mod registry;
pub mod values;

pub use decoder::BsonDecoder;
pub use defaults::{register_default_decoders, register_default_encoders};
pub use document::{DocumentReader, DocumentWriter};
pub use encoder::BsonEncoder;
pub use error::BsonError;
pub use registry::{DecodeFn, EncodeFn, Registry, RegistryBuilder, TypeKey};
pub use values::{BsonBinary, BsonValue};
