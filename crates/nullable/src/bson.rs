//! Binary document (BSON) adapter.
//!
//! A present scalar is handed to the registry's handler for the bare
//! primitive, so it is written byte-for-byte like that primitive. An absent
//! one is written as BSON null, and BSON null reads back as absent.
//!
//! ```
//! use nullable::{register_null_types, NullInt};
//! use nullable_bson::{register_default_decoders, register_default_encoders};
//! use nullable_bson::{DocumentWriter, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! register_null_types(&mut builder);
//! register_default_encoders(&mut builder);
//! register_default_decoders(&mut builder);
//! let registry = builder.build();
//!
//! let mut doc = DocumentWriter::new(&registry);
//! doc.append("key", &NullInt::from_value(2)).unwrap();
//! let wrapped = doc.finish();
//!
//! let mut doc = DocumentWriter::new(&registry);
//! doc.append("key", &2i64).unwrap();
//! assert_eq!(wrapped, doc.finish());
//! ```

use nullable_bson::{BsonError, BsonValue, Registry, RegistryBuilder};

use crate::kind::{Kind, Timestamp};
use crate::nullable::Nullable;

/// Registers an encoder and a decoder for every nullable kind.
///
/// The handlers delegate to the bare primitive's handlers, which must be
/// registered on the same builder (for instance with
/// [`register_default_encoders`](nullable_bson::register_default_encoders)),
/// before or after this call.
pub fn register_null_types(builder: &mut RegistryBuilder) -> &mut RegistryBuilder {
    register_kind::<i64>(builder);
    register_kind::<String>(builder);
    register_kind::<bool>(builder);
    register_kind::<f64>(builder);
    register_kind::<Timestamp>(builder);
    builder
}

fn register_kind<T: Kind>(builder: &mut RegistryBuilder) {
    log::trace!("registering nullable {} with bson registry", T::NAME);
    builder
        .register_encoder::<Nullable<T>>(encode_nullable::<T>)
        .register_decoder::<Nullable<T>>(decode_nullable::<T>);
}

fn encode_nullable<T: Kind>(registry: &Registry, n: &Nullable<T>) -> Result<BsonValue, BsonError> {
    match n.ptr() {
        Some(value) => registry.encode_value(value),
        None => Ok(BsonValue::Null),
    }
}

fn decode_nullable<T: Kind>(registry: &Registry, v: &BsonValue) -> Result<Nullable<T>, BsonError> {
    match v {
        BsonValue::Null => Ok(Nullable::null()),
        present => registry.decode_value::<T>(present).map(Nullable::from_value),
    }
}
