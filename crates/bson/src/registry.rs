//! Pluggable per-type codec registry.
//!
//! A [`RegistryBuilder`] collects one encoder and one decoder per Rust type,
//! keyed by the type's [`TypeId`]. [`RegistryBuilder::build`] freezes it into
//! a [`Registry`], which is immutable and can be shared across threads.
//!
//! Handlers receive the registry itself so that a wrapper type can delegate
//! to the handler of the type it wraps:
//!
//! ```
//! use nullable_bson::{BsonError, BsonValue, Registry, RegistryBuilder};
//!
//! struct Meters(i64);
//!
//! fn encode_meters(registry: &Registry, m: &Meters) -> Result<BsonValue, BsonError> {
//!     registry.encode_value(&m.0)
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! nullable_bson::register_default_encoders(&mut builder);
//! builder.register_encoder::<Meters>(encode_meters);
//! let registry = builder.build();
//! assert_eq!(registry.encode_value(&Meters(3)), Ok(BsonValue::Int64(3)));
//! ```

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use super::error::BsonError;
use super::values::BsonValue;

/// Encoder handler for values of type `T`.
pub type EncodeFn<T> = fn(&Registry, &T) -> Result<BsonValue, BsonError>;

/// Decoder handler producing values of type `T`.
pub type DecodeFn<T> = fn(&Registry, &BsonValue) -> Result<T, BsonError>;

/// Static identity of a registered Rust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// A handler stored as `EncodeFn<T>` / `DecodeFn<T>` behind `Any`; the
/// concrete `T` is recovered from the same `TypeKey` it was stored under.
struct Handler {
    key: TypeKey,
    func: Box<dyn Any + Send + Sync>,
}

#[derive(Default)]
struct Handlers(HashMap<TypeId, Handler>);

impl Handlers {
    fn insert<F: Any + Send + Sync>(&mut self, key: TypeKey, func: F) -> bool {
        self.0
            .insert(
                key.id,
                Handler {
                    key,
                    func: Box::new(func),
                },
            )
            .is_some()
    }

    fn get<F: Any + Copy>(&self, id: TypeId) -> Option<F> {
        self.0.get(&id)?.func.downcast_ref::<F>().copied()
    }

    fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.0.values().map(|h| h.key.name).collect();
        names.sort_unstable();
        names
    }
}

/// Mutable registry under construction.
#[derive(Default)]
pub struct RegistryBuilder {
    encoders: Handlers,
    decoders: Handlers,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the encoder for `T`, replacing any earlier one.
    pub fn register_encoder<T: 'static>(&mut self, encode: EncodeFn<T>) -> &mut Self {
        let key = TypeKey::of::<T>();
        let replaced = self.encoders.insert(key, encode);
        log::debug!("bson registry: encoder for {} (replaced: {replaced})", key.name);
        self
    }

    /// Registers the decoder for `T`, replacing any earlier one.
    pub fn register_decoder<T: 'static>(&mut self, decode: DecodeFn<T>) -> &mut Self {
        let key = TypeKey::of::<T>();
        let replaced = self.decoders.insert(key, decode);
        log::debug!("bson registry: decoder for {} (replaced: {replaced})", key.name);
        self
    }

    /// Freezes the builder.
    pub fn build(self) -> Registry {
        log::debug!(
            "bson registry built with {} encoders, {} decoders",
            self.encoders.0.len(),
            self.decoders.0.len()
        );
        Registry {
            encoders: self.encoders,
            decoders: self.decoders,
        }
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("encoders", &self.encoders.names())
            .field("decoders", &self.decoders.names())
            .finish()
    }
}

/// Finalized, read-only registry.
pub struct Registry {
    encoders: Handlers,
    decoders: Handlers,
}

impl Registry {
    pub fn lookup_encoder<T: 'static>(&self) -> Result<EncodeFn<T>, BsonError> {
        self.encoders
            .get::<EncodeFn<T>>(TypeId::of::<T>())
            .ok_or(BsonError::NoEncoder(type_name::<T>()))
    }

    pub fn lookup_decoder<T: 'static>(&self) -> Result<DecodeFn<T>, BsonError> {
        self.decoders
            .get::<DecodeFn<T>>(TypeId::of::<T>())
            .ok_or(BsonError::NoDecoder(type_name::<T>()))
    }

    pub fn has_encoder<T: 'static>(&self) -> bool {
        self.lookup_encoder::<T>().is_ok()
    }

    pub fn has_decoder<T: 'static>(&self) -> bool {
        self.lookup_decoder::<T>().is_ok()
    }

    /// Encodes `value` with the encoder registered for `T`.
    pub fn encode_value<T: 'static>(&self, value: &T) -> Result<BsonValue, BsonError> {
        let encode = self.lookup_encoder::<T>()?;
        encode(self, value)
    }

    /// Decodes `value` with the decoder registered for `T`.
    pub fn decode_value<T: 'static>(&self, value: &BsonValue) -> Result<T, BsonError> {
        let decode = self.lookup_decoder::<T>()?;
        decode(self, value).map_err(|err| {
            log::trace!("bson decode into {} failed: {err}", type_name::<T>());
            err
        })
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("encoders", &self.encoders.names())
            .field("decoders", &self.decoders.names())
            .finish()
    }
}
