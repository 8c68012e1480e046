//! Built-in handlers for the primitive Rust types.

use chrono::{DateTime, FixedOffset, Utc};

use super::error::BsonError;
use super::registry::{Registry, RegistryBuilder};
use super::values::BsonValue;

/// Registers encoders for `i32`, `i64`, `f64`, `bool`, `String` and the
/// chrono timestamps.
pub fn register_default_encoders(builder: &mut RegistryBuilder) -> &mut RegistryBuilder {
    builder
        .register_encoder::<i32>(|_, v| Ok(BsonValue::Int32(*v)))
        .register_encoder::<i64>(|_, v| Ok(BsonValue::Int64(*v)))
        .register_encoder::<f64>(|_, v| Ok(BsonValue::Float(*v)))
        .register_encoder::<bool>(|_, v| Ok(BsonValue::Boolean(*v)))
        .register_encoder::<String>(|_, v| Ok(BsonValue::Str(v.clone())))
        .register_encoder::<DateTime<Utc>>(|_, v| Ok(BsonValue::DateTime(v.timestamp_millis())))
        .register_encoder::<DateTime<FixedOffset>>(|_, v| {
            Ok(BsonValue::DateTime(v.timestamp_millis()))
        })
}

/// Registers decoders for the same set of types as
/// [`register_default_encoders`].
pub fn register_default_decoders(builder: &mut RegistryBuilder) -> &mut RegistryBuilder {
    builder
        .register_decoder::<i32>(decode_i32)
        .register_decoder::<i64>(decode_i64)
        .register_decoder::<f64>(decode_f64)
        .register_decoder::<bool>(decode_bool)
        .register_decoder::<String>(decode_string)
        .register_decoder::<DateTime<Utc>>(decode_utc)
        .register_decoder::<DateTime<FixedOffset>>(|registry, v| {
            decode_utc(registry, v).map(|t| t.fixed_offset())
        })
}

fn mismatch(expected: &'static str, found: &BsonValue) -> BsonError {
    BsonError::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

fn out_of_range(expected: &'static str, found: &BsonValue, value: impl ToString) -> BsonError {
    BsonError::OutOfRange {
        expected,
        found: found.type_name(),
        value: value.to_string(),
    }
}

/// Doubles are accepted when they carry no fractional part.
fn integral_double(expected: &'static str, v: &BsonValue, f: f64) -> Result<i64, BsonError> {
    // 2^63 is the first double past i64::MAX.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    if f.fract() != 0.0 || !(-BOUND..BOUND).contains(&f) {
        return Err(out_of_range(expected, v, f));
    }
    Ok(f as i64)
}

fn decode_i64(_: &Registry, v: &BsonValue) -> Result<i64, BsonError> {
    match v {
        BsonValue::Int64(i) => Ok(*i),
        BsonValue::Int32(i) => Ok(i64::from(*i)),
        BsonValue::Float(f) => integral_double("i64", v, *f),
        other => Err(mismatch("i64", other)),
    }
}

fn decode_i32(registry: &Registry, v: &BsonValue) -> Result<i32, BsonError> {
    if let BsonValue::Int32(i) = v {
        return Ok(*i);
    }
    let wide = decode_i64(registry, v).map_err(|err| match err {
        BsonError::TypeMismatch { found, .. } => BsonError::TypeMismatch {
            expected: "i32",
            found,
        },
        err => err,
    })?;
    i32::try_from(wide).map_err(|_| out_of_range("i32", v, wide))
}

fn decode_f64(_: &Registry, v: &BsonValue) -> Result<f64, BsonError> {
    match v {
        BsonValue::Float(f) => Ok(*f),
        BsonValue::Int32(i) => Ok(f64::from(*i)),
        BsonValue::Int64(i) => Ok(*i as f64),
        other => Err(mismatch("f64", other)),
    }
}

fn decode_bool(_: &Registry, v: &BsonValue) -> Result<bool, BsonError> {
    match v {
        BsonValue::Boolean(b) => Ok(*b),
        other => Err(mismatch("bool", other)),
    }
}

fn decode_string(_: &Registry, v: &BsonValue) -> Result<String, BsonError> {
    match v {
        BsonValue::Str(s) => Ok(s.clone()),
        other => Err(mismatch("String", other)),
    }
}

fn decode_utc(_: &Registry, v: &BsonValue) -> Result<DateTime<Utc>, BsonError> {
    match v {
        BsonValue::DateTime(ms) => {
            DateTime::from_timestamp_millis(*ms).ok_or_else(|| out_of_range("DateTime", v, ms))
        }
        other => Err(mismatch("DateTime", other)),
    }
}
