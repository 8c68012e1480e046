use nullable_bson::{
    register_default_decoders, register_default_encoders, BsonEncoder, BsonError, BsonValue,
    DocumentReader, DocumentWriter, Registry, RegistryBuilder,
};

fn default_registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    register_default_encoders(&mut builder);
    register_default_decoders(&mut builder);
    builder.build()
}

#[derive(Debug, PartialEq)]
struct Celsius(f64);

fn encode_celsius(registry: &Registry, c: &Celsius) -> Result<BsonValue, BsonError> {
    registry.encode_value(&c.0)
}

fn decode_celsius(registry: &Registry, v: &BsonValue) -> Result<Celsius, BsonError> {
    registry.decode_value::<f64>(v).map(Celsius)
}

#[test]
fn typed_writer_matches_raw_encoder() {
    let registry = default_registry();
    let mut doc = DocumentWriter::new(&registry);
    doc.append("i", &7i64)
        .unwrap()
        .append("s", &"x".to_string())
        .unwrap()
        .append("b", &false)
        .unwrap();
    let typed = doc.finish();

    let raw = BsonEncoder::new().encode(&[
        ("i".to_string(), BsonValue::Int64(7)),
        ("s".to_string(), BsonValue::Str("x".to_string())),
        ("b".to_string(), BsonValue::Boolean(false)),
    ]);
    assert_eq!(typed, raw);
}

#[test]
fn wrapper_type_delegates_to_inner_handler() {
    let mut builder = RegistryBuilder::new();
    register_default_encoders(&mut builder);
    register_default_decoders(&mut builder);
    builder
        .register_encoder::<Celsius>(encode_celsius)
        .register_decoder::<Celsius>(decode_celsius);
    let registry = builder.build();

    let mut doc = DocumentWriter::new(&registry);
    doc.append("t", &Celsius(21.5)).unwrap();
    let bytes = doc.finish();

    let mut bare = DocumentWriter::new(&registry);
    bare.append("t", &21.5f64).unwrap();
    assert_eq!(bytes, bare.finish());

    let doc = DocumentReader::parse(&registry, &bytes).unwrap();
    assert_eq!(doc.get::<Celsius>("t"), Ok(Celsius(21.5)));
}

#[test]
fn unregistered_type_fails_to_append() {
    let registry = default_registry();
    let mut doc = DocumentWriter::new(&registry);
    assert!(matches!(
        doc.append("t", &Celsius(1.0)),
        Err(BsonError::NoEncoder(_))
    ));
}

#[test]
fn reader_reports_missing_field_and_mismatch() {
    let registry = default_registry();
    let bytes = BsonEncoder::new().encode(&[("n".to_string(), BsonValue::Null)]);
    let doc = DocumentReader::parse(&registry, &bytes).unwrap();
    assert_eq!(
        doc.get::<i64>("absent"),
        Err(BsonError::MissingField("absent".to_string()))
    );
    assert_eq!(
        doc.get::<i64>("n"),
        Err(BsonError::TypeMismatch {
            expected: "i64",
            found: "null"
        })
    );
    assert_eq!(doc.raw("n"), Some(&BsonValue::Null));
}

#[test]
fn malformed_bytes_do_not_parse() {
    let registry = default_registry();
    assert_eq!(
        DocumentReader::parse(&registry, &[0x10, 0, 0]).unwrap_err(),
        BsonError::UnexpectedEof
    );
}
