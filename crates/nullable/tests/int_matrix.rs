use nullable::{Error, NullInt, SqlValue};

fn assert_int(i: &NullInt, from: &str) {
    assert_eq!(i.value, 12345, "bad {from} int");
    assert!(i.valid, "{from} is invalid, but should be valid");
}

fn assert_null_int(i: &NullInt, from: &str) {
    assert!(!i.valid, "{from} is valid, but should be invalid");
}

#[test]
fn int_from() {
    assert_int(&NullInt::from_value(12345), "from_value()");
    assert_int(&NullInt::from(12345), "From<i64>");
    assert!(NullInt::from_value(0).valid, "from_value(0) should be valid");
}

#[test]
fn int_from_ptr() {
    let n = 12345i64;
    assert_int(&NullInt::from_ptr(Some(&n)), "from_ptr()");
    assert_null_int(&NullInt::from_ptr(None), "from_ptr(None)");
}

#[test]
fn unmarshal_int() {
    let mut i = NullInt::null();
    i.unmarshal_json(b"12345").unwrap();
    assert_int(&i, "int json");

    let mut si = NullInt::null();
    si.unmarshal_json(br#""12345""#).unwrap();
    assert_int(&si, "int string json");

    let mut neg_zero = NullInt::from_value(7);
    neg_zero.unmarshal_json(b"-0").unwrap();
    assert_eq!(neg_zero.ptr(), Some(&0));

    let mut ni = NullInt::null();
    assert!(ni
        .unmarshal_json(br#"{"Int64":12345,"Valid":true}"#)
        .is_err());

    let mut blank = NullInt::null();
    assert!(matches!(
        blank.unmarshal_json(br#""""#),
        Err(Error::Parse { kind: "int64", .. })
    ));

    let mut null = NullInt::from_value(1);
    null.unmarshal_json(b"null").unwrap();
    assert_null_int(&null, "null json");

    let mut bad_type = NullInt::from_value(1);
    assert!(matches!(
        bad_type.unmarshal_json(b"true"),
        Err(Error::TypeMismatch {
            kind: "int64",
            found: "boolean"
        })
    ));
    assert_null_int(&bad_type, "wrong type json");
    assert_eq!(bad_type.value, 0);

    let mut invalid = NullInt::from_value(1);
    let err = invalid.unmarshal_json(b":)").unwrap_err();
    assert!(matches!(err, Error::Syntax(_)), "expected syntax error, not {err:?}");
    assert_null_int(&invalid, "invalid json");
}

#[test]
fn unmarshal_non_integer_number() {
    let mut i = NullInt::null();
    assert!(matches!(
        i.unmarshal_json(b"1.2345"),
        Err(Error::Precision { kind: "int64", .. })
    ));
    assert!(matches!(
        i.unmarshal_json(b"1.5"),
        Err(Error::Precision { .. })
    ));
}

#[test]
fn unmarshal_int64_overflow() {
    let mut i = NullInt::null();
    i.unmarshal_json(i64::MAX.to_string().as_bytes()).unwrap();
    assert_eq!(i.ptr(), Some(&i64::MAX));

    let overflow = (i64::MAX as u64 + 1).to_string();
    assert_eq!(overflow, "9223372036854775808");
    assert!(matches!(
        i.unmarshal_json(overflow.as_bytes()),
        Err(Error::Range { kind: "int64", .. })
    ));
    assert!(!i.valid);

    i.unmarshal_json(i64::MIN.to_string().as_bytes()).unwrap();
    assert_eq!(i.ptr(), Some(&i64::MIN));
    assert!(matches!(
        i.unmarshal_json(b"-9223372036854775809"),
        Err(Error::Range { kind: "int64", literal }) if literal == "-9223372036854775809"
    ));
    assert!(!i.valid);
}

#[test]
fn text_unmarshal_int() {
    let mut i = NullInt::null();
    i.unmarshal_text(b"12345").unwrap();
    assert_int(&i, "unmarshal_text() int");

    let mut blank = NullInt::from_value(1);
    blank.unmarshal_text(b"").unwrap();
    assert_null_int(&blank, "unmarshal_text() empty int");

    let mut null = NullInt::from_value(1);
    null.unmarshal_text(b"null").unwrap();
    assert_null_int(&null, r#"unmarshal_text() "null""#);

    let mut invalid = NullInt::null();
    assert!(invalid.unmarshal_text(b"hello world").is_err());
}

#[test]
fn marshal_int() {
    assert_eq!(NullInt::from_value(12345).marshal_json(), b"12345");
    assert_eq!(NullInt::new(0, false).marshal_json(), b"null");
    assert_eq!(serde_json::to_string(&NullInt::from_value(-1)).unwrap(), "-1");
}

#[test]
fn marshal_int_text() {
    assert_eq!(NullInt::from_value(12345).marshal_text(), b"12345");
    assert_eq!(NullInt::new(0, false).marshal_text(), b"");
    assert_eq!(NullInt::new(7, false).to_string(), "");
}

#[test]
fn int_pointer() {
    assert_eq!(NullInt::from_value(12345).ptr(), Some(&12345));
    assert_eq!(NullInt::new(0, false).ptr(), None);
}

#[test]
fn int_is_zero() {
    assert!(!NullInt::from_value(12345).is_zero());
    assert!(NullInt::new(0, false).is_zero());
    assert!(!NullInt::new(0, true).is_zero());
}

#[test]
fn int_set_valid() {
    let mut change = NullInt::new(0, false);
    assert_null_int(&change, "set_valid()");
    change.set_valid(12345);
    assert_int(&change, "set_valid()");
}

#[test]
fn int_scan() {
    let mut i = NullInt::null();
    i.scan(12345i64).unwrap();
    assert_int(&i, "scanned int");

    let mut s = NullInt::null();
    s.scan("12345").unwrap();
    assert_int(&s, "scanned text");

    let mut null = NullInt::from_value(1);
    null.scan(SqlValue::Null).unwrap();
    assert_null_int(&null, "scanned null");

    let mut none = NullInt::from_value(1);
    none.scan(None::<i64>).unwrap();
    assert_null_int(&none, "scanned None");

    let mut bad = NullInt::from_value(1);
    assert!(matches!(
        bad.scan(true),
        Err(Error::Conversion {
            kind: "int64",
            from: "bool"
        })
    ));
    assert_null_int(&bad, "failed scan");
    assert_eq!(bad.value, 0);
}

#[test]
fn int_sql_value() {
    assert_eq!(NullInt::from_value(5).sql_value(), SqlValue::Int64(5));
    assert_eq!(NullInt::new(5, false).sql_value(), SqlValue::Null);
}

#[test]
fn int_value_or_zero() {
    assert_eq!(NullInt::new(12345, true).value_or_zero(), 12345);
    assert_eq!(NullInt::new(12345, false).value_or_zero(), 0);
}

#[test]
fn int_equal() {
    let cases = [
        ((10, false), (10, false), true),
        ((10, false), (20, false), true),
        ((10, true), (10, true), true),
        ((10, true), (10, false), false),
        ((10, false), (10, true), false),
        ((10, true), (20, true), false),
    ];
    for ((a, av), (b, bv), want) in cases {
        let (x, y) = (NullInt::new(a, av), NullInt::new(b, bv));
        assert_eq!(
            x.equal(&y),
            want,
            "equal() of Int{{{a}, valid:{av}}} and Int{{{b}, valid:{bv}}}"
        );
    }
}
