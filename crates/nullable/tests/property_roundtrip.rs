use nullable::{NullBool, NullFloat, NullInt, NullString, Nullable};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Row {
    #[serde(default, skip_serializing_if = "Nullable::is_zero")]
    id: NullInt,
    #[serde(default, skip_serializing_if = "Nullable::is_zero")]
    name: NullString,
    #[serde(default)]
    score: NullFloat,
}

fn null_int() -> impl Strategy<Value = NullInt> {
    (any::<i64>(), any::<bool>()).prop_map(|(v, valid)| NullInt::new(v, valid))
}

proptest! {
    #[test]
    fn int_json_round_trip(n in null_int()) {
        let back = NullInt::from_json(&n.marshal_json()).unwrap();
        prop_assert!(back.equal(&n));
    }

    #[test]
    fn int_text_round_trip(n in null_int()) {
        let back = NullInt::from_text(&n.to_string()).unwrap();
        prop_assert!(back.equal(&n));
    }

    #[test]
    fn float_round_trip(v in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let n = NullFloat::from_value(v);
        prop_assert!(NullFloat::from_json(&n.marshal_json()).unwrap().equal(&n));
        prop_assert!(NullFloat::from_text(&n.to_string()).unwrap().equal(&n));
    }

    #[test]
    fn bool_round_trip(v in any::<bool>(), valid in any::<bool>()) {
        let n = NullBool::new(v, valid);
        prop_assert!(NullBool::from_json(&n.marshal_json()).unwrap().equal(&n));
        prop_assert!(NullBool::from_text(&n.to_string()).unwrap().equal(&n));
    }

    #[test]
    fn string_json_round_trip(s in ".*") {
        let n = NullString::from_value(s);
        prop_assert!(NullString::from_json(&n.marshal_json()).unwrap().equal(&n));
    }

    #[test]
    fn string_text_round_trip(s in ".+".prop_filter("absent spelling", |s| s != "null")) {
        let n = NullString::from_value(s);
        prop_assert!(NullString::from_text(&n.to_string()).unwrap().equal(&n));
    }

    #[test]
    fn invalid_ignores_payload(a in any::<i64>(), b in any::<i64>()) {
        prop_assert!(NullInt::new(a, false).equal(&NullInt::new(b, false)));
        prop_assert_eq!(NullInt::new(a, false).marshal_json(), b"null".to_vec());
    }

    #[test]
    fn failed_decode_resets_receiver(v in any::<i64>(), junk in "[a-z]{1,8}") {
        prop_assume!(junk != "null");
        let mut n = NullInt::from_value(v);
        prop_assert!(n.unmarshal_text(junk.as_bytes()).is_err());
        prop_assert!(!n.valid);
        prop_assert_eq!(n.value, 0);
    }

    #[test]
    fn struct_omits_only_absent_fields(id in null_int(), name in proptest::option::of(".*")) {
        let row = Row { id, name: NullString::from_option(name), score: NullFloat::null() };
        let json = serde_json::to_value(&row).unwrap();
        let object = json.as_object().unwrap();
        prop_assert_eq!(object.contains_key("id"), row.id.valid);
        prop_assert_eq!(object.contains_key("name"), row.name.valid);
        prop_assert!(object["score"].is_null());

        let back: Row = serde_json::from_value(json).unwrap();
        prop_assert!(back.id.equal(&row.id));
        prop_assert!(back.name.equal(&row.name));
        prop_assert!(!back.score.valid);
    }
}
