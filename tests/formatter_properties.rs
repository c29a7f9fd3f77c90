//! Property tests for value formatting and content hashing

use indexmap::IndexMap;
use mqcli::formatter::{self, Value};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        any::<f32>().prop_map(|f| Value::Float(f as f64)),
        any::<char>().prop_map(Value::Char),
        ".{0,20}".prop_map(Value::String),
    ]
}

fn nested() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| Value::Map(entries.into_iter().collect::<IndexMap<_, _>>())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn hash_is_forty_lowercase_hex(value in nested()) {
        prop_assume!(!value.is_null());
        let digest = formatter::hash(Some(&value)).unwrap().unwrap();
        prop_assert_eq!(digest.len(), 40);
        prop_assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn formatting_is_deterministic(value in nested()) {
        prop_assert_eq!(
            formatter::format_as_python_literal(&value).unwrap(),
            formatter::format_as_python_literal(&value.clone()).unwrap()
        );
        prop_assert_eq!(
            formatter::hash(Some(&value)).unwrap(),
            formatter::hash(Some(&value.clone())).unwrap()
        );
    }

    #[test]
    fn python_strings_stay_on_one_line(text in ".*") {
        let literal = formatter::format_as_python_literal(&Value::String(text)).unwrap();
        prop_assert!(literal.starts_with('\'') && literal.ends_with('\''));
        prop_assert!(!literal.contains('\n'));
        prop_assert!(!literal.contains('\r'));
    }

    #[test]
    fn integers_print_in_decimal(i in any::<i64>()) {
        prop_assert_eq!(formatter::format_as_python_literal(&Value::Integer(i)).unwrap(), i.to_string());
    }

    #[test]
    fn single_precision_floats_read_back(x in any::<f32>().prop_filter("finite", |x| x.is_finite())) {
        let literal = formatter::format_as_python_literal(&Value::Float(x as f64)).unwrap();
        prop_assert!(literal.contains('.'));
        prop_assert_eq!(literal.parse::<f32>().unwrap(), x);
    }

    #[test]
    fn json_string_lists_parse_back(items in prop::collection::vec(".{0,12}", 0..6)) {
        let value = Value::List(items.iter().cloned().map(Value::String).collect());
        let json = formatter::format_as_json(&value).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, items);
    }
}

#[test]
fn null_and_empty_string_hash_differently() {
    assert_eq!(formatter::hash(Some(&Value::Null)).unwrap(), None);
    assert_eq!(formatter::hash(None).unwrap(), None);
    // sha1("''")
    assert_eq!(
        formatter::hash(Some(&Value::String(String::new()))).unwrap().as_deref(),
        Some("b6ee60926c0a426addcbb7e087d4274498f35b1c")
    );
}
