//! Tests for [`crate::ast::Value`].

use crate::ast::ObjectField;
use crate::ast::Name;
use crate::ast::Value;
use crate::ast::Variable;
use crate::tests::utils;

/// Scalars and enums are constant.
#[test]
fn scalars_are_const() {
    for source in ["1", "-1.5e3", "\"s\"", "true", "false", "RED"] {
        assert!(utils::parse_argument_value(source).is_const(), "{source}");
    }
}

/// A variable anywhere inside a value makes it non-constant.
#[test]
fn nested_variables_are_not_const() {
    assert!(!utils::parse_argument_value("$v").is_const());
    assert!(!utils::parse_argument_value("[1, [2, $v]]").is_const());
    assert!(!utils::parse_argument_value("{a: {b: [$v]}}").is_const());
    assert!(utils::parse_argument_value("{a: {b: [1]}}").is_const());
    assert!(utils::parse_argument_value("[]").is_const());
}

/// Numeric literals keep their exact source text.
#[test]
fn numbers_keep_source_text() {
    assert_eq!(utils::parse_argument_value("-0"), Value::Int("-0".to_string()));
    assert_eq!(utils::parse_argument_value("1E+10"), Value::Float("1E+10".to_string()));
    assert_eq!(utils::parse_argument_value("0.50"), Value::Float("0.50".to_string()));
}

/// Object fields keep their order and duplicates.
#[test]
fn object_fields_keep_order() {
    let value = utils::parse_argument_value("{b: 1, a: $x, b: 2}");
    assert_eq!(
        value,
        Value::Object(vec![
            ObjectField {
                name: Name::new("b"),
                value: Value::Int("1".to_string()),
            },
            ObjectField {
                name: Name::new("a"),
                value: Value::Variable(Variable::new("x")),
            },
            ObjectField {
                name: Name::new("b"),
                value: Value::Int("2".to_string()),
            },
        ]),
    );
}
