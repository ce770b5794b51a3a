//! Tests for recursive validators built with lazy and lazy_once.

use serde_json::{json, Map, Value};
use surety::value::json_eq;
use surety::{Fields, Shape, Validator};

fn category() -> Validator<Map<String, Value>> {
    Shape::object_of(
        Fields::new()
            .field("name", Shape::string())
            .field("subcategories", Shape::array_of(Shape::lazy(category))),
    )
}

fn expression() -> Validator<Value> {
    let number = Shape::number().map(Value::from);
    let sum = Shape::object_strict(
        Fields::new()
            .field("op", Shape::constant("+"))
            .field("args", Shape::array_of(Shape::lazy_once(expression))),
    )
    .map(Value::Object);

    Shape::one_of([number, sum])
}

#[test]
fn test_recursive_category_tree() {
    let tree = json!({
        "name": "root",
        "subcategories": [
            {"name": "a", "subcategories": []},
            {"name": "b", "subcategories": [{"name": "b1", "subcategories": []}]}
        ]
    });
    assert!(category().check(&tree).is_ok());
}

#[test]
fn test_deep_error_location() {
    let tree = json!({
        "name": "root",
        "subcategories": [
            {"name": "a", "subcategories": []},
            {"name": "b", "subcategories": [{"name": 42, "subcategories": []}]}
        ]
    });
    let error = category().check(&tree).unwrap_err();
    assert_eq!(error.at, "input.subcategories[1].subcategories[0].name");
    assert_eq!(error.message, "expected a string, got a number");
}

#[test]
fn test_deep_nesting() {
    let mut tree = json!({"name": "leaf", "subcategories": []});
    for depth in 0..50 {
        tree = json!({"name": format!("level{}", depth), "subcategories": [tree]});
    }
    assert!(category().check(&tree).is_ok());
}

#[test]
fn test_lazy_once_recursive_expression() {
    let valid = json!({"op": "+", "args": [1, {"op": "+", "args": [2, 3]}]});
    let checked = expression().check(&valid).unwrap();
    assert!(json_eq(&checked, &valid));

    let invalid = json!({"op": "+", "args": [1, {"op": "-", "args": []}]});
    assert!(expression().check(&invalid).is_err());
}
