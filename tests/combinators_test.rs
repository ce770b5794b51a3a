//! Tests for combinators: optional, one_of/union, intersection,
//! with_default, map, and_then and where_.

use serde_json::{json, Map, Value};
use surety::{Fields, Shape, Validator};

#[test]
fn test_optional_accepts_absence_only() {
    let maybe = Shape::optional(Shape::string());
    assert_eq!(maybe.check_input(None), Ok(None));
    assert_eq!(maybe.check(&json!("x")), Ok(Some("x".to_string())));

    let error = maybe.check(&json!(null)).unwrap_err();
    assert_eq!(error.message, "expected a string, got null");
}

#[test]
fn test_nullable_via_one_of() {
    let nullable: Validator<Option<String>> = Shape::one_of([
        Shape::string().map(Some),
        Shape::constant(Value::Null).map(|_| None),
    ]);
    assert_eq!(nullable.check(&json!(null)), Ok(None));
    assert_eq!(nullable.check(&json!("a")), Ok(Some("a".to_string())));
    assert!(nullable.check(&json!(1)).is_err());
}

#[test]
fn test_one_of_literals() {
    let level: Validator<&str> = Shape::one_of(["debug", "info", "warn"]);
    assert_eq!(level.check(&json!("info")), Ok("info"));

    let error = level.check(&json!("trace")).unwrap_err();
    assert_eq!(error.at, "input");
    assert_eq!(
        error.message,
        concat!(
            "expected a value matching one of the decoders, got the errors [",
            r#""at error: expected \"debug\", got \"trace\"","#,
            r#""at error: expected \"info\", got \"trace\"","#,
            r#""at error: expected \"warn\", got \"trace\"""#,
            "]"
        )
    );
}

#[test]
fn test_one_of_error_list_parses_as_json() {
    let level: Validator<&str> = Shape::one_of(["debug", "info"]);
    let message = level.check(&json!(3)).unwrap_err().message;
    let (_, list) = message.split_once("got the errors ").unwrap();

    let entries: Vec<String> = serde_json::from_str(list).unwrap();
    assert_eq!(
        entries,
        vec!["at error: expected \"debug\", got 3", "at error: expected \"info\", got 3"]
    );
}

#[test]
fn test_one_of_with_no_branches_always_fails() {
    let nothing: Validator<f64> = Shape::one_of(Vec::<Validator<f64>>::new());
    let error = nothing.check(&json!(1)).unwrap_err();
    assert_eq!(
        error.message,
        "expected a value matching one of the decoders, got the errors []"
    );
}

#[test]
fn test_one_of_numeric_and_boolean_literals() {
    let code: Validator<i64> = Shape::one_of([200i64, 404]);
    assert_eq!(code.check(&json!(404)), Ok(404));
    assert_eq!(code.check(&json!(404.0)), Ok(404));
    assert!(code.check(&json!(500)).is_err());

    let truthy: Validator<bool> = Shape::one_of([true]);
    assert!(truthy.check(&json!(false)).is_err());
}

#[test]
fn test_one_of_first_success_wins() {
    let tagged: Validator<&str> = Shape::one_of([
        Shape::number().map(|_| "first"),
        Shape::number().map(|_| "second"),
    ]);
    assert_eq!(tagged.check(&json!(1)), Ok("first"));
}

#[test]
fn test_one_of_error_is_not_relocated() {
    let either: Validator<Map<String, Value>> = Shape::one_of([
        Shape::object_of(Fields::new().field("a", Shape::number())),
        Shape::object_of(Fields::new().field("b", Shape::number())),
    ]);
    let nested = Shape::object_of(Fields::new().field("value", either));

    let error = nested.check(&json!({"value": {"a": "x"}})).unwrap_err();
    assert_eq!(error.at, "input.value");
    assert!(error
        .message
        .contains("\"at error.a: expected a number, got a string\""));
    assert!(error
        .message
        .contains("\"at error: the key 'b' is required but was not present\""));
}

#[test]
fn test_union_of_mapped_shapes() {
    #[derive(Debug, PartialEq)]
    enum Shape2d {
        Circle(f64),
        Rect(f64, f64),
    }

    let circle = Shape::object_of(
        Fields::new()
            .field("kind", Shape::constant("circle"))
            .field("r", Shape::number()),
    )
    .and_then(|_| Shape::value_at(["r"], Shape::number()).map(Shape2d::Circle));

    let rect = Shape::object_of(
        Fields::new()
            .field("kind", Shape::constant("rect"))
            .field("w", Shape::number())
            .field("h", Shape::number()),
    )
    .and_then(|_| {
        Shape::tuple((
            Shape::value_at(["w"], Shape::number()),
            Shape::value_at(["h"], Shape::number()),
        ))
        .map(|(w, h)| Shape2d::Rect(w, h))
    });

    let figure: Validator<Shape2d> = Shape::union([circle, rect]);

    assert_eq!(
        figure.check(&json!({"kind": "circle", "r": 2})),
        Ok(Shape2d::Circle(2.0))
    );
    assert!(figure.check(&json!({"kind": "triangle"})).is_err());
}

#[test]
fn test_intersection_merges_objects() {
    let named = Shape::object_of(Fields::new().field("name", Shape::string()));
    let aged = Shape::object_of(Fields::new().field("age", Shape::number()));
    let both = Shape::intersection([named, aged]);

    let merged = both.check(&json!({"name": "Ada", "age": 36, "x": 0})).unwrap();
    assert_eq!(Value::Object(merged), json!({"name": "Ada", "age": 36.0}));

    let error = both.check(&json!({"name": "Ada"})).unwrap_err();
    assert_eq!(error.message, "the key 'age' is required but was not present");
}

#[test]
fn test_intersection_later_value_wins() {
    let raw = Shape::object_of(Fields::new().field("id", Shape::any()));
    let upper = Shape::object_of(
        Fields::new().field("id", Shape::string().map(|s| s.to_uppercase())),
    );
    let merged = Shape::intersection([raw, upper])
        .check(&json!({"id": "abc"}))
        .unwrap();
    assert_eq!(merged.get("id"), Some(&json!("ABC")));
}

#[test]
fn test_with_default() {
    let port = Shape::with_default(8080.0, Shape::number());
    assert_eq!(port.check(&json!(3000)), Ok(3000.0));
    assert_eq!(port.check(&json!("3000")), Ok(8080.0));
    assert_eq!(port.check_input(None), Ok(8080.0));
}

#[test]
fn test_map_chain() {
    let trimmed_len = Shape::string()
        .map(|s| s.trim().to_string())
        .map(|s| s.len());
    assert_eq!(trimmed_len.check(&json!("  ab  ")), Ok(2));
}

#[test]
fn test_and_then_selects_by_version() {
    let config = Shape::value_at(["version"], Shape::number()).and_then(|version| {
        if version >= 2.0 {
            Shape::value_at(["settings", "port"], Shape::number())
        } else {
            Shape::value_at(["port"], Shape::number())
        }
    });

    assert_eq!(config.check(&json!({"version": 1, "port": 80})), Ok(80.0));
    assert_eq!(
        config.check(&json!({"version": 2, "settings": {"port": 443}})),
        Ok(443.0)
    );

    let error = config
        .check(&json!({"version": 2, "settings": {"port": "x"}}))
        .unwrap_err();
    assert_eq!(error.at, "input.settings.port");
}

#[test]
fn test_and_then_failure_from_decision() {
    let positive = Shape::number().and_then(|n| {
        if n > 0.0 {
            Shape::succeed(n)
        } else {
            Shape::fail(format!("{} is not positive", n))
        }
    });
    assert_eq!(positive.check(&json!(3)), Ok(3.0));
    assert_eq!(positive.check(&json!(-3)).unwrap_err().message, "-3 is not positive");
}

#[test]
fn test_where_predicate() {
    let adult = Shape::number().where_(|age| *age >= 18.0, "must be an adult");
    let person = Shape::object_of(Fields::new().field("age", adult));

    assert!(person.check(&json!({"age": 30})).is_ok());

    let error = person.check(&json!({"age": 12})).unwrap_err();
    assert_eq!(error.at, "input.age");
    assert_eq!(error.message, "must be an adult");

    // The base validator's own failure comes first.
    let error = person.check(&json!({"age": "12"})).unwrap_err();
    assert_eq!(error.message, "expected a number, got a string");
}

#[test]
fn test_validator_reuse_is_stable() {
    let name = Shape::string();
    let wrapped = Shape::array_of(name.clone());
    let _ = Shape::optional(name.clone().map(|s| s.len()));

    assert_eq!(name.check(&json!("x")), Ok("x".to_string()));
    assert!(wrapped.check(&json!(["x"])).is_ok());
    assert_eq!(name.check(&json!("x")), name.check(&json!("x")));
}
