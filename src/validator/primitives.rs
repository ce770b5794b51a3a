//! Leaf validators: JSON scalars, constants and unconditional results.

use serde_json::Value;

use crate::error::PartialError;
use crate::value::{expected_got, json_eq, render};

use super::core::Validator;

pub(crate) fn string() -> Validator<String> {
    Validator::from_fn(|input| {
        input
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| PartialError::new(expected_got("a string", input)))
    })
}

pub(crate) fn number() -> Validator<f64> {
    Validator::from_fn(|input| {
        input
            .and_then(Value::as_f64)
            .ok_or_else(|| PartialError::new(expected_got("a number", input)))
    })
}

pub(crate) fn boolean() -> Validator<bool> {
    Validator::from_fn(|input| {
        input
            .and_then(Value::as_bool)
            .ok_or_else(|| PartialError::new(expected_got("a boolean", input)))
    })
}

pub(crate) fn undefined() -> Validator<()> {
    Validator::from_fn(|input| match input {
        None => Ok(()),
        Some(_) => Err(PartialError::new(expected_got("undefined", input))),
    })
}

/// Accepts everything, including an absent value.
pub(crate) fn anything() -> Validator<Option<Value>> {
    Validator::from_fn(|input| Ok(input.cloned()))
}

pub(crate) fn constant<T, F>(value: T, eq: F) -> Validator<T>
where
    T: Into<Value> + Clone + Send + Sync + 'static,
    F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
{
    let expected: Value = value.clone().into();
    Validator::from_fn(move |input| match input {
        Some(got) if eq(got, &expected) => Ok(value.clone()),
        _ => Err(PartialError::new(format!(
            "expected {}, got {}",
            render(Some(&expected)),
            render(input)
        ))),
    })
}

pub(crate) fn constant_json<T>(value: T) -> Validator<T>
where
    T: Into<Value> + Clone + Send + Sync + 'static,
{
    constant(value, json_eq)
}

pub(crate) fn succeed<A>(value: A) -> Validator<A>
where
    A: Clone + Send + Sync + 'static,
{
    Validator::from_fn(move |_| Ok(value.clone()))
}

pub(crate) fn fail<A: 'static>(message: impl Into<String>) -> Validator<A> {
    let message = message.into();
    Validator::from_fn(move |_| Err(PartialError::new(message.clone())))
}

// Literal branches for `Shape::one_of`.

impl From<&'static str> for Validator<&'static str> {
    fn from(literal: &'static str) -> Self {
        constant_json(literal)
    }
}

impl From<String> for Validator<String> {
    fn from(literal: String) -> Self {
        constant_json(literal)
    }
}

impl From<f64> for Validator<f64> {
    fn from(literal: f64) -> Self {
        constant_json(literal)
    }
}

impl From<i64> for Validator<i64> {
    fn from(literal: i64) -> Self {
        constant_json(literal)
    }
}

impl From<bool> for Validator<bool> {
    fn from(literal: bool) -> Self {
        constant_json(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message<A: std::fmt::Debug>(result: Result<A, PartialError>) -> String {
        result.unwrap_err().message
    }

    #[test]
    fn test_string() {
        assert_eq!(string().validate(Some(&json!("hi"))), Ok("hi".to_string()));
        assert_eq!(
            message(string().validate(Some(&json!(9001)))),
            "expected a string, got a number"
        );
        assert_eq!(
            message(string().validate(None)),
            "expected a string, got undefined"
        );
    }

    #[test]
    fn test_number() {
        assert_eq!(number().validate(Some(&json!(3))), Ok(3.0));
        assert_eq!(number().validate(Some(&json!(-0.5))), Ok(-0.5));
        assert_eq!(
            message(number().validate(Some(&json!("3")))),
            "expected a number, got a string"
        );
    }

    #[test]
    fn test_boolean() {
        assert_eq!(boolean().validate(Some(&json!(false))), Ok(false));
        assert_eq!(
            message(boolean().validate(Some(&json!(null)))),
            "expected a boolean, got null"
        );
    }

    #[test]
    fn test_undefined_only_accepts_absence() {
        assert_eq!(undefined().validate(None), Ok(()));
        assert_eq!(
            message(undefined().validate(Some(&json!(null)))),
            "expected undefined, got null"
        );
        assert_eq!(
            message(undefined().validate(Some(&json!([])))),
            "expected undefined, got an array"
        );
    }

    #[test]
    fn test_anything_never_fails() {
        assert_eq!(anything().validate(None), Ok(None));
        assert_eq!(
            anything().validate(Some(&json!({"a": 1}))),
            Ok(Some(json!({"a": 1})))
        );
    }

    #[test]
    fn test_constant_uses_structural_equality() {
        let point = constant_json(json!({"x": 1}));
        assert_eq!(point.validate(Some(&json!({"x": 1.0}))), Ok(json!({"x": 1})));
        assert_eq!(
            message(point.validate(Some(&json!({"x": 2})))),
            "expected {\"x\":1}, got {\"x\":2}"
        );
        assert_eq!(
            message(point.validate(None)),
            "expected {\"x\":1}, got undefined"
        );
    }

    #[test]
    fn test_constant_with_injected_equality() {
        let loose = constant("yes", |got: &Value, expected: &Value| {
            got.as_str().map(str::to_lowercase) == expected.as_str().map(str::to_string)
        });
        assert_eq!(loose.validate(Some(&json!("YES"))), Ok("yes"));
        assert!(loose.validate(Some(&json!("no"))).is_err());
    }

    #[test]
    fn test_succeed_and_fail_ignore_input() {
        assert_eq!(succeed(7).validate(None), Ok(7));
        assert_eq!(succeed(7).validate(Some(&json!("x"))), Ok(7));

        let error = fail::<i32>("nope").validate(Some(&json!(1))).unwrap_err();
        assert_eq!(error.message, "nope");
        assert!(error.at.is_root());
    }
}
