//! Helpers for describing and rebuilding JSON values.
//!
//! Inputs are `serde_json::Value`s, and a value that is not there at all
//! (a missing key, an index past the end) is represented as `None`. That
//! absence plays the role of "undefined" throughout the crate.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Categorizes a value for "expected X, got Y" messages.
pub fn describe(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    }
}

pub(crate) fn expected_got(expected: &str, got: Option<&Value>) -> String {
    format!("expected {}, got {}", expected, describe(got))
}

/// Renders a value as compact JSON, or `undefined` when absent.
pub fn render(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        // Value's Display is its compact JSON form and cannot fail.
        Some(v) => v.to_string(),
    }
}

/// Structural JSON equality.
///
/// Arrays compare element-wise, objects key-wise regardless of key order,
/// and numbers by numeric value, so `1` equals `1.0`.
pub fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            x == y || matches!((x.as_f64(), y.as_f64()), (Some(x), Some(y)) if x == y)
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| json_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).map_or(false, |y| json_eq(x, y)))
        }
        _ => a == b,
    }
}

/// Converts a validated output back into JSON.
///
/// `None` means the output is "undefined": object validators omit fields
/// whose validator produced `None`.
pub trait IntoValue {
    /// Converts `self` into a JSON value, or `None` for undefined.
    fn into_value(self) -> Option<Value>;
}

impl IntoValue for Value {
    fn into_value(self) -> Option<Value> {
        Some(self)
    }
}

impl IntoValue for () {
    fn into_value(self) -> Option<Value> {
        None
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Option<Value> {
        self.and_then(IntoValue::into_value)
    }
}

macro_rules! into_value_via_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Option<Value> {
                    Some(Value::from(self))
                }
            }
        )+
    };
}

into_value_via_from!(String, &'static str, bool, f64, i64, u64);

impl IntoValue for Map<String, Value> {
    fn into_value(self) -> Option<Value> {
        Some(Value::Object(self))
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Option<Value> {
        Some(Value::Array(
            self.into_iter()
                .map(|item| item.into_value().unwrap_or(Value::Null))
                .collect(),
        ))
    }
}

impl<T: IntoValue> IntoValue for IndexMap<String, T> {
    fn into_value(self) -> Option<Value> {
        Some(Value::Object(
            self.into_iter()
                .filter_map(|(key, item)| item.into_value().map(|v| (key, v)))
                .collect(),
        ))
    }
}

macro_rules! into_value_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: IntoValue),+> IntoValue for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_value(self) -> Option<Value> {
                let ($($name,)+) = self;
                Some(Value::Array(vec![
                    $($name.into_value().unwrap_or(Value::Null)),+
                ]))
            }
        }
    };
}

into_value_for_tuple!(A);
into_value_for_tuple!(A, B);
into_value_for_tuple!(A, B, C);
into_value_for_tuple!(A, B, C, D);
into_value_for_tuple!(A, B, C, D, E);
into_value_for_tuple!(A, B, C, D, E, F);
into_value_for_tuple!(A, B, C, D, E, F, G);
into_value_for_tuple!(A, B, C, D, E, F, G, H);
