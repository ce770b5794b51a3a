//! Object and dictionary validation.
//!
//! This module provides [`Fields`], the ordered set of field validators an
//! object validator checks, and the object/dict validators built on it.
//! Field validation stops at the first failing field.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::PartialError;
use crate::value::{expected_got, IntoValue};

use super::core::Validator;

/// The declared fields of an object validator, in declaration order.
///
/// Every field validator is erased to JSON; a field whose validator
/// produces an undefined value (e.g. an [`optional`](super::Shape::optional)
/// field that is missing) is left out of the result object.
///
/// # Example
///
/// ```rust
/// use surety::{Fields, Shape};
/// use serde_json::json;
///
/// let fields = Fields::new()
///     .field("name", Shape::string())
///     .field("nickname", Shape::optional(Shape::string()));
///
/// let person = Shape::object_of(fields);
/// let checked = person.check(&json!({"name": "Grace"})).unwrap();
/// assert_eq!(serde_json::Value::Object(checked), json!({"name": "Grace"}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fields {
    fields: IndexMap<String, Validator<Option<Value>>>,
}

impl Fields {
    /// Creates an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field. Declaring the same name twice replaces the
    /// validator but keeps the first position.
    pub fn field<A>(mut self, name: impl Into<String>, validator: Validator<A>) -> Self
    where
        A: IntoValue + 'static,
    {
        self.fields.insert(name.into(), validator.erase());
        self
    }

    /// Returns true if `name` is a declared field.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the declared field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn validate(&self, object: &Map<String, Value>) -> Result<Map<String, Value>, PartialError> {
        let mut validated = Map::new();

        for (name, validator) in &self.fields {
            let property = object.get(name);

            match validator.validate(property) {
                Ok(Some(v)) => {
                    validated.insert(name.clone(), v);
                }
                Ok(None) => {}
                Err(_) if property.is_none() => {
                    return Err(PartialError::new(format!(
                        "the key '{}' is required but was not present",
                        name
                    )));
                }
                Err(e) => return Err(e.in_field(name)),
            }
        }

        Ok(validated)
    }
}

fn as_object(input: Option<&Value>) -> Result<&Map<String, Value>, PartialError> {
    input
        .and_then(Value::as_object)
        .ok_or_else(|| PartialError::new(expected_got("an object", input)))
}

pub(crate) fn object() -> Validator<Map<String, Value>> {
    Validator::from_fn(|input| as_object(input).cloned())
}

pub(crate) fn object_of(fields: Fields) -> Validator<Map<String, Value>> {
    Validator::from_fn(move |input| fields.validate(as_object(input)?))
}

pub(crate) fn object_strict(fields: Fields) -> Validator<Map<String, Value>> {
    Validator::from_fn(move |input| {
        let object = as_object(input)?;
        let validated = fields.validate(object)?;

        match object.keys().find(|key| !fields.contains(key)) {
            Some(key) => Err(PartialError::new(format!(
                "an undefined key '{}' is present in the object",
                key
            ))),
            None => Ok(validated),
        }
    })
}

pub(crate) fn dict<A: 'static>(validator: Validator<A>) -> Validator<IndexMap<String, A>> {
    Validator::from_fn(move |input| {
        as_object(input)?
            .iter()
            .map(|(key, value)| {
                validator
                    .validate(Some(value))
                    .map(|v| (key.clone(), v))
                    .map_err(|e| e.in_field(key))
            })
            .collect()
    })
}
