//! Public validation error types.
//!
//! This module provides [`ValidationError`], the single error kind returned
//! by every validator, and [`ValidationErrors`] for combining the failures
//! of independent checks.

use std::error::Error;
use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::prelude::*;
use thiserror::Error;

use crate::path::JsonPath;
use crate::value::render;

/// A complete validation failure.
///
/// `ValidationError` captures:
/// - **input**: the original top-level value given to `check` (not the
///   nested value that failed), `None` when the input itself was absent
/// - **at**: where the failure happened, rooted at `input`
///   (e.g. `input.users[3].name`)
/// - **message**: what did not match
/// - **path**: the structured form of `at`
///
/// # Example
///
/// ```rust
/// use surety::Shape;
/// use serde_json::json;
///
/// let error = Shape::string().check(&json!(9001)).unwrap_err();
///
/// assert_eq!(error.at, "input");
/// assert_eq!(error.message, "expected a string, got a number");
/// assert_eq!(error.input, Some(json!(9001)));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Input: {}\nFailed at {at}: {message}", render_input(.input))]
pub struct ValidationError {
    /// The top-level value that was checked.
    pub input: Option<Value>,
    /// The location of the failure, rooted at `input`.
    pub at: String,
    /// Human-readable error message.
    pub message: String,
    /// The location of the failure as segments, without the root token.
    pub path: JsonPath,
}

fn render_input(input: &Option<Value>) -> String {
    render(input.as_ref())
}

impl ValidationError {
    /// Returns true if `error` is a `ValidationError`.
    ///
    /// Useful when failures arrive type-erased, e.g. inside a
    /// `Box<dyn Error>` next to errors from other libraries.
    ///
    /// ```rust
    /// use std::error::Error;
    /// use surety::{Shape, ValidationError};
    /// use serde_json::json;
    ///
    /// let boxed: Box<dyn Error> = Box::new(Shape::number().check(&json!("1")).unwrap_err());
    /// assert!(ValidationError::is(boxed.as_ref()));
    ///
    /// let other: Box<dyn Error> = "plain".into();
    /// assert!(!ValidationError::is(other.as_ref()));
    /// ```
    pub fn is(error: &(dyn Error + 'static)) -> bool {
        error.downcast_ref::<ValidationError>().is_some()
    }

    /// Returns the `ValidationError` behind a type-erased error, if it is one.
    pub fn from_dyn<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a ValidationError> {
        error.downcast_ref::<ValidationError>()
    }

    /// Short `Failed at <at>: <message>` form, without the input.
    pub fn summary(&self) -> String {
        format!("Failed at {}: {}", self.at, self.message)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors from independent checks.
///
/// A single `check` only ever reports one error. `ValidationErrors` exists
/// so callers can run several unrelated checks and collect every failure
/// through stillwater's `Validation`, which needs a `Semigroup` error type.
///
/// ```rust
/// use surety::{Shape, ValidationErrors};
/// use serde_json::json;
/// use stillwater::Validation;
///
/// let name = Shape::string().validation(&json!(1));
/// let age = Shape::number().validation(&json!("old"));
///
/// let both = Validation::<(String, f64), ValidationErrors>::all((name, age));
/// let errors = both.into_result().unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection holds at least one error.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error.summary())?;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::single(error)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error(at: &str, message: &str) -> ValidationError {
        ValidationError {
            input: Some(json!({"name": 1})),
            at: at.to_string(),
            message: message.to_string(),
            path: JsonPath::root(),
        }
    }

    #[test]
    fn test_display_renders_input_location_and_message() {
        let display = error("input.name", "expected a string, got a number").to_string();
        assert_eq!(
            display,
            "Input: {\"name\":1}\nFailed at input.name: expected a string, got a number"
        );
    }

    #[test]
    fn test_display_absent_input() {
        let mut e = error("input", "expected a string, got undefined");
        e.input = None;
        assert!(e.to_string().starts_with("Input: undefined\n"));
    }

    #[test]
    fn test_summary() {
        assert_eq!(error("input[2]", "nope").summary(), "Failed at input[2]: nope");
    }

    #[test]
    fn test_downcast_guard() {
        let boxed: Box<dyn Error + Send + Sync> = Box::new(error("input", "x"));
        assert!(ValidationError::is(boxed.as_ref()));
        assert_eq!(ValidationError::from_dyn(boxed.as_ref()).unwrap().at, "input");

        let io: Box<dyn Error + Send + Sync> =
            Box::new(std::io::Error::new(std::io::ErrorKind::Other, "io"));
        assert!(!ValidationError::is(io.as_ref()));
        assert!(ValidationError::from_dyn(io.as_ref()).is_none());
    }

    #[test]
    fn test_errors_combine_in_order() {
        let combined = ValidationErrors::single(error("input.a", "1"))
            .combine(ValidationErrors::single(error("input.b", "2")))
            .combine(ValidationErrors::single(error("input.a", "3")));

        assert_eq!(combined.len(), 3);
        assert!(!combined.is_empty());
        assert_eq!(combined.first().message, "1");
        assert_eq!(combined.iter().filter(|e| e.at == "input.a").count(), 2);

        let messages: Vec<_> = combined.into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_errors_display() {
        let errors = ValidationErrors::single(error("input.name", "required"))
            .combine(ValidationErrors::single(error("input.email", "invalid")));
        let display = errors.to_string();

        assert!(display.contains("2 error(s)"));
        assert!(display.contains("1. Failed at input.name: required"));
        assert!(display.contains("2. Failed at input.email: invalid"));
    }
}
