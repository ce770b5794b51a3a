//! Entry points that run a validator and complete its errors.
//!
//! [`Validator::check`] is the single place where in-flight errors are
//! rooted at `input` and paired with the checked value. Every other entry
//! point here is a thin adapter over its result.

use std::future::{ready, Ready};

use serde_json::Value;
use stillwater::Validation;
use tracing::debug;

use crate::error::{PartialError, ValidationError, ValidationErrors};
use crate::result;
use crate::value::render;

use super::core::Validator;

/// Default logger for [`Validator::is_valid`]: writes to standard error.
///
/// Each failure is written as two lines:
///
/// ```text
/// validation failed at <at>: <message>
/// input: <input as compact JSON, or undefined>
/// ```
pub fn log_to_stderr(at: &str, input: Option<&Value>, message: &str) {
    eprintln!("{}", stderr_report(at, input, message));
}

fn stderr_report(at: &str, input: Option<&Value>, message: &str) -> String {
    format!(
        "validation failed at {}: {}\ninput: {}",
        at,
        message,
        render(input)
    )
}

impl<A: 'static> Validator<A> {
    /// Validates `data`, producing the typed value or a complete error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use surety::Shape;
    /// use serde_json::json;
    ///
    /// let numbers = Shape::array_of(Shape::number());
    ///
    /// assert_eq!(numbers.check(&json!([1, 2])), Ok(vec![1.0, 2.0]));
    ///
    /// let error = numbers.check(&json!([1, 2, "x"])).unwrap_err();
    /// assert_eq!(error.at, "input[2]");
    /// assert_eq!(error.message, "expected a number, got a string");
    /// assert_eq!(error.input, Some(json!([1, 2, "x"])));
    /// ```
    pub fn check(&self, data: &Value) -> Result<A, ValidationError> {
        self.check_input(Some(data))
    }

    /// Validates a possibly absent input.
    ///
    /// `None` is treated like a missing value: only validators accepting
    /// undefined (e.g. `optional`, `undefined`, `unknown`) succeed.
    pub fn check_input(&self, data: Option<&Value>) -> Result<A, ValidationError> {
        result::map_error(
            |error: PartialError| {
                let error = error.complete(data);
                debug!(at = %error.at, message = %error.message, "validation failed");
                error
            },
            self.validate(data),
        )
    }

    /// Validates `data` and panics on failure.
    ///
    /// # Panics
    ///
    /// Panics with the rendered [`ValidationError`] (input, location and
    /// message) if validation fails.
    pub fn check_or_panic(&self, data: &Value) -> A {
        match self.check(data) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }

    /// Validates `data` into an already-resolved future.
    ///
    /// The work happens synchronously before this returns; the future only
    /// adapts the result for callers that expect one.
    pub fn as_future(&self, data: &Value) -> Ready<Result<A, ValidationError>> {
        ready(self.check(data))
    }

    /// Returns `None` on success, or `Failed at <at>: <message>`.
    pub fn check_message(&self, data: &Value) -> Option<String> {
        self.check(data).err().map(|e| e.summary())
    }

    /// Returns whether `data` is valid, logging failures to standard error.
    pub fn is_valid(&self, data: &Value) -> bool {
        self.is_valid_with(data, log_to_stderr)
    }

    /// Returns whether `data` is valid, reporting a failure to `log` as
    /// `(at, input, message)`.
    ///
    /// ```rust
    /// use surety::Shape;
    /// use serde_json::json;
    ///
    /// let mut seen = Vec::new();
    /// let valid = Shape::boolean().is_valid_with(&json!("yes"), |at, _input, message| {
    ///     seen.push(format!("{}: {}", at, message));
    /// });
    ///
    /// assert!(!valid);
    /// assert_eq!(seen, vec!["input: expected a boolean, got a string"]);
    /// ```
    pub fn is_valid_with<L>(&self, data: &Value, mut log: L) -> bool
    where
        L: FnMut(&str, Option<&Value>, &str),
    {
        match self.check(data) {
            Ok(_) => true,
            Err(e) => {
                log(&e.at, e.input.as_ref(), &e.message);
                false
            }
        }
    }

    /// Validates `data` into stillwater's `Validation`.
    ///
    /// A single check still stops at its first failure; the error side is
    /// a [`ValidationErrors`] so results of independent checks can be
    /// combined with `Validation::all`.
    pub fn validation(&self, data: &Value) -> Validation<A, ValidationErrors> {
        match self.check(data) {
            Ok(v) => Validation::Success(v),
            Err(e) => Validation::Failure(ValidationErrors::single(e)),
        }
    }
}
