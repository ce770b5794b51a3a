//! The opaque [`Validator`] type and its instance combinators.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::error::PartialError;
use crate::result;
use crate::value::IntoValue;

use super::primitives;

/// Type alias for the traversal function a validator wraps.
pub(crate) type ValidateFn<A> =
    Arc<dyn Fn(Option<&Value>) -> Result<A, PartialError> + Send + Sync>;

/// A reusable check that interprets unknown JSON as an `A`.
///
/// Validators are built with the [`Shape`](super::Shape) factories and the
/// combinators on this type, then run with [`Validator::check`]. They are
/// immutable: every combinator returns a new validator that closes over the
/// old one. Cloning is cheap and validators can be shared across threads.
///
/// # Example
///
/// ```rust
/// use surety::{Fields, Shape};
/// use serde_json::json;
///
/// let user = Shape::object_of(
///     Fields::new()
///         .field("name", Shape::string())
///         .field("age", Shape::number().where_(|age| *age >= 0.0, "age must not be negative")),
/// );
///
/// assert!(user.check(&json!({"name": "Ada", "age": 36})).is_ok());
///
/// let error = user.check(&json!({"name": "Ada", "age": -1})).unwrap_err();
/// assert_eq!(error.at, "input.age");
/// assert_eq!(error.message, "age must not be negative");
/// ```
pub struct Validator<A> {
    validate: ValidateFn<A>,
}

impl<A> Clone for Validator<A> {
    fn clone(&self) -> Self {
        Self {
            validate: Arc::clone(&self.validate),
        }
    }
}

impl<A> fmt::Debug for Validator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("output", &std::any::type_name::<A>())
            .finish_non_exhaustive()
    }
}

impl<A: 'static> Validator<A> {
    pub(crate) fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>) -> Result<A, PartialError> + Send + Sync + 'static,
    {
        Self {
            validate: Arc::new(f),
        }
    }

    /// Runs the traversal. `None` stands for an absent input.
    pub(crate) fn validate(&self, input: Option<&Value>) -> Result<A, PartialError> {
        (self.validate)(input)
    }

    /// Transforms the value produced by a successful validation.
    ///
    /// Failures pass through unchanged.
    ///
    /// ```rust
    /// use surety::Shape;
    /// use serde_json::json;
    ///
    /// let length = Shape::string().map(|s| s.len());
    /// assert_eq!(length.check(&json!("four")), Ok(4));
    /// ```
    pub fn map<B, F>(self, f: F) -> Validator<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Validator::from_fn(move |input| result::map(&f, self.validate(input)))
    }

    /// Picks the next validator from the value this one produced.
    ///
    /// The validator returned by `f` runs against the *original* input,
    /// not against the intermediate value, which allows selecting a shape
    /// by a field of the input (a version tag, a discriminant).
    ///
    /// ```rust
    /// use surety::Shape;
    /// use serde_json::json;
    ///
    /// let versioned = Shape::value_at(["version"], Shape::number()).and_then(|version| {
    ///     if version == 1.0 {
    ///         Shape::value_at(["name"], Shape::string())
    ///     } else {
    ///         Shape::value_at(["fullName"], Shape::string())
    ///     }
    /// });
    ///
    /// assert_eq!(versioned.check(&json!({"version": 1, "name": "a"})), Ok("a".to_string()));
    /// assert_eq!(versioned.check(&json!({"version": 2, "fullName": "b"})), Ok("b".to_string()));
    /// ```
    pub fn and_then<B, F>(self, f: F) -> Validator<B>
    where
        B: 'static,
        F: Fn(A) -> Validator<B> + Send + Sync + 'static,
    {
        Validator::from_fn(move |input| {
            result::and_then(|value| f(value).validate(input), self.validate(input))
        })
    }

    /// Adds a predicate on the produced value.
    ///
    /// When the predicate fails, validation fails with `message` at the
    /// position this validator runs at.
    pub fn where_<P>(self, predicate: P, message: impl Into<String>) -> Validator<A>
    where
        A: Clone + Send + Sync,
        P: Fn(&A) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        self.and_then(move |value| {
            if predicate(&value) {
                primitives::succeed(value)
            } else {
                primitives::fail(message.clone())
            }
        })
    }
}

impl<A: IntoValue + 'static> Validator<A> {
    /// Forgets the output type, producing JSON again.
    ///
    /// A `None` output means the value is undefined.
    pub fn erase(self) -> Validator<Option<Value>> {
        self.map(IntoValue::into_value)
    }
}

impl Validator<String> {
    /// Requires the string to match a regular expression.
    ///
    /// Returns an error if the pattern is not a valid regex.
    ///
    /// ```rust
    /// use surety::Shape;
    /// use serde_json::json;
    ///
    /// let digits = Shape::string().matches(r"^\d+$").unwrap();
    /// assert!(digits.check(&json!("12345")).is_ok());
    ///
    /// let error = digits.check(&json!("12a45")).unwrap_err();
    /// assert_eq!(error.message, r"expected a string matching the pattern '^\d+$'");
    /// ```
    pub fn matches(self, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        let message = format!("expected a string matching the pattern '{}'", pattern);
        Ok(self.where_(move |s: &String| regex.is_match(s), message))
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator<Value>>();
    assert_sync::<Validator<Value>>();
};
