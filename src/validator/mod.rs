//! Validator construction.
//!
//! [`Shape`] is the factory surface for every primitive and higher-order
//! validator; [`Validator`] carries the instance combinators and the entry
//! points. Validators are composed first and run later: building one never
//! looks at data.
//!
//! # Example
//!
//! ```rust
//! use surety::{Fields, Shape};
//! use serde_json::json;
//!
//! let todo = Shape::object_of(
//!     Fields::new()
//!         .field("title", Shape::string())
//!         .field("done", Shape::with_default(false, Shape::boolean()))
//!         .field("tags", Shape::optional(Shape::array_of(Shape::string()))),
//! );
//!
//! let error = todo.check(&json!({"title": "x", "tags": ["a", 1]})).unwrap_err();
//! assert_eq!(error.at, "input.tags[1]");
//! ```

mod array;
mod combinators;
mod core;
mod lazy;
mod object;
mod primitives;
mod run;
mod value_at;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::path::{JsonPath, PathSegment};
use crate::value::json_eq;

pub use array::TupleShape;
pub use self::core::Validator;
pub use object::Fields;
pub use run::log_to_stderr;

/// Entry point for creating validators.
///
/// Every factory returns a [`Validator`]; compound ones take the
/// validators of their parts.
///
/// # Example
///
/// ```rust
/// use surety::{Shape, Validator};
/// use serde_json::json;
///
/// let command: Validator<&str> = Shape::one_of(["start", "stop"]);
/// assert_eq!(command.check(&json!("stop")), Ok("stop"));
/// assert!(command.check(&json!("go")).is_err());
/// ```
pub struct Shape;

impl Shape {
    /// Accepts any JSON string.
    ///
    /// Fails with `expected a string, got <kind>` otherwise.
    pub fn string() -> Validator<String> {
        primitives::string()
    }

    /// Accepts any JSON number, as `f64`.
    pub fn number() -> Validator<f64> {
        primitives::number()
    }

    /// Accepts `true` or `false`.
    pub fn boolean() -> Validator<bool> {
        primitives::boolean()
    }

    /// Accepts only an absent value, e.g. a key that must not be set.
    pub fn undefined() -> Validator<()> {
        primitives::undefined()
    }

    /// Accepts anything, including an absent value (`None`).
    pub fn any() -> Validator<Option<Value>> {
        primitives::anything()
    }

    /// Accepts anything, including an absent value (`None`).
    ///
    /// Same behavior as [`Shape::any`]; use whichever reads better.
    pub fn unknown() -> Validator<Option<Value>> {
        primitives::anything()
    }

    /// Accepts a value structurally equal to `value`, and yields `value`.
    ///
    /// Arrays and objects compare deeply and numbers by numeric value.
    ///
    /// ```rust
    /// use surety::Shape;
    /// use serde_json::json;
    ///
    /// let origin = Shape::constant(json!({"x": 0, "y": 0}));
    /// assert!(origin.check(&json!({"y": 0, "x": 0})).is_ok());
    ///
    /// let error = origin.check(&json!({"x": 1, "y": 0})).unwrap_err();
    /// assert_eq!(error.message, r#"expected {"x":0,"y":0}, got {"x":1,"y":0}"#);
    /// ```
    pub fn constant<T>(value: T) -> Validator<T>
    where
        T: Into<Value> + Clone + Send + Sync + 'static,
    {
        primitives::constant(value, json_eq)
    }

    /// Like [`Shape::constant`], with a caller-supplied equality.
    ///
    /// `eq` receives the input first and the expected value second.
    pub fn constant_by<T, F>(value: T, eq: F) -> Validator<T>
    where
        T: Into<Value> + Clone + Send + Sync + 'static,
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        primitives::constant(value, eq)
    }

    /// Accepts any JSON object and passes it through unvalidated.
    pub fn object() -> Validator<Map<String, Value>> {
        object::object()
    }

    /// Validates the declared fields of an object.
    ///
    /// Only declared fields end up in the result; other keys are dropped.
    /// A missing field that fails is reported as
    /// `the key '<name>' is required but was not present`.
    pub fn object_of(fields: Fields) -> Validator<Map<String, Value>> {
        object::object_of(fields)
    }

    /// Like [`Shape::object_of`], but also fails on undeclared keys.
    ///
    /// ```rust
    /// use surety::{Fields, Shape};
    /// use serde_json::json;
    ///
    /// let strict = Shape::object_strict(Fields::new());
    /// let error = strict.check(&json!({"a": 1})).unwrap_err();
    /// assert_eq!(error.message, "an undefined key 'a' is present in the object");
    /// ```
    pub fn object_strict(fields: Fields) -> Validator<Map<String, Value>> {
        object::object_strict(fields)
    }

    /// Accepts any JSON array and passes it through unvalidated.
    pub fn array() -> Validator<Vec<Value>> {
        array::array()
    }

    /// Validates every element of an array.
    pub fn array_of<A: 'static>(element: Validator<A>) -> Validator<Vec<A>> {
        array::array_of(element)
    }

    /// Validates a fixed-length array, one validator per position.
    ///
    /// ```rust
    /// use surety::Shape;
    /// use serde_json::json;
    ///
    /// let point = Shape::tuple((Shape::number(), Shape::number()));
    /// assert_eq!(point.check(&json!([1, 2])), Ok((1.0, 2.0)));
    ///
    /// let error = point.check(&json!([1, 2, 3])).unwrap_err();
    /// assert_eq!(error.message, "expected a tuple of length 2, got one of length 3");
    /// ```
    pub fn tuple<T: TupleShape>(elements: T) -> Validator<T::Output> {
        elements.into_validator()
    }

    /// Validates a fixed-length array where every position has the same
    /// output type. The length is the number of validators.
    pub fn tuple_of<A: 'static>(elements: Vec<Validator<A>>) -> Validator<Vec<A>> {
        array::tuple_of(elements)
    }

    /// Validates every value of an object, keeping its keys.
    pub fn dict<A: 'static>(value: Validator<A>) -> Validator<IndexMap<String, A>> {
        object::dict(value)
    }

    /// Accepts an absent value as `None`; anything else, `null` included,
    /// must pass `inner`.
    pub fn optional<A: 'static>(inner: Validator<A>) -> Validator<Option<A>> {
        combinators::optional(inner)
    }

    /// Tries each branch in order; the first success wins.
    ///
    /// Branches are validators or literals (`&'static str`, `String`,
    /// `f64`, `i64`, `bool`), which match by equality. When all fail,
    /// the message lists every branch's error.
    pub fn one_of<A, B, I>(branches: I) -> Validator<A>
    where
        A: 'static,
        B: Into<Validator<A>>,
        I: IntoIterator<Item = B>,
    {
        combinators::one_of(branches.into_iter().map(Into::into).collect())
    }

    /// The union of several shapes; the first matching one wins.
    ///
    /// Identical to [`Shape::one_of`]. Shapes with different outputs are
    /// joined by mapping each into a shared enum.
    ///
    /// ```rust
    /// use surety::{Shape, Validator};
    /// use serde_json::json;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum Id {
    ///     Text(String),
    ///     Numeric(f64),
    /// }
    ///
    /// let id: Validator<Id> = Shape::union([
    ///     Shape::string().map(Id::Text),
    ///     Shape::number().map(Id::Numeric),
    /// ]);
    /// assert_eq!(id.check(&json!(7)), Ok(Id::Numeric(7.0)));
    /// ```
    pub fn union<A, B, I>(branches: I) -> Validator<A>
    where
        A: 'static,
        B: Into<Validator<A>>,
        I: IntoIterator<Item = B>,
    {
        Self::one_of(branches)
    }

    /// Runs every validator on the same input and merges their objects;
    /// on a key collision the later validator wins.
    pub fn intersection<I>(parts: I) -> Validator<Map<String, Value>>
    where
        I: IntoIterator<Item = Validator<Map<String, Value>>>,
    {
        combinators::intersection(parts.into_iter().collect())
    }

    /// Never fails: substitutes `default` when `inner` fails.
    pub fn with_default<A>(default: A, inner: Validator<A>) -> Validator<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        combinators::with_default(default, inner)
    }

    /// Validates the value found by following `path` into the input.
    ///
    /// Keys walk into objects and indices into arrays. A path that leads
    /// nowhere fails with `path does not exist`, unless the validator
    /// accepts an absent value.
    ///
    /// ```rust
    /// use surety::{path, Shape};
    /// use serde_json::json;
    ///
    /// let first = Shape::value_at(path!["a", "b", 0usize], Shape::string());
    /// assert_eq!(
    ///     first.check(&json!({"a": {"b": ["surprise!"]}})),
    ///     Ok("surprise!".to_string())
    /// );
    /// ```
    pub fn value_at<A, S, P>(path: P, inner: Validator<A>) -> Validator<A>
    where
        A: 'static,
        S: Into<PathSegment>,
        P: IntoIterator<Item = S>,
    {
        value_at::value_at(path.into_iter().map(Into::into).collect::<JsonPath>(), inner)
    }

    /// Always succeeds with `value`, whatever the input.
    pub fn succeed<A>(value: A) -> Validator<A>
    where
        A: Clone + Send + Sync + 'static,
    {
        primitives::succeed(value)
    }

    /// Always fails with `message`, whatever the input.
    pub fn fail<A: 'static>(message: impl Into<String>) -> Validator<A> {
        primitives::fail(message)
    }

    /// Defers building a validator until it runs, calling `build` on every
    /// validation. Needed for recursive shapes.
    ///
    /// ```rust
    /// use surety::{Fields, Shape, Validator};
    /// use serde_json::{json, Map, Value};
    ///
    /// fn tree() -> Validator<Map<String, Value>> {
    ///     Shape::object_of(
    ///         Fields::new()
    ///             .field("value", Shape::number())
    ///             .field("children", Shape::array_of(Shape::lazy(tree))),
    ///     )
    /// }
    ///
    /// let leaf = json!({"value": 2, "children": []});
    /// assert!(tree().check(&json!({"value": 1, "children": [leaf]})).is_ok());
    /// ```
    pub fn lazy<A, F>(build: F) -> Validator<A>
    where
        A: 'static,
        F: Fn() -> Validator<A> + Send + Sync + 'static,
    {
        lazy::lazy(build)
    }

    /// Like [`Shape::lazy`], but keeps the validator built on the first
    /// call. `build` must always produce an equivalent validator.
    pub fn lazy_once<A, F>(build: F) -> Validator<A>
    where
        A: 'static,
        F: Fn() -> Validator<A> + Send + Sync + 'static,
    {
        lazy::lazy_once(build)
    }
}

/// Builds a [`JsonPath`] from keys and indices, for [`Shape::value_at`].
///
/// ```rust
/// use surety::path;
///
/// assert_eq!(path!["users", 3usize, "name"].to_string(), ".users[3].name");
/// ```
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        <$crate::JsonPath as ::std::iter::FromIterator<$crate::PathSegment>>::from_iter([
            $($crate::PathSegment::from($segment)),*
        ])
    };
}
