//! # Surety
//!
//! Composable runtime validators that turn untrusted JSON into typed Rust
//! values, or into a precise error saying where and why the data is wrong.
//!
//! ## Overview
//!
//! A [`Validator<A>`] is a value: build it once from the [`Shape`] factories
//! and combinators, then run it on as many inputs as needed. Validation
//! stops at the first failure. The failure is reported as a
//! [`ValidationError`] carrying the original input, a location such as
//! `input.users[3].email`, and a message such as
//! `expected a string, got a number`.
//!
//! Absent values ("undefined", e.g. a missing object key) are modelled as
//! `None`, distinct from JSON `null`.
//!
//! ## Core Types
//!
//! - [`Validator`]: a reusable validation function producing an `A`
//! - [`Shape`]: entry point for creating validators
//! - [`Fields`]: the declared fields of an object validator
//! - [`ValidationError`]: a completed failure with input, location and message
//! - [`ValidationErrors`]: a non-empty collection of failures, for combining
//!   independent checks through stillwater's `Validation`
//! - [`JsonPath`]: the location of a value inside the input
//!
//! ## Example
//!
//! ```rust
//! use surety::{Fields, Shape};
//! use serde_json::json;
//!
//! let user = Shape::object_of(
//!     Fields::new()
//!         .field("name", Shape::string())
//!         .field("age", Shape::number().where_(|age| *age >= 0.0, "age must be positive"))
//!         .field("email", Shape::optional(Shape::string())),
//! );
//!
//! assert!(user.check(&json!({"name": "Ada", "age": 36})).is_ok());
//!
//! let error = user.check(&json!({"name": "Ada", "age": -1})).unwrap_err();
//! assert_eq!(error.at, "input.age");
//! assert_eq!(error.message, "age must be positive");
//! ```

pub mod error;
pub mod path;
pub mod result;
pub mod validator;
pub mod value;

pub use error::{ValidationError, ValidationErrors};
pub use path::{JsonPath, PathSegment};
pub use validator::{log_to_stderr, Fields, Shape, TupleShape, Validator};
pub use value::IntoValue;

/// Result of [`Validator::check`].
pub type CheckResult<A> = Result<A, ValidationError>;
