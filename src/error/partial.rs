use serde_json::Value;

use crate::error::ValidationError;
use crate::path::{JsonPath, PathSegment};

/// An in-flight failure that has not reached the entry point yet.
///
/// `at` holds only the route below the validator that is currently
/// unwinding; an empty path means no location has been recorded. An empty
/// message stands for "no message".
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct PartialError {
    pub(crate) at: JsonPath,
    pub(crate) message: String,
}

impl PartialError {
    /// A failure located at the current position.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            at: JsonPath::root(),
            message: message.into(),
        }
    }

    /// A failure located at `at`, relative to the current position.
    pub(crate) fn at(at: JsonPath, message: impl Into<String>) -> Self {
        Self {
            at,
            message: message.into(),
        }
    }

    /// Prepends an object key to the location.
    pub(crate) fn in_field(mut self, name: &str) -> Self {
        self.at.prepend_segment(PathSegment::field(name));
        self
    }

    /// Prepends an array index to the location.
    pub(crate) fn in_index(mut self, idx: usize) -> Self {
        self.at.prepend_segment(PathSegment::Index(idx));
        self
    }

    /// Prepends a whole path to the location.
    pub(crate) fn in_path(mut self, prefix: &JsonPath) -> Self {
        self.at.prepend(prefix);
        self
    }

    /// Promotes this error into a public one rooted at `input`.
    pub(crate) fn complete(self, input: Option<&Value>) -> ValidationError {
        ValidationError {
            input: input.cloned(),
            at: self.at.rooted(),
            message: self.message,
            path: self.at,
        }
    }
}
