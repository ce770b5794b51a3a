//! Validation of a value found by walking a path into the input.

use serde_json::Value;

use crate::error::PartialError;
use crate::path::{JsonPath, PathSegment};
use crate::value::expected_got;

use super::core::Validator;

pub(crate) fn value_at<A: 'static>(path: JsonPath, inner: Validator<A>) -> Validator<A> {
    Validator::from_fn(move |input| {
        let mut current = input;
        let mut walked = JsonPath::root();

        for segment in path.segments() {
            walked = match segment {
                PathSegment::Field(name) => walked.push_field(name.as_str()),
                PathSegment::Index(idx) => walked.push_index(*idx),
            };

            current = match (current, segment) {
                (None, _) => return Err(PartialError::at(walked, "path does not exist")),
                (Some(Value::Object(map)), PathSegment::Field(name)) => map.get(name),
                (Some(other), PathSegment::Field(_)) => {
                    return Err(PartialError::at(walked, expected_got("an object", Some(other))))
                }
                (Some(Value::Array(items)), PathSegment::Index(idx)) => items.get(*idx),
                (Some(other), PathSegment::Index(_)) => {
                    return Err(PartialError::at(walked, expected_got("an array", Some(other))))
                }
            };
        }

        // The inner validator still runs on an absent value so that
        // `optional` can accept it.
        inner.validate(current).map_err(|e| match current {
            None => PartialError::at(path.clone(), "path does not exist"),
            Some(_) => e.in_path(&path),
        })
    })
}
