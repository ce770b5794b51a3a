//! Combinators composing validators: optional, alternatives,
//! intersections and fallbacks.
//!
//! - `optional`: an absent value is accepted
//! - `one_of`: the first matching branch wins
//! - `intersection`: every validator must match; object results merge
//! - `with_default`: failures are replaced by a default value

use serde_json::{Map, Value};

use crate::error::PartialError;
use crate::result;

use super::core::Validator;

pub(crate) fn optional<A: 'static>(inner: Validator<A>) -> Validator<Option<A>> {
    Validator::from_fn(move |input| match input {
        None => Ok(None),
        Some(_) => inner.validate(input).map(Some),
    })
}

/// Tries each branch in order and returns the first success.
///
/// When every branch fails, the combined message carries a JSON array of
/// strings, one `at error<location>: <message>` entry per branch. Branch
/// locations are part of the text only; the combined failure sits at the
/// current position.
pub(crate) fn one_of<A: 'static>(branches: Vec<Validator<A>>) -> Validator<A> {
    Validator::from_fn(move |input| {
        let mut errors = Vec::with_capacity(branches.len());

        for branch in &branches {
            match branch.validate(input) {
                Ok(v) => return Ok(v),
                Err(e) => errors.push(format!("at error{}: {}", e.at, e.message)),
            }
        }

        Err(PartialError::new(format!(
            "expected a value matching one of the decoders, got the errors {}",
            Value::from(errors)
        )))
    })
}

fn merge(mut merged: Map<String, Value>, next: Map<String, Value>) -> Map<String, Value> {
    merged.extend(next);
    merged
}

pub(crate) fn intersection(
    parts: Vec<Validator<Map<String, Value>>>,
) -> Validator<Map<String, Value>> {
    Validator::from_fn(move |input| {
        parts.iter().try_fold(Map::new(), |merged, part| {
            result::map2(merge, Ok(merged), part.validate(input))
        })
    })
}

pub(crate) fn with_default<A>(default: A, inner: Validator<A>) -> Validator<A>
where
    A: Clone + Send + Sync + 'static,
{
    Validator::from_fn(move |input| {
        Ok(inner.validate(input).unwrap_or_else(|_| default.clone()))
    })
}
