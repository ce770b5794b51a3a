//! Array and tuple validation.
//!
//! Elements are validated in index order; the first failing element stops
//! the scan and its location gets the element's `[index]` in front.

use serde_json::Value;

use crate::error::PartialError;
use crate::result;
use crate::value::expected_got;

use super::core::Validator;

fn as_array(input: Option<&Value>) -> Result<&Vec<Value>, PartialError> {
    input
        .and_then(Value::as_array)
        .ok_or_else(|| PartialError::new(expected_got("an array", input)))
}

fn as_tuple(input: Option<&Value>, len: usize) -> Result<&Vec<Value>, PartialError> {
    match input {
        Some(Value::Array(items)) if items.len() == len => Ok(items),
        Some(Value::Array(items)) => Err(PartialError::new(format!(
            "expected a tuple of length {}, got one of length {}",
            len,
            items.len()
        ))),
        _ => Err(PartialError::new(expected_got(
            &format!("a tuple of length {}", len),
            input,
        ))),
    }
}

fn push<A>(mut items: Vec<A>, item: A) -> Vec<A> {
    items.push(item);
    items
}

pub(crate) fn array() -> Validator<Vec<Value>> {
    Validator::from_fn(|input| as_array(input).cloned())
}

pub(crate) fn array_of<A: 'static>(element: Validator<A>) -> Validator<Vec<A>> {
    Validator::from_fn(move |input| {
        let items = as_array(input)?;
        items
            .iter()
            .enumerate()
            .try_fold(Vec::with_capacity(items.len()), |validated, (i, item)| {
                let decoded = result::map_error(
                    |e: PartialError| e.in_index(i),
                    element.validate(Some(item)),
                );
                result::map2(push, Ok(validated), decoded)
            })
    })
}

pub(crate) fn tuple_of<A: 'static>(elements: Vec<Validator<A>>) -> Validator<Vec<A>> {
    Validator::from_fn(move |input| {
        let items = as_tuple(input, elements.len())?;
        elements
            .iter()
            .zip(items)
            .enumerate()
            .map(|(i, (element, item))| element.validate(Some(item)).map_err(|e| e.in_index(i)))
            .collect()
    })
}

/// A fixed-arity group of validators, one per tuple position.
///
/// Implemented for tuples of 1 to 8 validators; see
/// [`Shape::tuple`](super::Shape::tuple).
pub trait TupleShape {
    /// The tuple produced on success.
    type Output;

    /// Builds the tuple validator.
    fn into_validator(self) -> Validator<Self::Output>;
}

macro_rules! tuple_shape {
    ($len:expr => $($idx:tt $name:ident),+) => {
        impl<$($name: 'static),+> TupleShape for ($(Validator<$name>,)+) {
            type Output = ($($name,)+);

            fn into_validator(self) -> Validator<Self::Output> {
                Validator::from_fn(move |input| {
                    let items = as_tuple(input, $len)?;
                    Ok(($(
                        self.$idx
                            .validate(Some(&items[$idx]))
                            .map_err(|e| e.in_index($idx))?,
                    )+))
                })
            }
        }
    };
}

tuple_shape!(1 => 0 A);
tuple_shape!(2 => 0 A, 1 B);
tuple_shape!(3 => 0 A, 1 B, 2 C);
tuple_shape!(4 => 0 A, 1 B, 2 C, 3 D);
tuple_shape!(5 => 0 A, 1 B, 2 C, 3 D, 4 E);
tuple_shape!(6 => 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
tuple_shape!(7 => 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
tuple_shape!(8 => 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
