//! The result algebra validators are composed with.
//!
//! These are plain functions over [`std::result::Result`]. Validator
//! combinators route every success and failure through them, so error
//! propagation has one definition: the first error met wins and is passed
//! on untouched.

/// Wraps a value as a success.
pub fn ok<V, E>(value: V) -> Result<V, E> {
    Ok(value)
}

/// Wraps an error as a failure.
pub fn err<V, E>(error: E) -> Result<V, E> {
    Err(error)
}

/// Applies `f` to a success; a failure is passed through unchanged.
pub fn map<A, B, E>(f: impl FnOnce(A) -> B, r: Result<A, E>) -> Result<B, E> {
    match r {
        Ok(a) => Ok(f(a)),
        Err(e) => Err(e),
    }
}

/// Combines two results with `f`.
///
/// Short-circuits on the first error in argument order: if both `ra` and
/// `rb` failed, the error of `ra` is returned.
///
/// ```rust
/// use surety::result::{err, map2, ok};
///
/// let sum = map2(|a: i32, b: i32| a + b, ok::<_, &str>(1), ok(2));
/// assert_eq!(sum, Ok(3));
///
/// let first = map2(|a: i32, b: i32| a + b, err("left"), err("right"));
/// assert_eq!(first, Err("left"));
/// ```
pub fn map2<A, B, C, E>(
    f: impl FnOnce(A, B) -> C,
    ra: Result<A, E>,
    rb: Result<B, E>,
) -> Result<C, E> {
    match (ra, rb) {
        (Ok(a), Ok(b)) => Ok(f(a, b)),
        (Err(e), _) => Err(e),
        (_, Err(e)) => Err(e),
    }
}

/// Chains a fallible step after a success.
pub fn and_then<A, B, E>(f: impl FnOnce(A) -> Result<B, E>, r: Result<A, E>) -> Result<B, E> {
    match r {
        Ok(a) => f(a),
        Err(e) => Err(e),
    }
}

/// Transforms the error channel only.
pub fn map_error<V, E, F>(f: impl FnOnce(E) -> F, r: Result<V, E>) -> Result<V, F> {
    match r {
        Ok(v) => Ok(v),
        Err(e) => Err(f(e)),
    }
}

/// Unwraps a success, falling back to `default` on failure.
pub fn with_default<V, E>(default: V, r: Result<V, E>) -> V {
    match r {
        Ok(v) => v,
        Err(_) => default,
    }
}

/// Keeps the values of the successful results, in order.
pub fn successes<V, E>(results: impl IntoIterator<Item = Result<V, E>>) -> Vec<V> {
    results.into_iter().filter_map(Result::ok).collect()
}
