//! Deferred construction for recursive validators.
//!
//! A validator cannot mention itself while it is being built. Wrapping the
//! recursive reference in a builder defers construction until the input is
//! actually validated.

use parking_lot::RwLock;
use tracing::trace;

use super::core::Validator;

/// Builds the wrapped validator on every validation call.
pub(crate) fn lazy<A, F>(build: F) -> Validator<A>
where
    A: 'static,
    F: Fn() -> Validator<A> + Send + Sync + 'static,
{
    Validator::from_fn(move |input| build().validate(input))
}

/// Builds the wrapped validator on the first call and reuses it after.
///
/// The builder runs outside the lock; if two threads race on the first
/// call both build, and the later one is kept.
pub(crate) fn lazy_once<A, F>(build: F) -> Validator<A>
where
    A: 'static,
    F: Fn() -> Validator<A> + Send + Sync + 'static,
{
    let cell: RwLock<Option<Validator<A>>> = RwLock::new(None);

    Validator::from_fn(move |input| {
        let cached = cell.read().clone();
        let validator = match cached {
            Some(v) => v,
            None => {
                trace!("building deferred validator");
                let built = build();
                *cell.write() = Some(built.clone());
                built
            }
        };
        validator.validate(input)
    })
}
