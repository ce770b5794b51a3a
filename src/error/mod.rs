//! Error types for validation failures.
//!
//! Validators report failures as crate-internal [`PartialError`]s that know
//! only the part of the path below the validator that produced them. The
//! public entry point promotes them into complete [`ValidationError`]s.

mod partial;
mod validation_error;

pub(crate) use partial::PartialError;
pub use validation_error::{ValidationError, ValidationErrors};
