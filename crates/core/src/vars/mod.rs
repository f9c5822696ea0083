//! Typed access to host-supplied local variables.
//!
//! A [`Variable`] is a name and a raw string value. This module turns that
//! string into typed values:
//! - booleans and integers
//! - separator-delimited lists and file lines
//! - random integers from a `<min>-<max>` or `<bound>` grammar ([`RangeSpec`])
//! - spun text via a [`crate::spin::Spinner`]
//!
//! and checks preconditions on it (presence, file or directory referent).

pub mod errors;
pub mod range;
pub mod rng;
pub mod variable;

pub use errors::{ParseError, SpinError, ValidationError, VarError};
pub use range::RangeSpec;
pub use rng::VarRng;
pub use variable::{DEFAULT_SEPARATOR, Variable};
