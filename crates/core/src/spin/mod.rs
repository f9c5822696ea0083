//! Text spinning: resolving `{a|b|c}` alternation markup into plain text.
//!
//! The accessor only hands a variable's raw value to a [`Spinner`] and returns
//! whatever comes back. [`Spintax`] is the implementation shipped with the
//! crate; hosts with their own expansion rules can plug in another one.

pub mod spintax;

use rand::RngCore;

use crate::vars::SpinError;

pub use spintax::Spintax;

/// A text-spinning collaborator.
pub trait Spinner {
    /// Expand `text`, drawing every random choice from `rng`.
    fn expand(&self, text: &str, rng: &mut dyn RngCore) -> Result<String, SpinError>;
}
