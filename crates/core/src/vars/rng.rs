//! The random source shared by every random-consuming accessor.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Generator a host builds once and lends to every call that needs entropy.
///
/// Reusing one instance avoids identical draws when calls happen in quick
/// succession. Use [`VarRng::seeded`] for reproducible runs.
#[derive(Debug, Clone)]
pub struct VarRng(StdRng);

impl VarRng {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Deterministic generator for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl RngCore for VarRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
