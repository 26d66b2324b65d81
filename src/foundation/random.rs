//! Shared seedable randomness.
//!
//! A [`RandomSource`] is owned by one `Painter` and may be shared across threads. Stages never
//! touch it directly: each draw call forks a call-local generator from it and threads that
//! generator through every stage as `&mut impl Rng`.

use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Generator handed to pipeline stages for the duration of one draw call.
pub type StageRng = StdRng;

/// Serialized stream of uniform randomness.
#[derive(Debug)]
pub struct RandomSource {
    inner: Mutex<StdRng>,
}

impl RandomSource {
    /// Deterministic source: the same seed yields the same sequence of forks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            inner: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Draw one seed from the shared stream and build an independent call-local generator.
    pub fn fork(&self) -> StageRng {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        StdRng::seed_from_u64(guard.random::<u64>())
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/random.rs"]
mod tests;
