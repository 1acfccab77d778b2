//! Random source used for helicopter respawns
//!
//! Any `rand::Rng` works; the default world uses a seeded `Pcg32`. Tests can
//! implement [`RandomSource`] directly to script exact values.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// The randomness the simulation consumes
pub trait RandomSource {
    /// Uniform sample from `[min, max]`; returns `min` for an empty band
    fn range(&mut self, min: f32, max: f32) -> f32;

    /// Fair coin
    fn coin_flip(&mut self) -> bool;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        self.random_range(min..=max)
    }

    fn coin_flip(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

/// Default generator for a session seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
