//! Gaussian noise source shared by the sensor models
//!
//! Box-Muller transform over a uniform `StdRng`. Every sensor owns one
//! generator; seeding them makes a whole run reproducible, which the tests
//! rely on for the otherwise non-deterministic rain and noise paths.

use core::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Box-Muller normal generator
#[derive(Debug, Clone)]
pub struct RandomGaussian {
    rng: StdRng,
}

impl RandomGaussian {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Deterministic generator for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Draw one sample from N(mean, std²)
    ///
    /// With `std == 0` the result is exactly `mean`, which is what lets the
    /// noiseless sensor tests compare outputs with `==`.
    pub fn sample(&mut self, mean: f64, std: f64) -> f64 {
        // 1 - U keeps u1 in (0, 1] so ln(u1) stays finite
        let u1 = 1.0 - self.rng.gen::<f64>();
        let u2 = 1.0 - self.rng.gen::<f64>();
        let r = (-2.0 * u1.ln()).sqrt();
        mean + std * r * (TAU * u2).cos()
    }

    /// Draw one sample from N(0, 1)
    pub fn standard(&mut self) -> f64 {
        self.sample(0.0, 1.0)
    }
}

impl Default for RandomGaussian {
    fn default() -> Self {
        Self::from_entropy()
    }
}
