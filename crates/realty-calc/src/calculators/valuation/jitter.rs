use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const JITTER_MIN: f64 = 0.9;
pub const JITTER_MAX: f64 = 1.1;

/// Supplies the multiplicative perturbation applied to each estimate.
pub trait JitterSource: Send + Sync {
    fn factor(&self) -> f64;
}

/// Uniform draw from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformJitter;

impl JitterSource for UniformJitter {
    fn factor(&self) -> f64 {
        rand::thread_rng().gen_range(JITTER_MIN..=JITTER_MAX)
    }
}

/// Uniform draws from a seeded generator shared across requests.
#[derive(Debug)]
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn factor(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(JITTER_MIN..=JITTER_MAX)
    }
}

/// Always returns the same factor; `FixedJitter::NONE` disables jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl FixedJitter {
    pub const NONE: Self = Self(1.0);
}

impl JitterSource for FixedJitter {
    fn factor(&self) -> f64 {
        self.0
    }
}
