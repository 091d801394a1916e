// ============================================================================
// Random Source Interface
// Defines the contract for uniform [0, 1) randomness
// ============================================================================

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed samples in `[0, 1)`.
///
/// `rand_int_with` scales these samples into an integer range, so any
/// implementation that honours the half-open interval yields uniform
/// integers. Tests inject [`SequenceRandom`] or [`SeededRandom`] to make
/// draws deterministic.
pub trait RandomSource {
    /// Next sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Get the source name for logging
    fn name(&self) -> &str;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Thread-local generator, lazily seeded by the OS.
#[derive(Debug, Clone)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn name(&self) -> &str {
        "thread"
    }
}

/// Reproducible generator seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        tracing::debug!(seed, "seeding random source");
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn name(&self) -> &str {
        "seeded"
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
///
/// Samples are returned as given; values outside `[0, 1)` are the caller's
/// responsibility. An empty list always yields `0.0`.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    samples: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.next];
        self.next = (self.next + 1) % self.samples.len();
        sample
    }

    fn name(&self) -> &str {
        "sequence"
    }
}
