#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand_distr::StandardNormal;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Provides the way to use randomized values in a generic way.
///
/// Every method advances the underlying generator state, so the call sequence
/// itself is part of the reproducibility contract: same seed, same algorithm,
/// same sequence of calls produce identical values.
pub trait Random {
    /// Produces a normally distributed value with zero mean and given standard deviation.
    fn gaussian(&self, stddev: Float) -> Float;

    /// Produces an integral random value, uniformly distributed on `[0, bound)`.
    /// `bound` must be positive.
    fn uniform_int(&self, bound: i32) -> i32;

    /// Produces a real random value, uniformly distributed on `[0, 1)`.
    fn uniform_real(&self) -> Float;

    /// Flips a coin and returns true if it is "heads", false otherwise.
    fn is_head_not_tails(&self) -> bool;
}

/// Specifies underlying random generator algorithm.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RngKind {
    /// Xoshiro256++ based generator (rand's `SmallRng` on 64-bit targets).
    #[default]
    Xoshiro,
    /// ChaCha12 based generator (rand's `StdRng`).
    ChaCha,
}

impl Display for RngKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RngKind::Xoshiro => write!(f, "xoshiro"),
            RngKind::ChaCha => write!(f, "chacha"),
        }
    }
}

impl FromStr for RngKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xoshiro" => Ok(RngKind::Xoshiro),
            "chacha" => Ok(RngKind::ChaCha),
            _ => Err(format!("unknown rng algorithm: '{s}'")),
        }
    }
}

enum InnerRng {
    Xoshiro(SmallRng),
    ChaCha(StdRng),
}

impl RngCore for InnerRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            InnerRng::Xoshiro(rng) => rng.next_u32(),
            InnerRng::ChaCha(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            InnerRng::Xoshiro(rng) => rng.next_u64(),
            InnerRng::ChaCha(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            InnerRng::Xoshiro(rng) => rng.fill_bytes(dest),
            InnerRng::ChaCha(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            InnerRng::Xoshiro(rng) => rng.try_fill_bytes(dest),
            InnerRng::ChaCha(rng) => rng.try_fill_bytes(dest),
        }
    }
}

/// A deterministically seedable random implementation.
pub struct SeedableRandom {
    rng: RefCell<InnerRng>,
}

impl SeedableRandom {
    /// Creates a new instance of `SeedableRandom` for given algorithm and seed.
    pub fn new(kind: RngKind, seed: u64) -> Self {
        let rng = match kind {
            RngKind::Xoshiro => InnerRng::Xoshiro(SmallRng::seed_from_u64(seed)),
            RngKind::ChaCha => InnerRng::ChaCha(StdRng::seed_from_u64(seed)),
        };

        Self { rng: RefCell::new(rng) }
    }
}

impl Default for SeedableRandom {
    fn default() -> Self {
        Self { rng: RefCell::new(InnerRng::Xoshiro(SmallRng::from_entropy())) }
    }
}

impl Random for SeedableRandom {
    fn gaussian(&self, stddev: Float) -> Float {
        let value: Float = self.rng.borrow_mut().sample(StandardNormal);
        stddev * value
    }

    fn uniform_int(&self, bound: i32) -> i32 {
        assert!(bound > 0);
        self.rng.borrow_mut().gen_range(0..bound)
    }

    fn uniform_real(&self) -> Float {
        self.rng.borrow_mut().gen_range(0.0..1.0)
    }

    fn is_head_not_tails(&self) -> bool {
        self.rng.borrow_mut().gen_bool(0.5)
    }
}
