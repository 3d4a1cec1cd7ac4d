//! Uniform sampling of polynomial hash bases.
//!
//! A rolling hash with a fixed, publicly known base can be attacked with inputs crafted to
//! collide ("anti-hash tests"). Drawing the base uniformly at random per hasher defeats this.
//! The random source is a type parameter so tests can inject a seeded generator and get
//! reproducible bases.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{Error, Result};

/// Draws integers uniformly from a closed interval `[min, max]`.
///
/// ```rust
/// use rabin_karp::cs::randomized::RandomBase;
///
/// let mut bases = RandomBase::seeded(2, 1_000_000_005, 42).unwrap();
/// let b = bases.make();
/// assert!((2..=1_000_000_005).contains(&b));
/// ```
#[derive(Debug, Clone)]
pub struct RandomBase<R = StdRng> {
    rng: R,
    range: Uniform<u64>,
    min: u64,
    max: u64,
}

impl RandomBase<StdRng> {
    /// Creates a sampler seeded from the operating system's entropy pool.
    ///
    /// # Errors
    /// - [`Error::InvalidBounds`] if `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self> {
        Self::with_rng(min, max, StdRng::from_entropy())
    }

    /// Creates a deterministic sampler from a fixed seed.
    ///
    /// # Errors
    /// - [`Error::InvalidBounds`] if `min > max`.
    pub fn seeded(min: u64, max: u64, seed: u64) -> Result<RandomBase<ChaCha20Rng>> {
        RandomBase::with_rng(min, max, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomBase<R> {
    /// Creates a sampler drawing from the given generator.
    ///
    /// # Errors
    /// - [`Error::InvalidBounds`] if `min > max`.
    pub fn with_rng(min: u64, max: u64, rng: R) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidBounds { min, max });
        }
        Ok(Self {
            rng,
            range: Uniform::new_inclusive(min, max),
            min,
            max,
        })
    }

    /// Draws the next value in `[min, max]`.
    pub fn make(&mut self) -> u64 {
        self.range.sample(&mut self.rng)
    }

    /// The inclusive bounds `(min, max)`.
    pub fn bounds(&self) -> (u64, u64) {
        (self.min, self.max)
    }

    /// Sampler over `[2, modulus - 2]`, the admissible bases for a polynomial hash mod `modulus`.
    ///
    /// Callers guarantee `modulus >= 4`.
    pub(crate) fn for_modulus(modulus: u64, rng: R) -> Self {
        let (min, max) = (2, modulus - 2);
        Self {
            rng,
            range: Uniform::new_inclusive(min, max),
            min,
            max,
        }
    }
}
