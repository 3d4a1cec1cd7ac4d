//! # Polynomial Rolling Hash
//!
//! This module implements a **polynomial rolling hash** over byte strings with **O(1)** substring
//! hash queries after **O(n)** preprocessing. It is the building block for Rabin-Karp substring
//! search (see [`crate::cs::string::rabin_karp`]).
//!
//! For a string `s` of length `n`, base `b` and prime modulus `p`, the engine stores the prefix
//! hashes
//!
//! ```text
//!   H[0] = s[0]
//!   H[i] = H[i-1] * b + s[i]            (mod p)
//! ```
//!
//! and answers a query for the inclusive range `[front, back]` with the prefix-removal identity
//!
//! ```text
//!   hash(front, back) = H[back] - H[front-1] * b^(back-front+1)   (mod p)
//! ```
//!
//! (or `H[back]` when `front == 0`).
//!
//! ## Key Features
//! - **Randomized base** drawn uniformly from `[2, p-2]` at construction, so inputs crafted to
//!   collide under a known base are useless.
//! - **Explicit base** for a second engine: two strings are only comparable when hashed under the
//!   *same* base, see [`PolyRollingHash::base`].
//! - **Injectable randomness** for reproducible hashes in tests.
//! - **Builder pattern** for easy parameter specification.
//!
//! **Note**: This is **not** cryptographically secure. Equal hashes mean equal strings only with
//! high probability (a collision of two fixed distinct strings of length `L` has probability at
//! most `L / p` over the choice of base).
//!
//! ```rust
//! use rabin_karp::cs::hashing::RollingHash;
//!
//! let text = RollingHash::new("abcabc");
//! let pattern = RollingHash::with_base("abc", text.base());
//!
//! assert_eq!(text.range_hash(3, 5).unwrap(), pattern.full_hash());
//! assert!(text.range_hash(4, 3).is_err());
//! ```

use std::ops::{Bound, RangeBounds};

use log::debug;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cs::randomized::RandomBase;
use crate::error::{Error, Result};
use crate::math::modular::{ModInt, DEFAULT_MODULUS};

/// A rolling hash over the default prime `10^9 + 7`.
pub type RollingHash = PolyRollingHash<DEFAULT_MODULUS>;

/// A builder for rolling hashes, allowing you to fix the base or the seed of the random draw.
#[derive(Debug, Clone, Default)]
pub struct RollingHashBuilder {
    base: Option<u64>,
    seed: Option<u64>,
}

impl RollingHashBuilder {
    /// Creates a new builder; by default the base is drawn from OS entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an explicit base (reduced modulo `p`), bypassing random generation.
    /// Takes precedence over [`with_seed`](Self::with_seed).
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = Some(base);
        self
    }

    /// Draws the base from a generator seeded with `seed`, for reproducible hashes.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds a rolling hash of `text` modulo [`DEFAULT_MODULUS`].
    pub fn build(&self, text: impl AsRef<[u8]>) -> RollingHash {
        self.build_with_modulus(text)
    }

    /// Builds a rolling hash of `text` modulo `MOD`.
    pub fn build_with_modulus<const MOD: u64>(
        &self,
        text: impl AsRef<[u8]>,
    ) -> PolyRollingHash<MOD> {
        match (self.base, self.seed) {
            (Some(base), _) => PolyRollingHash::with_base(text, base),
            (None, Some(seed)) => {
                PolyRollingHash::with_rng(text, &mut ChaCha20Rng::seed_from_u64(seed))
            }
            (None, None) => PolyRollingHash::new(text),
        }
    }
}

/// Prefix hashes of one string under one base, modulo `MOD`. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyRollingHash<const MOD: u64> {
    base: ModInt<MOD>,
    /// `prefix[i]` is the hash of `s[0..=i]`.
    prefix: Vec<ModInt<MOD>>,
}

impl<const MOD: u64> PolyRollingHash<MOD> {
    // [2, MOD - 2] must be a non-empty interval
    const VALID_MODULUS: () = assert!(MOD >= 5, "rolling hash modulus must be at least 5");

    /// Hashes `text` under a base drawn uniformly from `[2, MOD - 2]` using OS entropy.
    pub fn new(text: impl AsRef<[u8]>) -> Self {
        Self::with_rng(text, &mut StdRng::from_entropy())
    }

    /// Hashes `text` under a base drawn from `rng`.
    pub fn with_rng<R: Rng>(text: impl AsRef<[u8]>, rng: &mut R) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_MODULUS;
        let base = RandomBase::for_modulus(MOD, rng).make();
        Self::with_base(text, base)
    }

    /// Hashes `text` under an explicit base, typically [`base()`](Self::base) of another engine
    /// whose hashes this one must be compared against.
    pub fn with_base(text: impl AsRef<[u8]>, base: u64) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_MODULUS;
        let text = text.as_ref();
        let base = ModInt::from_u64(base);

        let mut prefix = Vec::with_capacity(text.len());
        let mut acc = ModInt::zero();
        for &byte in text {
            acc = acc * base + ModInt::from(byte);
            prefix.push(acc);
        }
        debug!(
            "built rolling hash: len={}, base={}, modulus={}",
            prefix.len(),
            base,
            MOD
        );

        Self { base, prefix }
    }

    /// The base this engine hashes under.
    pub fn base(&self) -> u64 {
        self.base.value()
    }

    /// Length of the hashed string.
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Hash of the inclusive range `s[front..=back]`.
    ///
    /// # Errors
    /// - [`Error::InvalidRange`] if `front > back`.
    /// - [`Error::OutOfBounds`] if `back >= len()`.
    pub fn range_hash(&self, front: usize, back: usize) -> Result<u64> {
        if front > back {
            return Err(Error::invalid_range(front, back));
        }
        if back >= self.len() {
            return Err(Error::out_of_bounds(back, self.len()));
        }
        let shift = self.base.pow((back - front + 1) as u64);
        Ok(self.window(front, back, shift).value())
    }

    /// Hash of `s[range]` for any range form. An empty range hashes to `0`.
    ///
    /// # Errors
    /// - [`Error::InvalidRange`] if the range starts after it ends.
    /// - [`Error::OutOfBounds`] if the range ends past `len()`.
    pub fn hash(&self, range: impl RangeBounds<usize>) -> Result<u64> {
        let start = match range.start_bound() {
            Bound::Included(&x) => x,
            Bound::Excluded(&x) => x.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&x) => x.saturating_add(1),
            Bound::Excluded(&x) => x,
            Bound::Unbounded => self.len(),
        };
        if start > end {
            return Err(Error::invalid_range(start, end));
        }
        if end > self.len() {
            return Err(Error::out_of_bounds(end - 1, self.len()));
        }
        if start == end {
            return Ok(0);
        }
        self.range_hash(start, end - 1)
    }

    /// Hash of the whole string; `0` for the empty string.
    pub fn full_hash(&self) -> u64 {
        self.prefix.last().map_or(0, |h| h.value())
    }

    /// Prefix-removal step shared by all queries. `shift` must be `base^(back - front + 1)`
    /// and the range must already be validated.
    #[inline]
    pub(crate) fn window(&self, front: usize, back: usize, shift: ModInt<MOD>) -> ModInt<MOD> {
        if front == 0 {
            self.prefix[back]
        } else {
            self.prefix[back] - self.prefix[front - 1] * shift
        }
    }

    pub(crate) fn base_mod(&self) -> ModInt<MOD> {
        self.base
    }
}

/// Hashes `data` from scratch as `sum data[i] * base^(n-1-i) mod MOD`, without prefix tables.
///
/// Agrees with [`PolyRollingHash::full_hash`] for the same base and modulus.
pub fn polynomial_hash<const MOD: u64>(data: &[u8], base: u64) -> u64 {
    let base = ModInt::<MOD>::from_u64(base);
    data.iter()
        .fold(ModInt::<MOD>::zero(), |acc, &byte| acc * base + ModInt::from(byte))
        .value()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: u64 = 257;

    #[test]
    fn test_prefix_hashes_follow_recurrence() {
        let h = RollingHash::with_base("abc", BASE);
        let a = b'a' as u64;
        let b = b'b' as u64;
        let c = b'c' as u64;
        assert_eq!(h.range_hash(0, 0).unwrap(), a);
        assert_eq!(h.range_hash(0, 1).unwrap(), a * BASE + b);
        assert_eq!(h.range_hash(0, 2).unwrap(), (a * BASE + b) * BASE + c);
        assert_eq!(h.range_hash(1, 2).unwrap(), b * BASE + c);
        assert_eq!(h.range_hash(2, 2).unwrap(), c);
    }

    #[test]
    fn test_range_hash_matches_direct_hash() {
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        for _ in 0..20 {
            let len = rng.gen_range(1..60);
            let text: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let h = RollingHash::with_rng(&text, &mut rng);
            for front in 0..len {
                for back in front..len {
                    assert_eq!(
                        h.range_hash(front, back).unwrap(),
                        polynomial_hash::<DEFAULT_MODULUS>(&text[front..=back], h.base()),
                        "range [{}, {}] of {:?}",
                        front,
                        back,
                        text
                    );
                }
            }
        }
    }

    #[test]
    fn test_full_range_is_full_hash() {
        let h = RollingHash::new("hello world");
        assert_eq!(h.range_hash(0, h.len() - 1).unwrap(), h.full_hash());
        assert_eq!(h.hash(..).unwrap(), h.full_hash());
    }

    #[test]
    fn test_small_modulus_stays_normalized() {
        let h = PolyRollingHash::<7>::with_base("zyxwvutsrq", 3);
        for front in 0..h.len() {
            for back in front..h.len() {
                let v = h.range_hash(front, back).unwrap();
                assert!(v < 7);
                assert_eq!(v, polynomial_hash::<7>(&b"zyxwvutsrq"[front..=back], 3));
            }
        }
    }

    #[test]
    fn test_equal_substrings_equal_hashes() {
        let h = RollingHash::new("abcXabc");
        assert_eq!(h.range_hash(0, 2).unwrap(), h.range_hash(4, 6).unwrap());
    }

    #[test]
    fn test_shared_base_makes_engines_comparable() {
        let text = RollingHash::new("the quick brown fox");
        let pattern = RollingHash::with_base("quick", text.base());
        assert_eq!(pattern.base(), text.base());
        assert_eq!(text.range_hash(4, 8).unwrap(), pattern.full_hash());
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        let h = RollingHash::new("mississippi");
        let first = h.range_hash(2, 7).unwrap();
        for _ in 0..10 {
            assert_eq!(h.range_hash(2, 7).unwrap(), first);
        }
    }

    #[test]
    fn test_invalid_range_is_an_error() {
        let h = RollingHash::new("abc");
        assert_eq!(
            h.range_hash(2, 1),
            Err(Error::InvalidRange { front: 2, back: 1 })
        );
        assert_eq!(
            h.range_hash(1, 3),
            Err(Error::OutOfBounds { index: 3, len: 3 })
        );
        assert!(h.hash((Bound::Included(2), Bound::Excluded(1))).is_err());
        assert!(h.hash(0..4).is_err());
    }

    #[test]
    fn test_range_bounds_forms() {
        let h = RollingHash::with_base("abcdef", BASE);
        let inclusive = h.range_hash(1, 3).unwrap();
        assert_eq!(h.hash(1..4).unwrap(), inclusive);
        assert_eq!(h.hash(1..=3).unwrap(), inclusive);
        assert_eq!(h.hash(..3).unwrap(), h.range_hash(0, 2).unwrap());
        assert_eq!(h.hash(3..).unwrap(), h.range_hash(3, 5).unwrap());
        assert_eq!(h.hash(2..2).unwrap(), 0);
        assert_eq!(h.hash(6..).unwrap(), 0);
    }

    #[test]
    fn test_empty_string() {
        let h = RollingHash::new("");
        assert!(h.is_empty());
        assert_eq!(h.full_hash(), 0);
        assert!(h.range_hash(0, 0).is_err());
        assert_eq!(h.hash(..).unwrap(), 0);
    }

    #[test]
    fn test_random_base_in_bounds() {
        for _ in 0..100 {
            let h = RollingHash::new("x");
            assert!((2..=DEFAULT_MODULUS - 2).contains(&h.base()));
        }
    }

    #[test]
    fn test_builder() {
        let explicit = RollingHashBuilder::new().with_base(BASE).build("abc");
        assert_eq!(explicit.base(), BASE);

        let a = RollingHashBuilder::new().with_seed(7).build("abc");
        let b = RollingHashBuilder::new().with_seed(7).build("abc");
        assert_eq!(a.base(), b.base());
        assert_eq!(a, b);

        let small: PolyRollingHash<101> = RollingHashBuilder::new()
            .with_base(205)
            .build_with_modulus("abc");
        assert_eq!(small.base(), 3);
    }

    #[test]
    fn test_base_reduced_modulo_p() {
        let h = RollingHash::with_base("ab", DEFAULT_MODULUS + BASE);
        assert_eq!(h.base(), BASE);
        assert_eq!(
            h.full_hash(),
            RollingHash::with_base("ab", BASE).full_hash()
        );
    }
}
