//! # Rabin-Karp Substring Search
//!
//! Finds occurrences of a pattern in a text by comparing rolling hashes of every length-`m`
//! window of the text against the hash of the pattern. The text and the pattern are hashed by two
//! [`PolyRollingHash`] engines sharing **one** randomly drawn base; hashes under independent bases
//! live in unrelated value spaces and comparing them would be meaningless.
//!
//! After `O(n + m)` preprocessing, each window costs `O(1)`: the shift `base^m` is the same for all
//! windows and is computed once.
//!
//! A hash match is reported as an occurrence. Two distinct windows collide with probability at
//! most `m / p` each, so across a scan of `n` windows the false-positive probability is bounded by
//! roughly `n * m / p`. Enable [`RabinKarpMatcher::verify`] to confirm every hash hit byte-by-byte,
//! which removes false positives at the cost of `O(m)` per hit.
//!
//! ```rust
//! use rabin_karp::cs::string::rabin_karp::{contains, find_all_offsets, RabinKarp};
//!
//! assert_eq!(find_all_offsets("abcabcabc", "abc"), vec![0, 3, 6]);
//! assert!(contains("hello world", "world"));
//!
//! let mut matcher = RabinKarp::seeded(42).verify(true);
//! assert_eq!(matcher.find_all("aaaa", "aa"), vec![0, 1, 2]);
//! ```

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cs::hashing::PolyRollingHash;
use crate::math::modular::{ModInt, DEFAULT_MODULUS};

/// A Rabin-Karp matcher over the default prime `10^9 + 7`.
pub type RabinKarp<R = StdRng> = RabinKarpMatcher<DEFAULT_MODULUS, R>;

/// Substring search by rolling-hash comparison, modulo `MOD`, drawing bases from `R`.
///
/// A fresh base is drawn for every search.
#[derive(Debug, Clone)]
pub struct RabinKarpMatcher<const MOD: u64, R = StdRng> {
    rng: R,
    verify: bool,
}

impl<const MOD: u64> RabinKarpMatcher<MOD, StdRng> {
    /// Creates a matcher drawing bases from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a matcher with a reproducible sequence of bases.
    pub fn seeded(seed: u64) -> RabinKarpMatcher<MOD, ChaCha20Rng> {
        RabinKarpMatcher::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<const MOD: u64> Default for RabinKarpMatcher<MOD, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MOD: u64, R: Rng> RabinKarpMatcher<MOD, R> {
    /// Creates a matcher drawing bases from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, verify: false }
    }

    /// When enabled, every hash hit is confirmed by comparing bytes before it is reported.
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Returns `true` if `pattern` occurs in `text` as a contiguous substring.
    ///
    /// A pattern longer than the text, or an empty pattern, never matches.
    pub fn contains(&mut self, text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> bool {
        let (text, pattern) = (text.as_ref(), pattern.as_ref());
        match self.prepare(text, pattern) {
            Some(search) => search.windows().any(|front| search.is_match(front)),
            None => false,
        }
    }

    /// Returns `true` if either string occurs in the other. The longer string is searched for
    /// the shorter one.
    pub fn is_containing(&mut self, a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
        let (mut a, mut b) = (a.as_ref(), b.as_ref());
        if a.len() < b.len() {
            std::mem::swap(&mut a, &mut b);
        }
        self.contains(a, b)
    }

    /// Every 0-indexed offset where `pattern` occurs in `text`, in increasing order.
    /// Occurrences may overlap.
    pub fn find_all(&mut self, text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> Vec<usize> {
        let (text, pattern) = (text.as_ref(), pattern.as_ref());
        let Some(search) = self.prepare(text, pattern) else {
            return Vec::new();
        };

        #[cfg(feature = "parallel")]
        let offsets: Vec<usize> = search
            .windows()
            .into_par_iter()
            .filter(|&front| search.is_match(front))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let offsets: Vec<usize> = search
            .windows()
            .filter(|&front| search.is_match(front))
            .collect();

        debug!(
            "found {} occurrence(s) of a {}-byte pattern in {} bytes",
            offsets.len(),
            pattern.len(),
            text.len()
        );
        offsets
    }

    /// Hashes both strings under one freshly drawn base. `None` when no window exists.
    fn prepare<'a>(&mut self, text: &'a [u8], pattern: &'a [u8]) -> Option<Search<'a, MOD>> {
        if pattern.is_empty() || pattern.len() > text.len() {
            trace!(
                "no window of length {} in {} bytes",
                pattern.len(),
                text.len()
            );
            return None;
        }
        let text_hash = PolyRollingHash::<MOD>::with_rng(text, &mut self.rng);
        let pattern_hash = PolyRollingHash::<MOD>::with_base(pattern, text_hash.base());
        let shift = text_hash.base_mod().pow(pattern.len() as u64);
        Some(Search {
            text,
            pattern,
            target: ModInt::from_u64(pattern_hash.full_hash()),
            shift,
            text_hash,
            verify: self.verify,
        })
    }
}

/// One prepared scan: the text's prefix hashes plus everything a window comparison needs.
struct Search<'a, const MOD: u64> {
    text: &'a [u8],
    pattern: &'a [u8],
    text_hash: PolyRollingHash<MOD>,
    target: ModInt<MOD>,
    /// `base^pattern.len()`
    shift: ModInt<MOD>,
    verify: bool,
}

impl<const MOD: u64> Search<'_, MOD> {
    /// Start offsets of all windows.
    fn windows(&self) -> std::ops::RangeInclusive<usize> {
        0..=self.text.len() - self.pattern.len()
    }

    fn is_match(&self, front: usize) -> bool {
        let back = front + self.pattern.len() - 1;
        if self.text_hash.window(front, back, self.shift) != self.target {
            return false;
        }
        trace!("hash hit at offset {}", front);
        if self.verify && self.text[front..=back] != *self.pattern {
            trace!("rejected hash collision at offset {}", front);
            return false;
        }
        true
    }
}

/// Returns `true` if `pattern` occurs in `text`, using a base drawn from OS entropy.
pub fn contains(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> bool {
    RabinKarp::new().contains(text, pattern)
}

/// Returns `true` if the shorter of `a` and `b` occurs in the longer one.
pub fn is_containing(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
    RabinKarp::new().is_containing(a, b)
}

/// Every offset where `pattern` occurs in `text`, in increasing order.
pub fn find_all_offsets(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> Vec<usize> {
    RabinKarp::new().find_all(text, pattern)
}
