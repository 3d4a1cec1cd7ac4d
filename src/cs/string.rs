//! String algorithms.

pub mod rabin_karp;

pub use rabin_karp::{contains, find_all_offsets, is_containing, RabinKarp, RabinKarpMatcher};
