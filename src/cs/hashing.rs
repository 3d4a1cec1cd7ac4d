//! Hash functions.

pub mod polynomial_rolling;

pub use polynomial_rolling::{polynomial_hash, PolyRollingHash, RollingHash, RollingHashBuilder};
