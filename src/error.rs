use thiserror::Error;

/// Errors produced by the modular arithmetic, hashing and matching routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value shares a factor with the modulus (zero included), so it has no inverse.
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NoInverse { value: u64, modulus: u64 },

    /// A range query was made with `front > back`.
    #[error("invalid range: front {front} is larger than back {back}")]
    InvalidRange { front: usize, back: usize },

    /// A range query reached past the end of the hashed string.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// Sampling bounds with `min > max`.
    #[error("invalid sampling bounds: min {min} is larger than max {max}")]
    InvalidBounds { min: u64, max: u64 },
}

impl Error {
    pub fn no_inverse(value: u64, modulus: u64) -> Self {
        Error::NoInverse { value, modulus }
    }

    pub fn invalid_range(front: usize, back: usize) -> Self {
        Error::InvalidRange { front, back }
    }

    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Error::OutOfBounds { index, len }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
