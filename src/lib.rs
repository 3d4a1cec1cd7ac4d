pub mod cs;
pub mod error;
pub mod math;

pub use cs::{hashing, randomized, string};
pub use error::{Error, Result};
