pub mod modular;

pub use modular::{mod_inv, mod_pow, ModInt, DEFAULT_MODULUS};
