//! # Modular Arithmetic
//!
//! Arithmetic over `Z/pZ` for a modulus `p` fixed at compile time through a const generic.
//! The modulus is part of the type, so values reduced by different moduli can never be mixed
//! by accident, and tests can instantiate small moduli to force collisions.
//!
//! Every operation keeps the stored representative in `[0, p)`, negative intermediate
//! results included. Products are formed in 128 bits, so any `p < 2^63` is supported.
//!
//! Division is multiplication by the modular inverse. Zero (and, for composite moduli, any
//! value sharing a factor with `p`) has no inverse; [`ModInt::inv`] and [`ModInt::checked_div`]
//! report this as [`Error::NoInverse`] instead of looping or panicking.
//!
//! ```rust
//! use rabin_karp::math::modular::ModInt;
//!
//! type M = ModInt<1_000_000_007>;
//!
//! let a = M::new(-1);
//! assert_eq!(a.value(), 1_000_000_006);
//!
//! let b = M::from_u64(3);
//! let q = a.checked_div(b).unwrap();
//! assert_eq!(q * b, a);
//! assert!(a.checked_div(M::from_u64(0)).is_err());
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// The prime used by default for rolling hashes: `10^9 + 7`.
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

/// An element of `Z/MOD Z`, stored as its representative in `[0, MOD)`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ModInt<const MOD: u64>(u64);

impl<const MOD: u64> ModInt<MOD> {
    const VALID_MODULUS: () = assert!(
        MOD >= 2 && MOD < (1 << 63),
        "modulus must be in [2, 2^63)"
    );

    /// Creates a value from a signed integer, normalizing negatives into `[0, MOD)`.
    pub fn new(value: i64) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_MODULUS;
        Self((value as i128).rem_euclid(MOD as i128) as u64)
    }

    /// Creates a value from an unsigned integer, reducing it modulo `MOD`.
    pub fn from_u64(value: u64) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_MODULUS;
        Self(value % MOD)
    }

    /// The normalized representative in `[0, MOD)`.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The modulus of this type.
    #[inline]
    pub const fn modulus() -> u64 {
        MOD
    }

    /// `self^exp mod MOD`, by binary exponentiation.
    pub fn pow(self, exp: u64) -> Self {
        Self(mod_pow(self.0, exp, MOD))
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    /// - [`Error::NoInverse`] if `self` is zero or not coprime with `MOD`.
    pub fn inv(self) -> Result<Self> {
        mod_inv(self.0, MOD).map(Self)
    }

    /// `self / rhs`, i.e. `self * rhs^-1`.
    ///
    /// # Errors
    /// - [`Error::NoInverse`] if `rhs` has no inverse.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        Ok(self * rhs.inv()?)
    }
}

impl<const MOD: u64> Add for ModInt<MOD> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        // both operands < 2^63, the sum cannot overflow
        let sum = self.0 + rhs.0;
        Self(if sum >= MOD { sum - MOD } else { sum })
    }
}

impl<const MOD: u64> Sub for ModInt<MOD> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(self.0 + MOD - rhs.0)
        }
    }
}

impl<const MOD: u64> Mul for ModInt<MOD> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(mul_mod(self.0, rhs.0, MOD))
    }
}

impl<const MOD: u64> Neg for ModInt<MOD> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl<const MOD: u64> AddAssign for ModInt<MOD> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const MOD: u64> SubAssign for ModInt<MOD> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const MOD: u64> MulAssign for ModInt<MOD> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const MOD: u64> Zero for ModInt<MOD> {
    fn zero() -> Self {
        Self::from_u64(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const MOD: u64> One for ModInt<MOD> {
    fn one() -> Self {
        Self::from_u64(1)
    }
}

impl<const MOD: u64> From<u8> for ModInt<MOD> {
    fn from(byte: u8) -> Self {
        Self::from_u64(byte as u64)
    }
}

impl<const MOD: u64> fmt::Display for ModInt<MOD> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Computes `base^exp mod modulus` with iterative square-and-multiply.
///
/// `exp == 0` yields `1 % modulus`. Runs in `O(log exp)` multiplications.
///
/// # Panics
/// - if `modulus == 0`.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1 % modulus;
    let mut square = base % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, square, modulus);
        }
        square = mul_mod(square, square, modulus);
        exp >>= 1;
    }
    result
}

/// Computes the inverse of `value` modulo `modulus` with the extended Euclidean algorithm.
///
/// # Errors
/// - [`Error::NoInverse`] if `gcd(value, modulus) != 1`, which covers `value ≡ 0`.
pub fn mod_inv(value: u64, modulus: u64) -> Result<u64> {
    if modulus == 0 {
        return Err(Error::no_inverse(value, modulus));
    }
    let reduced = value % modulus;
    if reduced == 0 && modulus != 1 {
        return Err(Error::no_inverse(value, modulus));
    }
    let (g, s, _) = extended_gcd(reduced as i128, modulus as i128);
    if g != 1 {
        return Err(Error::no_inverse(value, modulus));
    }
    Ok(s.rem_euclid(modulus as i128) as u64)
}

/// Returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`.
fn extended_gcd(mut a: i128, mut b: i128) -> (i128, i128, i128) {
    let (mut x0, mut x1) = (1i128, 0i128);
    let (mut y0, mut y1) = (0i128, 1i128);

    while b != 0 {
        let q = a / b;
        (a, b) = (b, a - q * b);
        (x0, x1) = (x1, x0 - q * x1);
        (y0, y1) = (y1, y0 - q * y1);
    }
    (a, x0, y0)
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}
