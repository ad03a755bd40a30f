//! Legendre symbol computed via Euler's criterion.

use crate::{Odd, pow_mod::pow_mod};
use core::ops::Neg;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use subtle::{Choice, ConstantTimeEq};

/// Possible return values for Legendre symbol calculations.
#[derive(Debug, Copy, Clone)]
#[repr(i8)]
pub enum LegendreSymbol {
    /// The upper argument is divisible by the modulus.
    Zero = 0,

    /// The upper argument is a quadratic residue modulo the (prime) modulus.
    One = 1,

    /// The upper argument is a quadratic nonresidue modulo the modulus.
    ///
    /// For a composite modulus Euler's criterion may produce a value other than `±1`; such
    /// values are also reported as [`LegendreSymbol::MinusOne`].
    MinusOne = -1,
}

impl LegendreSymbol {
    /// Determine if the symbol is zero.
    pub const fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }

    /// Determine if the symbol is one.
    pub const fn is_one(&self) -> bool {
        matches!(self, Self::One)
    }

    /// Determine if the symbol is minus one.
    pub const fn is_minus_one(&self) -> bool {
        matches!(self, Self::MinusOne)
    }
}

impl ConstantTimeEq for LegendreSymbol {
    fn ct_eq(&self, other: &Self) -> Choice {
        (*self as i8).ct_eq(&(*other as i8))
    }
}

impl Eq for LegendreSymbol {}

impl PartialEq for LegendreSymbol {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl From<LegendreSymbol> for i8 {
    fn from(symbol: LegendreSymbol) -> i8 {
        symbol as i8
    }
}

impl Neg for LegendreSymbol {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::One => Self::MinusOne,
            Self::MinusOne => Self::One,
        }
    }
}

/// Compute the Legendre symbol `(n / p)` as `n^((p-1)/2) mod p`.
///
/// Variable time with respect to all arguments.
pub fn legendre_symbol_vartime(n: &BigUint, p: &Odd<BigUint>) -> LegendreSymbol {
    let exp = p.as_ref() >> 1u32;
    euler_criterion(n, &exp, p)
}

/// Euler's criterion with a precomputed exponent `(p-1)/2`.
pub(crate) fn euler_criterion(n: &BigUint, exp: &BigUint, p: &Odd<BigUint>) -> LegendreSymbol {
    let modulus = p.to_nz();
    if (n % modulus.as_ref()).is_zero() {
        return LegendreSymbol::Zero;
    }

    if pow_mod(n, exp, &modulus).is_one() {
        LegendreSymbol::One
    } else {
        LegendreSymbol::MinusOne
    }
}
