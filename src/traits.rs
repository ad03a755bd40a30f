//! Traits provided by this crate

use crate::{LegendreSymbol, NonZero, Odd};

/// Modular exponentiation.
pub trait PowMod<Exponent = Self>: Sized {
    /// Computes `self ^ exponent mod modulus`.
    fn pow_mod(&self, exponent: &Exponent, modulus: &NonZero<Self>) -> Self;
}

/// Square roots and quadratic residuosity modulo an odd prime.
pub trait SqrtMod: Sized {
    /// Computes `r` such that `r^2 = self mod p` using Tonelli-Shanks, or `None` if `self` is a
    /// quadratic non-residue.
    ///
    /// `p` is assumed to be prime, which is not checked; for composite `p` the result is
    /// meaningless but the computation terminates. Variable-time.
    fn sqrt_mod_vartime(&self, p: &Odd<Self>) -> Option<Self>;

    /// Compute the Legendre symbol `(self / p)` using Euler's criterion. Variable-time.
    fn legendre_symbol_vartime(&self, p: &Odd<Self>) -> LegendreSymbol;
}
