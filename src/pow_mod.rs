//! [`BigUint`] modular exponentiation operations.

use crate::{NonZero, PowMod};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Computes `base ^ exponent mod modulus`.
///
/// A zero `exponent` yields `1 mod modulus`, which is `0` when `modulus` is one.
/// `base` need not be reduced.
///
/// Variable time with respect to all arguments.
pub fn pow_mod(base: &BigUint, exponent: &BigUint, modulus: &NonZero<BigUint>) -> BigUint {
    let modulus = modulus.as_ref();

    if modulus.is_one() {
        return BigUint::zero();
    }

    if exponent.is_zero() {
        return BigUint::one();
    }

    (base % modulus).modpow(exponent, modulus)
}

impl PowMod for BigUint {
    fn pow_mod(&self, exponent: &Self, modulus: &NonZero<Self>) -> Self {
        pow_mod(self, exponent, modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::pow_mod;
    use crate::{NonZero, PowMod};
    use num_bigint::BigUint;

    fn nz(n: u64) -> NonZero<BigUint> {
        NonZero::new(BigUint::from(n)).expect("non-zero modulus")
    }

    fn naive_pow_mod(base: u64, exponent: u64, modulus: u64) -> u64 {
        let mut acc = 1 % modulus;
        for _ in 0..exponent {
            acc = acc * (base % modulus) % modulus;
        }
        acc
    }

    #[test]
    fn zero_exponent() {
        assert_eq!(pow_mod(&BigUint::from(5u8), &BigUint::from(0u8), &nz(7)), BigUint::from(1u8));
        assert_eq!(pow_mod(&BigUint::from(0u8), &BigUint::from(0u8), &nz(7)), BigUint::from(1u8));
    }

    #[test]
    fn unit_modulus() {
        assert_eq!(pow_mod(&BigUint::from(5u8), &BigUint::from(0u8), &nz(1)), BigUint::from(0u8));
        assert_eq!(pow_mod(&BigUint::from(5u8), &BigUint::from(3u8), &nz(1)), BigUint::from(0u8));
    }

    #[test]
    fn even_modulus() {
        // `p - 1` is even and is used as a modulus for exponents
        assert_eq!(pow_mod(&BigUint::from(2u8), &BigUint::from(5u8), &nz(12)), BigUint::from(8u8));
        assert_eq!(pow_mod(&BigUint::from(2u8), &BigUint::from(4u8), &nz(12)), BigUint::from(4u8));
    }

    #[test]
    fn unreduced_base() {
        assert_eq!(BigUint::from(100u8).pow_mod(&BigUint::from(2u8), &nz(13)), BigUint::from(3u8));
    }

    #[test]
    fn matches_naive() {
        for modulus in 1..40u64 {
            for base in 0..45u64 {
                for exponent in 0..12u64 {
                    assert_eq!(
                        pow_mod(&BigUint::from(base), &BigUint::from(exponent), &nz(modulus)),
                        BigUint::from(naive_pow_mod(base, exponent, modulus)),
                        "{base}^{exponent} mod {modulus}"
                    );
                }
            }
        }
    }
}
