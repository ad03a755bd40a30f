//! Parameter calculation for prime moduli.

use crate::{
    InvalidModulus, LegendreSymbol, NonZero, Odd,
    legendre::euler_criterion,
    pow_mod::pow_mod,
    prime::check_modulus,
};
use core::num::NonZeroU32;
use num_bigint::BigUint;
use num_traits::One;

#[cfg(feature = "rand_core")]
use {crate::prime::is_prime_miller_rabin_vartime, rand_core::CryptoRng};

/// Parameters for computing modular square roots with respect to an odd prime modulus.
///
/// Computing these once and reusing them skips the factorisation of `p - 1` and the search
/// for a quadratic non-residue on every call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimeParams {
    /// The modulus `p`.
    pub(crate) modulus: Odd<BigUint>,
    /// `p - 1`, used as the modulus for exponents.
    pub(crate) p_minus_one: NonZero<BigUint>,
    /// `(p-1)/2`, the exponent of Euler's criterion.
    pub(crate) euler_exp: BigUint,
    /// The odd `q` such that `p - 1 = q•2^s`.
    pub(crate) q: BigUint,
    /// A constant such that the modulus `p = q•2^s+1` for `s > 0` and some odd `q`.
    pub(crate) s: NonZeroU32,
    /// `(q+1)/2`; when `s = 1` this equals `(p+1)/4`.
    pub(crate) root_exp: BigUint,
    /// The smallest quadratic non-residue `z` and `z^q mod p`, present when `s > 1`.
    pub(crate) non_residue: Option<(BigUint, BigUint)>,
}

impl PrimeParams {
    /// Instantiates a new set of [`PrimeParams`], verifying that `p` is an odd prime.
    ///
    /// Primality is decided by Miller-Rabin over a fixed set of bases, see
    /// [`is_prime_vartime`](crate::is_prime_vartime).
    pub fn new_vartime(p: BigUint) -> Result<Self, InvalidModulus> {
        if let Err(err) = check_modulus(&p) {
            debug!(%p, %err, "rejected modulus");
            return Err(err);
        }
        Self::new_unchecked_vartime(Odd(p))
    }

    /// Instantiates a new set of [`PrimeParams`], additionally running `rounds` Miller-Rabin
    /// rounds with random bases drawn from `rng`.
    ///
    /// # Panics
    /// If `rounds` is 0.
    #[cfg(feature = "rand_core")]
    pub fn new_with_rng_vartime<R: CryptoRng + ?Sized>(
        p: BigUint,
        rng: &mut R,
        rounds: usize,
    ) -> Result<Self, InvalidModulus> {
        check_modulus(&p)?;
        if !is_prime_miller_rabin_vartime(&p, rng, rounds) {
            debug!(%p, rounds, "modulus failed random Miller-Rabin rounds");
            return Err(InvalidModulus::Composite);
        }
        Self::new_unchecked_vartime(Odd(p))
    }

    /// Instantiates a new set of [`PrimeParams`] without testing `p` for primality.
    ///
    /// Square roots computed with a composite modulus are meaningless, though computing them
    /// always terminates.
    ///
    /// Returns [`InvalidModulus::TooSmall`] if `p` is one, and [`InvalidModulus::TooLarge`] if
    /// the 2-adic valuation of `p - 1` does not fit in a `u32`.
    pub fn new_unchecked_vartime(p: Odd<BigUint>) -> Result<Self, InvalidModulus> {
        let p_minus_one = p.as_ref() - 1u8;
        let Some(p_minus_one) = NonZero::new(p_minus_one) else {
            return Err(InvalidModulus::TooSmall);
        };

        // `p - 1` is even and non-zero, so `s >= 1`
        let s = p_minus_one.trailing_zeros().unwrap_or(0);
        let Some(s) = u32::try_from(s).ok().and_then(NonZeroU32::new) else {
            return Err(InvalidModulus::TooLarge);
        };
        let q = p_minus_one.as_ref() >> s.get();
        let euler_exp = p_minus_one.as_ref() >> 1u32;
        let root_exp = (&q + 1u8) >> 1u32;

        let non_residue = if s.get() == 1 {
            None
        } else {
            let z = find_non_residue(&p, &euler_exp);
            let c = pow_mod(&z, &q, &p.to_nz());
            debug!(s = s.get(), %z, "found quadratic non-residue");
            Some((z, c))
        };

        Ok(Self {
            modulus: p,
            p_minus_one,
            euler_exp,
            q,
            s,
            root_exp,
            non_residue,
        })
    }

    /// Get the modulus.
    pub fn modulus(&self) -> &Odd<BigUint> {
        &self.modulus
    }

    /// Get the constant 's' used in modular square root calculation.
    pub fn s(&self) -> NonZeroU32 {
        self.s
    }

    /// Get the odd part `q` of `p - 1`.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Get the smallest quadratic non-residue `z >= 2`, if `s > 1`.
    ///
    /// When `s = 1` no non-residue is needed and none is computed.
    pub fn non_residue(&self) -> Option<&BigUint> {
        self.non_residue.as_ref().map(|(z, _)| z)
    }

    /// Compute the Legendre symbol `(n / p)`.
    pub fn legendre_symbol_vartime(&self, n: &BigUint) -> LegendreSymbol {
        euler_criterion(n, &self.euler_exp, &self.modulus)
    }
}

/// Linear search for the smallest `z >= 2` with `z^((p-1)/2) != 1 mod p`.
///
/// Terminates for any odd `p > 1`, since `p^((p-1)/2) = 0 mod p`.
fn find_non_residue(p: &Odd<BigUint>, euler_exp: &BigUint) -> BigUint {
    let modulus = p.to_nz();
    let mut z = BigUint::from(2u8);
    while pow_mod(&z, euler_exp, &modulus).is_one() {
        z += 1u8;
    }
    z
}
