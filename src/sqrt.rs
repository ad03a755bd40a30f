//! Modular square roots using the Tonelli-Shanks algorithm.

use crate::{InvalidModulus, LegendreSymbol, Odd, PrimeParams, SqrtMod, pow_mod::pow_mod};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Compute `r` such that `r^2 = n mod p`, or `None` if `n` is a quadratic non-residue.
///
/// `p` is assumed to be prime, which is NOT checked: for a composite `p` the result is
/// meaningless, though the computation always terminates. Use [`checked_sqrt_mod_vartime`] or
/// [`PrimeParams::new_vartime`] to validate the modulus.
///
/// Of the two roots `r` and `p - r` the one returned is fixed by the algorithm, so repeated
/// calls with the same input give the same output.
///
/// Returns `None` for a modulus rejected with [`InvalidModulus::TooLarge`].
///
/// Variable time with respect to all arguments.
pub fn sqrt_mod_vartime(n: &BigUint, p: &Odd<BigUint>) -> Option<BigUint> {
    match PrimeParams::new_unchecked_vartime(p.clone()) {
        Ok(params) => params.sqrt_vartime(n),
        // `p = 1`, for which every `n` is congruent to `0 = 0^2`
        Err(InvalidModulus::TooSmall) => Some(BigUint::zero()),
        Err(InvalidModulus::TooLarge | InvalidModulus::Even | InvalidModulus::Composite) => None,
    }
}

/// Compute `r` such that `r^2 = n mod p` after verifying that `p` is an odd prime.
///
/// Returns `Ok(None)` if `n` is a quadratic non-residue modulo `p`.
pub fn checked_sqrt_mod_vartime(
    n: &BigUint,
    p: &BigUint,
) -> Result<Option<BigUint>, InvalidModulus> {
    Ok(PrimeParams::new_vartime(p.clone())?.sqrt_vartime(n))
}

impl PrimeParams {
    /// Compute `r` such that `r^2 = n mod p`, or `None` if `n` is a quadratic non-residue.
    ///
    /// Identical in result to [`sqrt_mod_vartime`] for the same modulus.
    pub fn sqrt_vartime(&self, n: &BigUint) -> Option<BigUint> {
        let p = self.modulus.to_nz();
        let n = n % p.as_ref();

        if n.is_zero() {
            return Some(n);
        }

        if self.legendre_symbol_vartime(&n) != LegendreSymbol::One {
            trace!(%n, "quadratic non-residue");
            return None;
        }

        // p = 3 mod 4: n^((p+1)/4)
        let Some((_, c)) = &self.non_residue else {
            return Some(pow_mod(&n, &self.root_exp, &p));
        };

        let two = BigUint::from(2u8);
        let mut c = c.clone();
        let mut r = pow_mod(&n, &self.root_exp, &p);
        let mut t = pow_mod(&n, &self.q, &p);
        let mut m = self.s.get();

        while !t.is_one() {
            // least `i` in `[0, m)` such that `t^(2^i) = 1`
            let mut i = 0;
            let mut tt = t.clone();
            while !tt.is_one() && i < m {
                tt = &tt * &tt % p.as_ref();
                i += 1;
            }

            if i == m {
                debug!(%n, m, "order of t exceeds 2^m");
                return None;
            }

            // b = c^(2^(m-i-1) mod (p-1))
            let exp = pow_mod(&two, &BigUint::from(m - i - 1), &self.p_minus_one);
            let b = pow_mod(&c, &exp, &p);

            c = &b * &b % p.as_ref();
            r = r * &b % p.as_ref();
            t = t * &c % p.as_ref();
            trace!(m, i, "tonelli-shanks step");
            m = i;
        }

        Some(r)
    }

    /// Compute both square roots of `n`, or `None` if `n` is a quadratic non-residue.
    ///
    /// The first element is the root returned by [`PrimeParams::sqrt_vartime`], the second is
    /// its negation `p - r`. Both are zero when `n = 0 mod p`.
    pub fn sqrt_pair_vartime(&self, n: &BigUint) -> Option<(BigUint, BigUint)> {
        let r = self.sqrt_vartime(n)?;
        let neg = (self.modulus.as_ref() - &r) % self.modulus.as_ref();
        Some((r, neg))
    }
}

impl SqrtMod for BigUint {
    fn sqrt_mod_vartime(&self, p: &Odd<Self>) -> Option<Self> {
        sqrt_mod_vartime(self, p)
    }

    fn legendre_symbol_vartime(&self, p: &Odd<Self>) -> LegendreSymbol {
        crate::legendre_symbol_vartime(self, p)
    }
}
