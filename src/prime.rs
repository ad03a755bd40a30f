//! Primality testing used to validate moduli.

use crate::{NonZero, pow_mod::pow_mod};
use core::fmt;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

#[cfg(feature = "rand_core")]
use {alloc::vec, rand_core::CryptoRng};

/// Bases for which Miller-Rabin is deterministic for all `n < 3.3 * 10^24`.
const MILLER_RABIN_BASES: [u8; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Reasons a modulus is rejected by the checked square root entry points.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvalidModulus {
    /// The modulus is less than three.
    TooSmall,
    /// The modulus is even.
    Even,
    /// The modulus failed a Miller-Rabin round.
    Composite,
    /// `p - 1` is divisible by `2^(2^32)`, which exceeds the supported 2-adic valuation.
    TooLarge,
}

impl fmt::Display for InvalidModulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall => write!(f, "modulus must be at least 3"),
            Self::Even => write!(f, "modulus must be odd"),
            Self::Composite => write!(f, "modulus is not prime"),
            Self::TooLarge => write!(f, "modulus exceeds supported size"),
        }
    }
}

impl core::error::Error for InvalidModulus {}

/// Ensures `p` is an odd prime, using Miller-Rabin over a fixed set of bases.
pub(crate) fn check_modulus(p: &BigUint) -> Result<(), InvalidModulus> {
    if *p < BigUint::from(3u8) {
        return Err(InvalidModulus::TooSmall);
    }
    if p.is_even() {
        return Err(InvalidModulus::Even);
    }
    if !is_prime_vartime(p) {
        return Err(InvalidModulus::Composite);
    }
    Ok(())
}

/// Miller-Rabin primality test over the first twelve primes as bases. Variable-time.
///
/// The answer is exact for `n < 3.3 * 10^24`. Above that bound `true` means `n` is a strong
/// probable prime to all twelve bases; see [`is_prime_miller_rabin_vartime`] for additional
/// random rounds.
///
/// See also <https://en.wikipedia.org/wiki/Miller-Rabin_primality_test>
pub fn is_prime_vartime(n: &BigUint) -> bool {
    if *n < BigUint::from(2u8) {
        return false;
    }

    for base in MILLER_RABIN_BASES {
        let base = BigUint::from(base);
        if *n == base {
            return true;
        }
        if (n % &base).is_zero() {
            return false;
        }
    }

    let decomposition = Decomposition::new(n);
    MILLER_RABIN_BASES
        .iter()
        .all(|&base| decomposition.is_strong_probable_prime(&BigUint::from(base)))
}

/// Miller-Rabin probabilistic primality test with `k` random bases. Variable-time.
///
/// Returns `false` (number is composite) with certainty.
/// `true` means that the number is prime with high probability.
/// Probability of false positive decreases as 4^(-k) with the number of rounds `k`.
///
/// # Panics
/// If the number of rounds is 0.
#[cfg(feature = "rand_core")]
pub fn is_prime_miller_rabin_vartime<R: CryptoRng + ?Sized>(
    n: &BigUint,
    rng: &mut R,
    k: usize,
) -> bool {
    if k == 0 {
        panic!("number of rounds should be greater than 0");
    }

    let three = BigUint::from(3u8);
    if *n < BigUint::from(2u8) {
        return false;
    }
    // special case 2 and 3, as random bases are drawn from `[2, n - 2]`
    if *n <= three {
        return true;
    }

    // all even are composite
    if n.is_even() {
        return false;
    }

    // `n - 3` is non-zero since `n > 3`
    let Some(range) = NonZero::new(n - &three) else {
        return false;
    };
    let mut bytes = vec![0u8; n.bits().div_ceil(8) as usize];
    let decomposition = Decomposition::new(n);

    (0..k).all(|_| {
        rng.fill_bytes(&mut bytes);
        let base = BigUint::from_bytes_le(&bytes) % range.as_ref() + 2u8;
        decomposition.is_strong_probable_prime(&base)
    })
}

/// `n - 1 = d * 2^t` for odd `d`.
struct Decomposition<'a> {
    n: &'a BigUint,
    modulus: NonZero<BigUint>,
    minus_one: BigUint,
    d: BigUint,
    t: u64,
}

impl<'a> Decomposition<'a> {
    /// `n` must be odd and greater than 2.
    fn new(n: &'a BigUint) -> Self {
        let minus_one = n - 1u8;
        let t = minus_one.trailing_zeros().unwrap_or(0);
        let d = &minus_one >> t;
        Self {
            n,
            modulus: NonZero(n.clone()),
            minus_one,
            d,
            t,
        }
    }

    fn is_strong_probable_prime(&self, base: &BigUint) -> bool {
        let mut x = pow_mod(base, &self.d, &self.modulus);
        if x.is_one() || x == self.minus_one {
            return true;
        }

        for _ in 1..self.t {
            x = &x * &x % self.n;
            if x == self.minus_one {
                return true;
            }
            if x.is_one() {
                return false;
            }
        }

        false
    }
}
