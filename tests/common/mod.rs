//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use crypto_modsqrt::Odd;
use num_bigint::BigUint;

/// Big endian bytes to `num_bigint::BigUint`
pub fn from_be_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Big endian bytes to an odd `num_bigint::BigUint`
pub fn odd_from_be_bytes(bytes: &[u8]) -> Odd<BigUint> {
    Odd::new(from_be_bytes(bytes)).expect("odd modulus")
}

/// Odd primes below `bound`, by sieve of Eratosthenes.
pub fn odd_primes_below(bound: usize) -> Vec<u64> {
    let mut composite = vec![false; bound];
    let mut primes = Vec::new();
    for n in 2..bound {
        if composite[n] {
            continue;
        }
        if n > 2 {
            primes.push(n as u64);
        }
        for multiple in (n * n..bound).step_by(n) {
            composite[multiple] = true;
        }
    }
    primes
}

/// All `r` in `[0, p)` with `r^2 = n mod p`, by exhaustive search.
pub fn brute_force_roots(n: u64, p: u64) -> Vec<u64> {
    (0..p).filter(|r| r * r % p == n % p).collect()
}
