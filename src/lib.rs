//! Pure Rust modular square roots over arbitrary-precision integers.
//!
//! # About
//! This library computes `r` such that `r² ≡ n (mod p)` for an odd prime `p`
//! using the Tonelli-Shanks algorithm, or reports that `n` is a quadratic
//! non-residue and no such `r` exists. Integers are [`num_bigint::BigUint`],
//! so moduli of cryptographic size are supported.
//!
//! All operations are variable-time, which is reflected in the `_vartime`
//! suffix of their names. Do not use them on secret inputs.
//!
//! # Usage
//!
//! ```
//! use crypto_modsqrt::{Odd, sqrt_mod_vartime};
//! use num_bigint::BigUint;
//!
//! let p = Odd::new(BigUint::from(13u8)).expect("odd modulus");
//! let r = sqrt_mod_vartime(&BigUint::from(10u8), &p).expect("10 is a square mod 13");
//! assert_eq!(r, BigUint::from(7u8));
//!
//! assert_eq!(sqrt_mod_vartime(&BigUint::from(5u8), &p), None);
//! ```
//!
//! The unchecked entry point above does not verify that `p` is prime. When the
//! modulus comes from an untrusted source use [`PrimeParams::new_vartime`] or
//! [`checked_sqrt_mod_vartime`], which reject even, tiny, and composite moduli
//! with an [`InvalidModulus`] error.
//!
//! # Status
//! It's new, unaudited, and may contain bugs.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

#[macro_use]
mod macros;

mod legendre;
mod non_zero;
mod odd;
mod pow_mod;
mod prime;
mod prime_params;
mod sqrt;
mod traits;

pub use crate::{
    legendre::{LegendreSymbol, legendre_symbol_vartime},
    non_zero::NonZero,
    odd::Odd,
    pow_mod::pow_mod,
    prime::{InvalidModulus, is_prime_vartime},
    prime_params::PrimeParams,
    sqrt::{checked_sqrt_mod_vartime, sqrt_mod_vartime},
    traits::*,
};
pub use num_bigint;
pub use subtle;

#[cfg(feature = "rand_core")]
pub use {prime::is_prime_miller_rabin_vartime, rand_core};
