//! Wrapper type for odd integers.

use crate::NonZero;
use core::{fmt, ops::Deref};
use num_bigint::BigUint;
use num_integer::Integer;

/// Wrapper type for odd integers.
///
/// These are frequently used in cryptography, e.g. as a modulus.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Odd<T>(pub(crate) T);

impl<T> Odd<T> {
    /// Create a new odd integer.
    pub fn new(n: T) -> Option<Self>
    where
        T: Integer,
    {
        n.is_odd().then_some(Self(n))
    }

    /// All odd integers are definitionally non-zero, so we can also obtain a [`NonZero`].
    pub fn to_nz(&self) -> NonZero<T>
    where
        T: Clone,
    {
        NonZero(self.0.clone())
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl Odd<BigUint> {
    /// Create a new [`Odd<BigUint>`] from the provided big endian hex string.
    ///
    /// Intended for moduli known in advance.
    ///
    /// # Panics
    /// If the hex is malformed or the value is even.
    pub fn from_be_hex(hex: &str) -> Self {
        let Some(uint) = BigUint::parse_bytes(hex.as_bytes(), 16) else {
            panic!("invalid hex string");
        };
        assert!(uint.is_odd(), "number must be odd");
        Self(uint)
    }
}

impl<T> AsRef<T> for Odd<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for Odd<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<Odd<T>> for NonZero<T> {
    fn from(odd: Odd<T>) -> NonZero<T> {
        NonZero(odd.0)
    }
}

impl<T> fmt::Display for Odd<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T> fmt::LowerHex for Odd<T>
where
    T: fmt::LowerHex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl<T> fmt::UpperHex for Odd<T>
where
    T: fmt::UpperHex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
