//! Wrapper type for non-zero integers.

use core::{fmt, ops::Deref};
use num_bigint::BigUint;
use num_traits::Zero;

/// Wrapper type for non-zero integers.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NonZero<T>(pub(crate) T);

impl<T> NonZero<T> {
    /// Create a new non-zero integer.
    pub fn new(n: T) -> Option<Self>
    where
        T: Zero,
    {
        (!n.is_zero()).then_some(Self(n))
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl NonZero<BigUint> {
    /// Create a new [`NonZero<BigUint>`] from the provided big endian hex string.
    ///
    /// # Panics
    /// If the hex is malformed or the value is zero.
    pub fn from_be_hex(hex: &str) -> Self {
        let Some(uint) = BigUint::parse_bytes(hex.as_bytes(), 16) else {
            panic!("invalid hex string");
        };
        assert!(!uint.is_zero(), "number must be non-zero");
        Self(uint)
    }
}

impl<T> AsRef<T> for NonZero<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for NonZero<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Display for NonZero<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T> fmt::LowerHex for NonZero<T>
where
    T: fmt::LowerHex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
