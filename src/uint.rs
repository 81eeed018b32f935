//! Fixed-Width Unsigned Integer Storage
//!
//! Represents a `64 * N`-bit unsigned integer as N 64-bit limbs in
//! little-endian order. The four supported widths (128/256/512/1024 bits)
//! are distinct, non-interchangeable instantiations of one generic type.
//!
//! A value X is
//! ```text
//! X = Σ limbs[i] × 2^(64i)   for i = 0..N
//! ```
//! Values are plain `Copy` data on the stack: no allocation, no sharing, no
//! normalization. Operations return fresh values and wrap modulo `2^(64N)`,
//! reporting overflow through explicit flags.

use core::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::limb::{Limb, LIMB_BITS};

/// An unsigned integer of `N * 64` bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WideUint<const N: usize> {
    /// Limbs in little-endian order; `limbs[0]` is least significant.
    pub limbs: [Limb; N],
}

// serde's derive covers arrays only up to length 32, so the limb array is
// written out by hand as an N-tuple of limbs, least significant first.
impl<const N: usize> Serialize for WideUint<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(N)?;
        for limb in &self.limbs {
            tup.serialize_element(limb)?;
        }
        tup.end()
    }
}

impl<'de, const N: usize> Deserialize<'de> for WideUint<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LimbsVisitor<const N: usize>;

        impl<'de, const N: usize> Visitor<'de> for LimbsVisitor<N> {
            type Value = WideUint<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {} limbs", N)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut limbs = [0; N];
                for (i, slot) in limbs.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(WideUint { limbs })
            }
        }

        deserializer.deserialize_tuple(N, LimbsVisitor)
    }
}

/// 128-bit unsigned integer.
pub type U128 = WideUint<2>;

/// 256-bit unsigned integer.
pub type U256 = WideUint<4>;

/// 512-bit unsigned integer.
pub type U512 = WideUint<8>;

/// 1024-bit unsigned integer.
pub type U1024 = WideUint<16>;

impl<const N: usize> WideUint<N> {
    /// Total width in bits.
    pub const BITS: u32 = N as u32 * LIMB_BITS;

    /// Zero.
    pub const ZERO: Self = Self { limbs: [0; N] };

    /// All bits set: `2^(64N) - 1`.
    pub const MAX: Self = Self { limbs: [Limb::MAX; N] };

    /// One.
    pub fn one() -> Self {
        let mut limbs = [0; N];
        limbs[0] = 1;
        Self { limbs }
    }

    /// Create from raw limbs.
    pub const fn from_limbs(limbs: [Limb; N]) -> Self {
        Self { limbs }
    }

    /// Create from a u64 value.
    pub fn from_u64(value: u64) -> Self {
        let mut limbs = [0; N];
        limbs[0] = value;
        Self { limbs }
    }

    /// Create from a u128 value. Needs at least two limbs, which every
    /// supported width has.
    pub fn from_u128(value: u128) -> Self {
        let mut limbs = [0; N];
        limbs[0] = value as u64;
        limbs[1] = (value >> LIMB_BITS) as u64;
        Self { limbs }
    }

    /// Check if zero.
    pub fn is_zero(&self) -> bool {
        let mut folded = 0;
        for i in 0..N {
            folded |= self.limbs[i];
        }
        folded == 0
    }

    /// Set every limb to zero in place.
    pub fn clear(&mut self) {
        self.limbs = [0; N];
    }
}

impl<const N: usize> Default for WideUint<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> fmt::Display for WideUint<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for i in (0..N).rev() {
            write!(f, "{:016x}", self.limbs[i])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        let zero = U256::ZERO;
        let one = U256::one();

        assert!(zero.is_zero());
        assert!(!one.is_zero());
        assert_eq!(one.limbs, [1, 0, 0, 0]);
    }

    #[test]
    fn test_widths() {
        assert_eq!(U128::BITS, 128);
        assert_eq!(U256::BITS, 256);
        assert_eq!(U512::BITS, 512);
        assert_eq!(U1024::BITS, 1024);
    }

    #[test]
    fn test_from_u64() {
        let x = U512::from_u64(0x123456789ABCDEF0);
        assert_eq!(x.limbs[0], 0x123456789ABCDEF0);
        assert!(x.limbs[1..].iter().all(|&l| l == 0));
    }

    #[test]
    fn test_from_u128() {
        let x = U128::from_u128(u128::MAX - 1);
        assert_eq!(x.limbs, [u64::MAX - 1, u64::MAX]);
    }

    #[test]
    fn test_clear() {
        let mut x = U128::MAX;
        x.clear();
        assert!(x.is_zero());
    }

    #[test]
    fn test_display_hex() {
        let x = U128::from_limbs([0xDEF0, 0x12]);
        assert_eq!(format!("{}", x), "0x0000000000000012000000000000def0");
    }

    #[test]
    fn test_serde_roundtrip() {
        let x = U1024::from_limbs([u64::MAX; 16]);
        let json = serde_json::to_string(&x).unwrap();
        let back: U1024 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);

        // Limbs serialize least significant first
        let x = U128::from_limbs([1, 2]);
        assert_eq!(serde_json::to_string(&x).unwrap(), "[1,2]");
    }

    #[test]
    fn test_serde_rejects_wrong_length() {
        assert!(serde_json::from_str::<U128>("[1]").is_err());
        assert!(serde_json::from_str::<U128>("[1,2,3]").is_err());
    }
}
