//! Signed Fixed-Width Integers
//!
//! Same limb storage as the unsigned type, read as two's complement: the
//! sign is the top bit of the most significant limb. Multiplication goes
//! through unsigned magnitudes with every sign decision made by mask
//! selection, so its control flow and timing do not depend on the operands'
//! signs.

use serde::{Deserialize, Serialize};

use crate::limb::Limb;
use crate::uint::WideUint;

/// A signed integer of `N * 64` bits, two's complement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WideInt<const N: usize> {
    /// The underlying bit pattern; the top bit of `bits.limbs[N-1]` is the
    /// sign.
    pub bits: WideUint<N>,
}

/// 128-bit signed integer.
pub type I128 = WideInt<2>;

/// 256-bit signed integer.
pub type I256 = WideInt<4>;

/// 512-bit signed integer.
pub type I512 = WideInt<8>;

/// 1024-bit signed integer.
pub type I1024 = WideInt<16>;

impl<const N: usize> WideInt<N> {
    /// Zero.
    pub const ZERO: Self = Self {
        bits: WideUint::ZERO,
    };

    /// Wrap an unsigned bit pattern, reinterpreting it as two's complement.
    pub const fn from_bits(bits: WideUint<N>) -> Self {
        Self { bits }
    }

    /// All-ones if negative, all-zero otherwise.
    ///
    /// The most significant limb is reinterpreted as `i64` and shifted
    /// right by 63. Rust guarantees `>>` on signed integers is arithmetic
    /// (sign-extending); the whole signed layer rests on that contract.
    pub fn sign_mask(&self) -> Limb {
        ((self.bits.limbs[N - 1] as i64) >> 63) as Limb
    }

    /// Check if negative.
    pub fn is_negative(&self) -> bool {
        self.sign_mask() != 0
    }

    /// Two's-complement negation: bit-identical to the unsigned negate.
    pub fn negate(&self) -> (Self, bool) {
        let (bits, carry) = self.bits.negate();
        (Self { bits }, carry)
    }

    /// Branchless magnitude: negate unconditionally, then select on the
    /// sign mask.
    fn unsigned_abs(&self) -> WideUint<N> {
        let (negated, _) = self.bits.negate();
        WideUint::select(self.sign_mask(), &negated, &self.bits)
    }

    /// Signed multiply, truncated to N limbs.
    ///
    /// Sign-magnitude over the unsigned engine: both magnitudes multiply
    /// unsigned, then the product is conditionally negated on the XOR of
    /// the input sign masks. Selects throughout, never a branch. The
    /// minimum value has no positive magnitude; results involving it wrap
    /// per two's complement, like every other operation here.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mask_a = self.sign_mask();
        let mask_b = rhs.sign_mask();

        let abs_a = self.unsigned_abs();
        let abs_b = rhs.unsigned_abs();

        let (product, _) = abs_a.mul(&abs_b);

        let result_mask = mask_a ^ mask_b;
        let (negated, _) = product.negate();

        Self {
            bits: WideUint::select(result_mask, &negated, &product),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uint::{U128, U256};

    fn i128_of(v: i128) -> I128 {
        I128::from_bits(U128::from_u128(v as u128))
    }

    #[test]
    fn test_sign_mask() {
        assert_eq!(i128_of(1).sign_mask(), 0);
        assert_eq!(i128_of(0).sign_mask(), 0);
        assert_eq!(i128_of(-1).sign_mask(), u64::MAX);
        assert!(i128_of(i128::MIN).is_negative());
    }

    #[test]
    fn test_minus_one_squared() {
        // All-ones is -1 at every width; (-1)·(-1) = 1
        let minus_one = I256::from_bits(U256::MAX);
        let prod = minus_one.mul(&minus_one);
        assert_eq!(prod.bits, U256::one());

        let minus_one = I1024::from_bits(crate::uint::U1024::MAX);
        let prod = minus_one.mul(&minus_one);
        assert_eq!(prod.bits, crate::uint::U1024::one());
    }

    #[test]
    fn test_mixed_signs() {
        assert_eq!(i128_of(-3).mul(&i128_of(5)), i128_of(-15));
        assert_eq!(i128_of(3).mul(&i128_of(-5)), i128_of(-15));
        assert_eq!(i128_of(-3).mul(&i128_of(-5)), i128_of(15));
        assert_eq!(i128_of(3).mul(&i128_of(5)), i128_of(15));
    }

    #[test]
    fn test_mul_matches_native_i128() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..2000 {
            let x: i128 = rng.gen();
            let y: i128 = rng.gen();
            let prod = i128_of(x).mul(&i128_of(y));
            assert_eq!(prod, i128_of(x.wrapping_mul(y)));
        }
    }

    #[test]
    fn test_min_value_wraps() {
        // MIN has no positive magnitude; MIN * -1 wraps back to MIN
        let min = i128_of(i128::MIN);
        assert_eq!(min.mul(&i128_of(-1)), min);

        // and MIN * 1 is MIN
        assert_eq!(min.mul(&i128_of(1)), min);
    }

    #[test]
    fn test_negate() {
        let (neg, _) = i128_of(5).negate();
        assert_eq!(neg, i128_of(-5));

        let (zero, carry) = I128::ZERO.negate();
        assert_eq!(zero, I128::ZERO);
        assert!(carry);

        // negating MIN reproduces MIN
        let (neg, _) = i128_of(i128::MIN).negate();
        assert_eq!(neg, i128_of(i128::MIN));
    }

    #[test]
    fn test_serde_roundtrip() {
        let x = i128_of(-12345);
        let json = serde_json::to_string(&x).unwrap();
        let back: I128 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn test_arithmetic_shift_contract() {
        // The sign mask relies on i64 >> being sign-extending
        assert_eq!((-1i64) >> 1, -1);
        assert_eq!((i64::MIN >> 63) as u64, u64::MAX);
    }
}
