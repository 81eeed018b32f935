//! Leading and Trailing Zero Counts
//!
//! Per limb, the highest (clz) or lowest (ctz) set bit is smeared across
//! the word by OR-ing with shifted copies of itself; the complement then
//! population-counts to that limb's zero-run length in [0, 64].
//!
//! Per-limb counts chain across the array with a continuation mask that
//! stays all-ones only while every limb seen so far was entirely zero
//! (count exactly 64, detected as `count >> 6`). All of it is branch-free.

use crate::limb::Limb;
use crate::uint::WideUint;

/// SWAR population count.
///
/// Pairwise bit sums, then nibble sums, then a single multiply collapses
/// the byte sums into the top byte. The multiply wraps by design.
#[inline(always)]
pub(crate) const fn popcount(mut x: Limb) -> Limb {
    // Count the bits in every 2-bit pair.
    x -= (x >> 1) & 0x5555_5555_5555_5555;

    // Sum the 2-bit pairs into 4-bit nibbles.
    x = (x & 0x3333_3333_3333_3333) + ((x >> 2) & 0x3333_3333_3333_3333);

    // Sum the nibbles into bytes.
    x = (x + (x >> 4)) & 0x0f0f_0f0f_0f0f_0f0f;

    // Fold the byte sums into the top byte.
    x.wrapping_mul(0x0101_0101_0101_0101) >> 56
}

/// Smear the highest set bit down through every lower position.
#[inline(always)]
const fn smear_down(mut x: Limb) -> Limb {
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    x
}

/// Smear the lowest set bit up through every higher position.
#[inline(always)]
const fn smear_up(mut x: Limb) -> Limb {
    x |= x << 1;
    x |= x << 2;
    x |= x << 4;
    x |= x << 8;
    x |= x << 16;
    x |= x << 32;
    x
}

/// Leading zeros of one limb, in [0, 64].
#[inline(always)]
const fn limb_clz(limb: Limb) -> Limb {
    popcount(!smear_down(limb))
}

/// Trailing zeros of one limb, in [0, 64].
#[inline(always)]
const fn limb_ctz(limb: Limb) -> Limb {
    popcount(!smear_up(limb))
}

impl<const N: usize> WideUint<N> {
    /// Count leading zero bits, scanning from the most significant limb.
    /// An all-zero value yields the full width `N * 64`.
    pub fn clz(&self) -> u32 {
        let mut count = 0;
        let mut mask = Limb::MAX;
        for i in (0..N).rev() {
            let r = limb_clz(self.limbs[i]);
            count += r & mask;
            // Stay open only while the limb was entirely zero.
            mask &= (r >> 6).wrapping_neg();
        }
        count as u32
    }

    /// Count trailing zero bits, scanning from the least significant limb.
    /// An all-zero value yields the full width `N * 64`.
    pub fn ctz(&self) -> u32 {
        let mut count = 0;
        let mut mask = Limb::MAX;
        for i in 0..N {
            let r = limb_ctz(self.limbs[i]);
            count += r & mask;
            mask &= (r >> 6).wrapping_neg();
        }
        count as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uint::{U128, U1024, U256};

    #[test]
    fn test_popcount_matches_count_ones() {
        let samples = [
            0u64,
            1,
            3,
            0x5555_5555_5555_5555,
            0xAAAA_AAAA_AAAA_AAAA,
            0xFFFF_0000_FFFF_0000,
            u64::MAX,
        ];
        for &x in &samples {
            assert_eq!(popcount(x), x.count_ones() as u64);
        }
    }

    #[test]
    fn test_popcount_random() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let x: u64 = rng.gen();
            assert_eq!(popcount(x), x.count_ones() as u64);
        }
    }

    #[test]
    fn test_clz_ctz_zero_is_full_width() {
        assert_eq!(U128::ZERO.clz(), 128);
        assert_eq!(U128::ZERO.ctz(), 128);
        assert_eq!(U1024::ZERO.clz(), 1024);
        assert_eq!(U1024::ZERO.ctz(), 1024);
    }

    #[test]
    fn test_clz_bottom_bit() {
        // Only bit 0 set in a 256-bit value: 255 leading zeros
        let x = U256::from_limbs([1, 0, 0, 0]);
        assert_eq!(x.clz(), 255);
        assert_eq!(x.ctz(), 0);
    }

    #[test]
    fn test_clz_ctz_top_bit() {
        let mut limbs = [0u64; 4];
        limbs[3] = 1 << 63;
        let x = U256::from_limbs(limbs);
        assert_eq!(x.clz(), 0);
        assert_eq!(x.ctz(), 255);
    }

    #[test]
    fn test_single_bit_sum_is_width_minus_one() {
        for p in 0..1024 {
            let x = U1024::one().shl(p);
            assert_eq!(x.clz() + x.ctz(), 1023, "p={}", p);
            assert_eq!(x.ctz(), p);
        }
    }

    #[test]
    fn test_clz_ctz_match_native_u128() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..2000 {
            let x: u128 = rng.gen();
            let wide = U128::from_u128(x);
            assert_eq!(wide.clz(), x.leading_zeros());
            assert_eq!(wide.ctz(), x.trailing_zeros());
        }
    }

    #[test]
    fn test_count_stops_at_first_nonuniform_limb() {
        // A zero limb *between* set limbs must not extend the run
        let x = U256::from_limbs([1 << 10, 0, 1 << 20, 0]);
        assert_eq!(x.ctz(), 10);
        assert_eq!(x.clz(), 64 + 43); // top limb empty, then 43 zeros in limb 2
    }
}
