//! Bitwise Logic and Branchless Selection
//!
//! Elementwise and/or/xor/not over the limb array, plus the mask select
//! that the signed layer uses to keep its control flow independent of the
//! data.

use crate::limb::Limb;
use crate::uint::WideUint;

impl<const N: usize> WideUint<N> {
    /// Bitwise AND.
    pub fn and(&self, rhs: &Self) -> Self {
        let mut limbs = [0; N];
        for i in 0..N {
            limbs[i] = self.limbs[i] & rhs.limbs[i];
        }
        Self { limbs }
    }

    /// Bitwise OR.
    pub fn or(&self, rhs: &Self) -> Self {
        let mut limbs = [0; N];
        for i in 0..N {
            limbs[i] = self.limbs[i] | rhs.limbs[i];
        }
        Self { limbs }
    }

    /// Bitwise XOR.
    pub fn xor(&self, rhs: &Self) -> Self {
        let mut limbs = [0; N];
        for i in 0..N {
            limbs[i] = self.limbs[i] ^ rhs.limbs[i];
        }
        Self { limbs }
    }

    /// Bitwise NOT.
    pub fn not(&self) -> Self {
        let mut limbs = [0; N];
        for i in 0..N {
            limbs[i] = !self.limbs[i];
        }
        Self { limbs }
    }

    /// Branchless select: per limb, `(if_true & mask) | (if_false & !mask)`.
    ///
    /// `mask` must be all-ones or all-zero. No branch is taken on it, so
    /// callers' execution pattern does not depend on which value wins.
    pub fn select(mask: Limb, if_true: &Self, if_false: &Self) -> Self {
        let mut limbs = [0; N];
        for i in 0..N {
            limbs[i] = (if_true.limbs[i] & mask) | (if_false.limbs[i] & !mask);
        }
        Self { limbs }
    }
}
