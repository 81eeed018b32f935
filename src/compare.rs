//! Comparison Predicates
//!
//! Equality folds the per-limb XOR differences and applies a branchless
//! zero test; the ordering predicates ride on the subtraction borrow chain
//! and discard the numeric result. `cmp_lte`, `cmp_gt` and `cmp_gte` are
//! derived from `cmp_lt` and `cmp_eq` rather than reimplemented.

use crate::limb::sbb;
use crate::uint::WideUint;

impl<const N: usize> WideUint<N> {
    /// Branchless equality.
    ///
    /// `d | d.wrapping_neg()` has its top bit set for every nonzero `d`
    /// under two's complement, so shifting it down yields a 0/1 zero
    /// indicator without comparing. Flipping that bit gives equality.
    pub fn cmp_eq(&self, rhs: &Self) -> bool {
        let mut diff = 0u64;
        for i in 0..N {
            diff |= self.limbs[i] ^ rhs.limbs[i];
        }
        (((diff | diff.wrapping_neg()) >> 63) ^ 1) == 1
    }

    /// `self < rhs`, taken from the final borrow of a ripple subtract.
    pub fn cmp_lt(&self, rhs: &Self) -> bool {
        let mut borrow = false;
        for i in 0..N {
            let (_, b) = sbb(borrow, self.limbs[i], rhs.limbs[i]);
            borrow = b;
        }
        borrow
    }

    /// `self <= rhs`.
    pub fn cmp_lte(&self, rhs: &Self) -> bool {
        self.cmp_lt(rhs) | self.cmp_eq(rhs)
    }

    /// `self > rhs`.
    pub fn cmp_gt(&self, rhs: &Self) -> bool {
        rhs.cmp_lt(self)
    }

    /// `self >= rhs`.
    pub fn cmp_gte(&self, rhs: &Self) -> bool {
        rhs.cmp_lte(self)
    }
}
