//! Schoolbook Multiplication
//!
//! Truncated same-width products and full double-width products, both via
//! O(N²) column-by-column (diagonal) accumulation: output column k collects
//! every partial product `a[i] * b[k-i]`.
//!
//! The carry passed from one column to the next is a two-limb value. A
//! column holds up to N widened products, and already with two of them the
//! summed high words can exceed one limb, so a single-word running carry
//! silently wraps on near-maximal operands. Each column therefore
//! accumulates into the three-word form `(t0, t1, t2)` (see [`mac`]), and
//! `(t1, t2)` seeds the next column.

use serde::{Deserialize, Serialize};

use crate::limb::mac;
use crate::uint::WideUint;

/// The exact 2N-limb product of two N-limb operands, as same-width halves.
///
/// Concatenating `high` above `low` gives the true product; `high` is
/// all-zero exactly when the product fits in N limbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WideProduct<const N: usize> {
    /// Least significant N limbs.
    pub low: WideUint<N>,
    /// Most significant N limbs.
    pub high: WideUint<N>,
}

impl<const N: usize> WideProduct<N> {
    /// Check if both halves are zero.
    pub fn is_zero(&self) -> bool {
        self.low.is_zero() && self.high.is_zero()
    }
}

impl<const N: usize> WideUint<N> {
    /// Truncated product modulo `2^(64N)`, plus an overflow flag.
    ///
    /// Only columns `k < N` are materialized. The flag is set iff the true
    /// product does not fit N limbs, equivalently iff the high half of
    /// [`Self::mul_full`] would be nonzero: either the carry out of the top
    /// materialized column is nonzero, or some partial product with
    /// `i + j >= N` is nonzero.
    pub fn mul(&self, rhs: &Self) -> (Self, bool) {
        let mut limbs = [0; N];
        // Two-limb carry into the current column.
        let mut carry = (0, 0);

        for k in 0..N {
            let mut acc = (carry.0, carry.1, 0);
            for i in 0..=k {
                acc = mac(acc, self.limbs[i], rhs.limbs[k - i]);
            }
            limbs[k] = acc.0;
            carry = (acc.1, acc.2);
        }

        let mut overflow = (carry.0 | carry.1) != 0;
        // Partial products at i + j >= N never reach the low half; every
        // high-half contribution is nonnegative, so any nonzero one spills.
        for i in 1..N {
            for j in (N - i)..N {
                overflow |= self.limbs[i] != 0 && rhs.limbs[j] != 0;
            }
        }

        (Self { limbs }, overflow)
    }

    /// Full double-width product.
    pub fn mul_full(&self, rhs: &Self) -> WideProduct<N> {
        let mut low = [0; N];
        let mut high = [0; N];
        let mut carry = (0, 0);

        for k in 0..(2 * N - 1) {
            let mut acc = (carry.0, carry.1, 0);
            let first = if k < N { 0 } else { k - N + 1 };
            let last = if k < N { k } else { N - 1 };
            for i in first..=last {
                acc = mac(acc, self.limbs[i], rhs.limbs[k - i]);
            }
            if k < N {
                low[k] = acc.0;
            } else {
                high[k - N] = acc.0;
            }
            carry = (acc.1, acc.2);
        }

        // The product is below 2^(128N), so the carry out of the last
        // computed column is a single limb.
        debug_assert_eq!(carry.1, 0);
        high[N - 1] = carry.0;

        WideProduct {
            low: WideUint { limbs: low },
            high: WideUint { limbs: high },
        }
    }
}
