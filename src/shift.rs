//! Logical Shifts
//!
//! Shift amounts are masked to `s mod (N * 64)` (the widths are powers of
//! two), then split into a whole-limb jump and a sub-limb offset. Each
//! output limb combines one source limb shifted by the offset with the
//! spill of its neighbor shifted the opposite way.
//!
//! When the offset is zero the neighbor term would be shifted by 64, which
//! is not a defined u64 shift. The spill shift amount is masked to stay in
//! range and the whole term is zeroed through `spill_mask` instead, which
//! sidesteps the classic trap in hand-written shift code.

use crate::uint::WideUint;

impl<const N: usize> WideUint<N> {
    /// Logical right shift by `s mod (N * 64)` bits.
    pub fn shr(&self, s: u32) -> Self {
        let s = s & (Self::BITS - 1);
        let limb_jump = (s >> 6) as usize;
        let bit_off = s & 63;
        let bit_rev = (64 - bit_off) & 63;
        let spill_mask = ((bit_off != 0) as u64).wrapping_neg();

        let mut limbs = [0; N];
        for i in 0..N {
            let src = i + limb_jump;
            let mut word = 0;
            if src < N {
                word = self.limbs[src] >> bit_off;
                if src + 1 < N {
                    word |= (self.limbs[src + 1] << bit_rev) & spill_mask;
                }
            }
            limbs[i] = word;
        }
        Self { limbs }
    }

    /// Logical left shift by `s mod (N * 64)` bits.
    pub fn shl(&self, s: u32) -> Self {
        let s = s & (Self::BITS - 1);
        let limb_jump = (s >> 6) as usize;
        let bit_off = s & 63;
        let bit_rev = (64 - bit_off) & 63;
        let spill_mask = ((bit_off != 0) as u64).wrapping_neg();

        let mut limbs = [0; N];
        for i in 0..N {
            let mut word = 0;
            if i >= limb_jump {
                let src = i - limb_jump;
                word = self.limbs[src] << bit_off;
                if src > 0 {
                    word |= (self.limbs[src - 1] >> bit_rev) & spill_mask;
                }
            }
            limbs[i] = word;
        }
        Self { limbs }
    }
}
