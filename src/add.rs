//! Addition, Subtraction and Two's-Complement Negation
//!
//! Each operation ripples the limb primitive across the array in
//! increasing index order, threading the single-bit flag forward. The final
//! carry/borrow is returned to the caller; silent wraparound is the defined
//! semantics and the flag is informational.

use crate::limb::adc;
use crate::limb::sbb;
use crate::uint::WideUint;

impl<const N: usize> WideUint<N> {
    /// Add, returning `(wrapped sum, carry out)`.
    pub fn add(&self, rhs: &Self) -> (Self, bool) {
        let mut limbs = [0; N];
        let mut carry = false;
        for i in 0..N {
            let (sum, c) = adc(carry, self.limbs[i], rhs.limbs[i]);
            limbs[i] = sum;
            carry = c;
        }
        (Self { limbs }, carry)
    }

    /// Subtract, returning `(wrapped difference, borrow out)`.
    pub fn sub(&self, rhs: &Self) -> (Self, bool) {
        let mut limbs = [0; N];
        let mut borrow = false;
        for i in 0..N {
            let (diff, b) = sbb(borrow, self.limbs[i], rhs.limbs[i]);
            limbs[i] = diff;
            borrow = b;
        }
        (Self { limbs }, borrow)
    }

    /// Two's-complement negate: `!self + 1`, returning the result and the
    /// carry out of the `+1` ripple.
    ///
    /// The carry is set only when negating zero. Negating the minimum
    /// signed pattern (top bit alone) reproduces the identical bits; it has
    /// no positive counterpart.
    pub fn negate(&self) -> (Self, bool) {
        let mut out = self.not();
        let mut carry = true;
        for i in 0..N {
            let (sum, c) = adc(false, out.limbs[i], carry as u64);
            out.limbs[i] = sum;
            carry = c;
        }
        (out, carry)
    }
}
