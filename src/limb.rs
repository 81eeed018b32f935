//! 64-bit Limb Primitives
//!
//! Every multi-limb operation in this crate reduces to the widening
//! add/sub/multiply steps defined here. All of them are branch-free and
//! total over their inputs.

/// A single limb of a wide integer.
pub type Limb = u64;

/// Number of bits per limb.
pub const LIMB_BITS: u32 = 64;

/// Add with carry: `a + b + carry_in`, returning `(sum, carry_out)`.
///
/// Computed as two sequential overflow-checked additions: `a + b` can
/// carry, and folding `carry_in` into the wrapped partial sum can carry a
/// second time. A single combined check would miss one of the two.
#[inline(always)]
pub const fn adc(carry_in: bool, a: Limb, b: Limb) -> (Limb, bool) {
    let (partial, c1) = a.overflowing_add(b);
    let (sum, c2) = partial.overflowing_add(carry_in as Limb);
    (sum, c1 | c2)
}

/// Subtract with borrow: `a - b - borrow_in`, returning `(diff, borrow_out)`.
#[inline(always)]
pub const fn sbb(borrow_in: bool, a: Limb, b: Limb) -> (Limb, bool) {
    let (partial, b1) = a.overflowing_sub(b);
    let (diff, b2) = partial.overflowing_sub(borrow_in as Limb);
    (diff, b1 | b2)
}

/// Widening multiply: the exact 128-bit product of `a` and `b`, split into
/// `(low, high)` 64-bit halves.
#[inline(always)]
pub const fn widening_mul(a: Limb, b: Limb) -> (Limb, Limb) {
    let wide = a as u128 * b as u128;
    (wide as Limb, (wide >> LIMB_BITS) as Limb)
}

/// Widening multiply through 32-bit halves, without a native 64x64->128
/// multiply.
///
/// Targets lacking hardware 128-bit products would swap this in for
/// [`widening_mul`]. It stays compiled so the two paths can be checked
/// against each other; the tests assert they agree on every input class.
#[inline(always)]
pub const fn widening_mul_portable(a: Limb, b: Limb) -> (Limb, Limb) {
    const HALF_MASK: Limb = 0xFFFF_FFFF;
    const HALF_BITS: u32 = 32;

    let a_lo = a & HALF_MASK;
    let a_hi = a >> HALF_BITS;
    let b_lo = b & HALF_MASK;
    let b_hi = b >> HALF_BITS;

    let p0 = a_lo * b_lo;
    let p1 = a_lo * b_hi;
    let p2 = a_hi * b_lo;
    let p3 = a_hi * b_hi;

    // Middle column: at most three 32-bit terms, fits a limb.
    let mid = (p0 >> HALF_BITS) + (p1 & HALF_MASK) + (p2 & HALF_MASK);

    let low = (p0 & HALF_MASK) | (mid << HALF_BITS);
    let high = p3 + (p1 >> HALF_BITS) + (p2 >> HALF_BITS) + (mid >> HALF_BITS);

    (low, high)
}

/// Accumulate the product `a * b` into a three-limb column accumulator.
///
/// Schoolbook multiplication sums up to N widened products per output
/// column, so the carry out of a column needs two limbs: the high words
/// alone can exceed one limb once a column holds two or more products.
/// `acc.2` absorbs that spill; it is bounded by the number of products in
/// the column and cannot wrap.
#[inline(always)]
pub const fn mac(acc: (Limb, Limb, Limb), a: Limb, b: Limb) -> (Limb, Limb, Limb) {
    let (lo, hi) = widening_mul(a, b);
    let (t0, c0) = acc.0.overflowing_add(lo);
    let (t1, c1) = adc(c0, acc.1, hi);
    let t2 = acc.2 + c1 as Limb;
    (t0, t1, t2)
}
