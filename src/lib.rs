//! Fixed-Width Extended-Precision Integer Arithmetic
//!
//! Unsigned and signed integers of 128, 256, 512 and 1024 bits, stored as
//! little-endian arrays of 64-bit limbs:
//!
//! ```text
//! X = Σ limbs[i] × 2^(64i)   for i = 0..N
//! ```
//!
//! One generic implementation, `WideUint<N>` / `WideInt<N>` with
//! N ∈ {2, 4, 8, 16} limbs, covers all four widths; the aliases
//! [`U128`] through [`U1024`] and [`I128`] through [`I1024`] name them.
//!
//! ## Supported Operations
//!
//! - Addition and subtraction with explicit carry/borrow flags
//! - Comparison (`cmp_eq`, `cmp_lt`, `cmp_lte`, `cmp_gt`, `cmp_gte`)
//! - Bitwise and/or/xor/not and branchless mask selection
//! - Two's-complement negation and `clear`
//! - Schoolbook multiplication: truncated with overflow flag, and full
//!   double-width ([`WideProduct`])
//! - Logical shifts with amounts masked modulo the width
//! - Leading/trailing zero counts via smear + SWAR popcount
//! - Signed multiplication through branchless sign-magnitude handling
//!
//! ## Semantics
//!
//! Every operation is a pure, total function over value types: no heap, no
//! statics, no data-dependent branching in the signed-multiply path.
//! Wraparound modulo the width is the default; overflow is reported through
//! the returned flags, never as an error. Division, modulo and decimal
//! radix conversion are out of scope.
//!
//! ## Usage
//!
//! ```
//! use wideint::{U128, I128};
//!
//! let a = U128::from_limbs([u64::MAX, 0]);
//! let b = U128::from_limbs([1, 0]);
//! let (sum, carry) = a.add(&b);
//! assert_eq!(sum.limbs, [0, 1]);
//! assert!(!carry);
//!
//! let minus_one = I128::from_bits(U128::MAX);
//! assert_eq!(minus_one.mul(&minus_one).bits, U128::one());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod limb;
pub mod uint;

mod add;
mod bits;
mod bitwise;
mod compare;
mod shift;

pub mod int;
pub mod mul;
pub mod scalar;


// Re-exports for convenience
pub use int::{WideInt, I1024, I128, I256, I512};
pub use limb::{adc, sbb, widening_mul, Limb, LIMB_BITS};
pub use mul::WideProduct;
pub use uint::{WideUint, U1024, U128, U256, U512};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
