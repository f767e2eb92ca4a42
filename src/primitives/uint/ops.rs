//! Arithmetic operations for `Uint<N>`
//!
//! All operations work on the full `N`-limb width and report their carry,
//! borrow or shifted-out bits explicitly instead of silently wrapping, so
//! that modular routines built on top can correct for them.
//!
//! Multiplication and squaring produce a double-width [`Wide<N>`] and use a
//! 128-bit accumulator plus an extra carry limb per output column, so that
//! summing partial products can never overflow.

use crate::primitives::limbs;
use crate::primitives::{Uint, Wide};

impl<const N: usize> Uint<N> {
    /// Computes `self + rhs`, returning the truncated sum and the carry out.
    pub fn add_with_carry(&self, rhs: &Self) -> (Self, u64) {
        let mut out = *self;
        let carry = limbs::add_assign(&mut out.0, &rhs.0);

        (out, carry)
    }

    /// Computes `self - rhs`, returning the wrapped difference and the
    /// borrow out.
    pub fn sub_with_borrow(&self, rhs: &Self) -> (Self, u64) {
        let mut out = *self;
        let borrow = limbs::sub_assign(&mut out.0, &rhs.0);

        (out, borrow)
    }

    /// Computes `self << shift` for `0 < shift < 64`, returning the
    /// truncated result and the bits shifted out of the top limb.
    pub fn shl_small(&self, shift: u32) -> (Self, u64) {
        let mut out = Self::ZERO;
        let carry = limbs::shl_into(&mut out.0, &self.0, shift);

        (out, carry)
    }

    /// Shifts right by one bit in place.
    pub fn shr1(&mut self) {
        limbs::shr1(&mut self.0);
    }

    /// Full multiplication, producing the exact double-width product.
    ///
    /// Output columns are computed in order (product scanning). Each column
    /// accumulates into `r01` (128 bits) with overflow collected in `r2`.
    pub fn mul_wide(&self, rhs: &Self) -> Wide<N> {
        let mut out = Wide::ZERO;
        let mut r01: u128 = 0;
        let mut r2: u64 = 0;

        for k in 0..(2 * N - 1) {
            let min = if k < N { 0 } else { k + 1 - N };

            for i in min..=k.min(N - 1) {
                let product = (self.0[i] as u128) * (rhs.0[k - i] as u128);
                let (sum, overflow) = r01.overflowing_add(product);
                r01 = sum;
                r2 += overflow as u64;
            }

            out.set_limb(k, r01 as u64);
            r01 = (r01 >> 64) | ((r2 as u128) << 64);
            r2 = 0;
        }

        out.set_limb(2 * N - 1, r01 as u64);
        out
    }

    /// Squaring, producing the exact double-width result.
    ///
    /// Cross terms `a[i]·a[j]` with `i != j` are computed once and doubled.
    pub fn square_wide(&self) -> Wide<N> {
        let mut out = Wide::ZERO;
        let mut r01: u128 = 0;
        let mut r2: u64 = 0;

        for k in 0..(2 * N - 1) {
            let min = if k < N { 0 } else { k + 1 - N };

            for i in min..=(k / 2) {
                let mut product = (self.0[i] as u128) * (self.0[k - i] as u128);
                if i < k - i {
                    r2 += (product >> 127) as u64;
                    product <<= 1;
                }

                let (sum, overflow) = r01.overflowing_add(product);
                r01 = sum;
                r2 += overflow as u64;
            }

            out.set_limb(k, r01 as u64);
            r01 = (r01 >> 64) | ((r2 as u128) << 64);
            r2 = 0;
        }

        out.set_limb(2 * N - 1, r01 as u64);
        out
    }
}
