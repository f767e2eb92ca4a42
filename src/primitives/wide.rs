//! Double-width products
//!
//! `Wide<N>` holds the `2·N`-limb result of multiplying two `Uint<N>`
//! values. It is stored as two halves because the limb count `2·N` cannot
//! be named as an array length in generic code.
//!
//! Besides limb access for the curve-specific reductions, it supports the
//! shift-and-subtract reduction modulo an arbitrary modulus, which is how
//! scalars are multiplied modulo the group order.

use std::cmp::Ordering;

use crate::primitives::Uint;
use crate::primitives::limbs;

/// Double-width unsigned integer, `lo + hi · 2^(64·N)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Wide<const N: usize> {
    pub(crate) lo: Uint<N>,
    pub(crate) hi: Uint<N>,
}

impl<const N: usize> Wide<N> {
    /// The value zero.
    pub const ZERO: Self = Self {
        lo: Uint::ZERO,
        hi: Uint::ZERO,
    };

    /// Builds a double-width value from its low and high halves.
    pub const fn new(lo: Uint<N>, hi: Uint<N>) -> Self {
        Self { lo, hi }
    }

    /// Low `N` limbs.
    pub const fn lo(&self) -> &Uint<N> {
        &self.lo
    }

    /// High `N` limbs.
    pub const fn hi(&self) -> &Uint<N> {
        &self.hi
    }

    /// Limb `index` of the `2·N`, least significant first.
    pub(crate) const fn limb(&self, index: usize) -> u64 {
        if index < N {
            self.lo.0[index]
        } else {
            self.hi.0[index - N]
        }
    }

    pub(crate) fn set_limb(&mut self, index: usize, value: u64) {
        if index < N {
            self.lo.0[index] = value;
        } else {
            self.hi.0[index - N] = value;
        }
    }

    /// Number of significant bits.
    pub fn bits(&self) -> u32 {
        if self.hi.is_zero() {
            self.lo.bits()
        } else {
            Uint::<N>::BITS + self.hi.bits()
        }
    }

    /// Returns `value << shift` as a double-width integer.
    ///
    /// Limbs that would land beyond `2·N` are dropped; callers only shift a
    /// modulus up to the bit length of a double-width value, so those limbs
    /// are always zero.
    fn shifted(value: &Uint<N>, shift: u32) -> Self {
        let mut out = Self::ZERO;
        let digit_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;

        let mut carry = 0u64;
        for (i, &limb) in value.0.iter().enumerate() {
            let word = if bit_shift == 0 {
                limb
            } else {
                let word = (limb << bit_shift) | carry;
                carry = limb >> (64 - bit_shift);
                word
            };

            if i + digit_shift < 2 * N {
                out.set_limb(i + digit_shift, word);
            }
        }
        if carry != 0 && N + digit_shift < 2 * N {
            out.set_limb(N + digit_shift, carry);
        }

        out
    }

    fn sub_assign(&mut self, rhs: &Self) {
        let borrow = limbs::sub_assign(&mut self.lo.0, &rhs.lo.0);
        let (hi, _) = self.hi.sub_with_borrow(&rhs.hi);
        let (hi, _) = hi.sub_with_borrow(&Uint::from_u64(borrow));
        self.hi = hi;
    }

    fn shr1(&mut self) {
        let carry = self.hi.0[0] << 63;
        self.hi.shr1();
        self.lo.shr1();
        self.lo.0[N - 1] |= carry;
    }

    /// Reduces the value modulo an arbitrary non-zero `modulus`.
    ///
    /// The modulus is shifted left until its top bit lines up with the top
    /// bit of the value, then walked back down one bit at a time,
    /// subtracting it whenever it fits. After the last step the remainder
    /// is below `modulus` and fits in a single width.
    pub fn reduce(&self, modulus: &Uint<N>) -> Uint<N> {
        let mod_bits = modulus.bits();
        let value_bits = self.bits();

        if value_bits < mod_bits {
            return self.lo;
        }

        let shift = value_bits - mod_bits;
        let mut remainder = *self;
        let mut multiple = Self::shifted(modulus, shift);

        for _ in 0..=shift {
            if multiple <= remainder {
                remainder.sub_assign(&multiple);
            }
            multiple.shr1();
        }

        remainder.lo
    }
}

impl<const N: usize> Ord for Wide<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hi.cmp(&other.hi) {
            Ordering::Equal => self.lo.cmp(&other.lo),
            ord => ord,
        }
    }
}

impl<const N: usize> PartialOrd for Wide<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
