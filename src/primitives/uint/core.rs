//! Multi-limb unsigned integer primitive
//!
//! The value is stored as `N` 64-bit limbs, least-significant limb first,
//! and represents a non-negative integer modulo 2^(64·N). The same type is
//! used for field elements (kept in `[0, p)`) and scalars (kept in
//! `[0, n)`); keeping values in range is the caller's responsibility.

use std::cmp::Ordering;

use zeroize::Zeroize;

use crate::primitives::limbs;

/// Fixed-width unsigned integer of `N` 64-bit limbs.
///
/// The internal representation is little-endian at the limb level. This
/// type intentionally exposes only the functionality required by the curve
/// arithmetic, favoring explicitness over completeness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Uint<const N: usize>(pub(crate) [u64; N]);

impl<const N: usize> Uint<N> {
    /// The value zero.
    pub const ZERO: Self = Self([0u64; N]);

    /// The value one.
    pub const ONE: Self = Self::from_u64(1);

    /// Number of bits in the representation (64·N).
    pub const BITS: u32 = 64 * N as u32;

    /// Number of bytes in the big-endian encoding (8·N).
    pub const BYTES: usize = 8 * N;

    /// Builds a value from its limbs, least-significant first.
    pub const fn from_limbs(limbs: [u64; N]) -> Self {
        Self(limbs)
    }

    /// Builds a value whose lowest limb is `value` and all others are zero.
    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; N];
        limbs[0] = value;

        Self(limbs)
    }

    /// Returns the limbs, least-significant first.
    pub const fn as_limbs(&self) -> &[u64; N] {
        &self.0
    }

    /// Sets the value to zero.
    pub fn clear(&mut self) {
        self.0 = [0u64; N];
    }

    /// Returns `true` if every limb is zero.
    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.0)
    }

    /// Returns `true` if the lowest bit is clear.
    pub const fn is_even(&self) -> bool {
        self.0[0] & 1 == 0
    }

    /// Returns bit `index` (0 is the least significant bit).
    ///
    /// Indices at or beyond `BITS` read as zero.
    pub const fn bit(&self, index: u32) -> bool {
        let limb = (index / 64) as usize;
        if limb >= N {
            return false;
        }

        (self.0[limb] >> (index % 64)) & 1 == 1
    }

    /// Number of significant bits, i.e. the position of the highest set
    /// bit plus one. Zero has zero bits.
    pub fn bits(&self) -> u32 {
        limbs::bits(&self.0)
    }
}

impl<const N: usize> Default for Uint<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Ord for Uint<N> {
    /// Numeric three-way comparison, most significant limb first.
    fn cmp(&self, other: &Self) -> Ordering {
        limbs::cmp(&self.0, &other.0)
    }
}

impl<const N: usize> PartialOrd for Uint<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Zeroize for Uint<N> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
