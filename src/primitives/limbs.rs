//! Slice-level limb kernels.
//!
//! Carry and borrow propagation over little-endian `u64` limb slices. Both
//! `Uint<N>` and the curve-specific reduction routines (which operate on
//! windows of a double-width product) are expressed in terms of these.

use std::cmp::Ordering;

/// Computes `a + b + carry`, returning the sum and the outgoing carry.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a - (b + borrow)`, returning the difference and the outgoing
/// borrow (0 or 1).
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (ret as u64, (ret >> 127) as u64)
}

/// `acc += rhs` over equal-length slices, returning the carry out.
pub(crate) fn add_assign(acc: &mut [u64], rhs: &[u64]) -> u64 {
    debug_assert_eq!(acc.len(), rhs.len());

    let mut carry = 0;
    for (a, &b) in acc.iter_mut().zip(rhs) {
        let (sum, c) = adc(*a, b, carry);
        *a = sum;
        carry = c;
    }

    carry
}

/// `acc -= rhs` over equal-length slices, returning the borrow out.
pub(crate) fn sub_assign(acc: &mut [u64], rhs: &[u64]) -> u64 {
    debug_assert_eq!(acc.len(), rhs.len());

    let mut borrow = 0;
    for (a, &b) in acc.iter_mut().zip(rhs) {
        let (diff, bw) = sbb(*a, b, borrow);
        *a = diff;
        borrow = bw;
    }

    borrow
}

/// Writes `input << shift` into `out` and returns the bits shifted out of
/// the top limb.
///
/// `shift` must lie in `1..64`.
pub(crate) fn shl_into(out: &mut [u64], input: &[u64], shift: u32) -> u64 {
    debug_assert!(shift > 0 && shift < 64);
    debug_assert_eq!(out.len(), input.len());

    let mut carry = 0;
    for (o, &limb) in out.iter_mut().zip(input) {
        *o = (limb << shift) | carry;
        carry = limb >> (64 - shift);
    }

    carry
}

/// Shifts the slice right by one bit in place, returning the bit shifted
/// out of the bottom limb.
pub(crate) fn shr1(limbs: &mut [u64]) -> u64 {
    let mut carry = 0;
    for limb in limbs.iter_mut().rev() {
        let temp = *limb;
        *limb = (temp >> 1) | carry;
        carry = temp << 63;
    }

    carry >> 63
}

/// Numeric comparison of two equal-length slices.
pub(crate) fn cmp(a: &[u64], b: &[u64]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());

    for (l, r) in a.iter().zip(b).rev() {
        match l.cmp(r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

pub(crate) fn is_zero(limbs: &[u64]) -> bool {
    limbs.iter().all(|&l| l == 0)
}

/// Number of significant bits; zero for the value zero.
pub(crate) fn bits(limbs: &[u64]) -> u32 {
    match limbs.iter().rposition(|&l| l != 0) {
        Some(top) => top as u32 * 64 + (64 - limbs[top].leading_zeros()),
        None => 0,
    }
}
