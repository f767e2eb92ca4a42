//! Generic modular arithmetic over `Uint<N>`.
//!
//! Every routine assumes its operands are already reduced into
//! `[0, modulus)` and returns a reduced result.

use crate::primitives::Uint;

/// Computes `(a + b) mod m` for `a, b < m`.
///
/// A single conditional subtraction suffices because `a + b < 2m`. The
/// carry out of the raw addition is part of the test: when it is set the
/// true sum exceeds `2^(64·N) > m`.
pub fn mod_add<const N: usize>(a: &Uint<N>, b: &Uint<N>, m: &Uint<N>) -> Uint<N> {
    let (sum, carry) = a.add_with_carry(b);

    if carry != 0 || sum >= *m {
        sum.sub_with_borrow(m).0
    } else {
        sum
    }
}

/// Computes `(a - b) mod m` for `a, b < m`.
///
/// On borrow the wrapped difference is `2^(64·N) - (b - a)`; adding `m`
/// with overflow yields `m - (b - a)`.
pub fn mod_sub<const N: usize>(a: &Uint<N>, b: &Uint<N>, m: &Uint<N>) -> Uint<N> {
    let (diff, borrow) = a.sub_with_borrow(b);

    if borrow != 0 {
        diff.add_with_carry(m).0
    } else {
        diff
    }
}

/// Computes `(a · b) mod m` for an arbitrary non-zero modulus.
///
/// This is the slow path, used for scalar arithmetic modulo the group
/// order. Field multiplications go through the curve-specific reduction.
pub fn mod_mul<const N: usize>(a: &Uint<N>, b: &Uint<N>, m: &Uint<N>) -> Uint<N> {
    a.mul_wide(b).reduce(m)
}

/// Halves `value` modulo the odd modulus `m` in place: adds `m` first when
/// `value` is odd, keeping the carry as the new top bit.
pub(crate) fn mod_half<const N: usize>(value: &mut Uint<N>, m: &Uint<N>) {
    let mut carry = 0;
    if !value.is_even() {
        let (sum, c) = value.add_with_carry(m);
        *value = sum;
        carry = c;
    }

    value.shr1();
    if carry != 0 {
        value.0[N - 1] |= 0x8000_0000_0000_0000;
    }
}

/// Computes `a^-1 mod m` for odd `m` with the binary extended Euclidean
/// algorithm.
///
/// The state `(a, b, u, v)` keeps `a ≡ u·input` and `b ≡ v·input`. The even
/// member is halved together with its companion; when both are odd the
/// larger is reduced by the smaller and then halved. The loop stops at
/// `a = b = gcd = 1`, leaving the inverse in `u`.
///
/// Zero has no inverse and maps to zero.
pub fn mod_inv<const N: usize>(input: &Uint<N>, m: &Uint<N>) -> Uint<N> {
    if input.is_zero() {
        return Uint::ZERO;
    }

    let mut a = *input;
    let mut b = *m;
    let mut u = Uint::<N>::ONE;
    let mut v = Uint::<N>::ZERO;

    loop {
        let ordering = a.cmp(&b);
        if ordering.is_eq() {
            break;
        }

        if a.is_even() {
            a.shr1();
            mod_half(&mut u, m);
        } else if b.is_even() {
            b.shr1();
            mod_half(&mut v, m);
        } else if ordering.is_gt() {
            a = a.sub_with_borrow(&b).0;
            a.shr1();
            if u < v {
                u = u.add_with_carry(m).0;
            }
            u = u.sub_with_borrow(&v).0;
            mod_half(&mut u, m);
        } else {
            b = b.sub_with_borrow(&a).0;
            b.shr1();
            if v < u {
                v = v.add_with_carry(m).0;
            }
            v = v.sub_with_borrow(&u).0;
            mod_half(&mut v, m);
        }
    }

    u
}
