//! Co-Z Montgomery ladder.

use zeroize::Zeroize;

use crate::arithmetic::{mod_inv, mod_mul};
use crate::curves::PrimeCurve;
use crate::point::AffinePoint;
use crate::point::coz::{apply_z, double_affine, initial_double, xycz_add, xycz_addc};
use crate::primitives::Uint;

/// Borrows both ladder slots mutably, `slots[first]` first.
fn slots<T>(pair: &mut [T; 2], first: usize) -> (&mut T, &mut T) {
    let (lo, hi) = pair.split_at_mut(1);
    if first == 0 {
        (&mut lo[0], &mut hi[0])
    } else {
        (&mut hi[0], &mut lo[0])
    }
}

/// One ladder step: conjugate addition into the slot selected by `nb`'s
/// complement, then addition into the slot selected by `nb`.
fn step<C: PrimeCurve<N>, const N: usize>(
    rx: &mut [Uint<N>; 2],
    ry: &mut [Uint<N>; 2],
    nb: usize,
) {
    {
        let (x1, x2) = slots(rx, 1 - nb);
        let (y1, y2) = slots(ry, 1 - nb);
        xycz_addc::<C, N>(x1, y1, x2, y2);
    }

    let (x1, x2) = slots(rx, nb);
    let (y1, y2) = slots(ry, nb);
    xycz_add::<C, N>(x1, y1, x2, y2);
}

/// Computes `scalar · point`.
///
/// ## Inputs
///
/// - `point`: an affine point on curve `C`, or the infinity sentinel.
/// - `scalar`: the multiplier, expected in `[0, n]`.
/// - `initial_z`: optional projective blinding. When present and non-zero
///   the ladder starts from the Jacobian representative with this `Z`
///   instead of `Z = 1`; the result is the same, the intermediate values
///   are not.
///
/// ## Algorithm
///
/// The ladder keeps `R0` and `R1 = R0 + P` co-Z. It starts at `R0 = P`,
/// `R1 = 2P`, and for every scalar bit below the top one performs exactly
/// one conjugate addition and one addition, the bit only choosing which
/// slot each result lands in. The last bit is split so the common `Z` can
/// be recovered from `R0`, `R1` and `P` with a single inversion before the
/// final addition.
///
/// ## Degenerate inputs
///
/// `k = 0`, `k = n` and `P = ∞` give `∞`. `k = 1` and `k = n − 1` are
/// answered directly because the co-Z formulas break down when the two
/// ladder points coincide or cancel.
///
/// The final `Z` recovery divides by `x(P)`, so a point with `x = 0` is
/// replaced by `2P` and the scalar by `k / 2 mod n`. Only `±P` have
/// `x = 0`, so `2P` never does.
pub fn scalar_mul<C: PrimeCurve<N>, const N: usize>(
    point: &AffinePoint<N>,
    scalar: &Uint<N>,
    initial_z: Option<&Uint<N>>,
) -> AffinePoint<N> {
    if scalar.is_zero() || *scalar == C::ORDER || point.is_infinity() {
        return AffinePoint::INFINITY;
    }
    if *scalar == Uint::ONE {
        return *point;
    }
    if *scalar == C::ORDER.sub_with_borrow(&Uint::ONE).0 {
        return point.negate::<C>();
    }
    if point.x.is_zero() {
        let doubled = double_affine::<C, N>(point);
        let inv_two = mod_inv(&Uint::from_u64(2), &C::ORDER);
        let mut halved = mod_mul(scalar, &inv_two, &C::ORDER);

        let result = scalar_mul::<C, N>(&doubled, &halved, initial_z);
        halved.zeroize();

        return result;
    }

    let mut rx = [point.x; 2];
    let mut ry = [point.y; 2];

    {
        let (x0, x1) = slots(&mut rx, 0);
        let (y0, y1) = slots(&mut ry, 0);
        initial_double::<C, N>(x1, y1, x0, y0, initial_z);
    }

    for i in (1..scalar.bits() - 1).rev() {
        let nb = usize::from(!scalar.bit(i));
        step::<C, N>(&mut rx, &mut ry, nb);
    }

    let nb = usize::from(!scalar.bit(0));
    {
        let (x1, x2) = slots(&mut rx, 1 - nb);
        let (y1, y2) = slots(&mut ry, 1 - nb);
        xycz_addc::<C, N>(x1, y1, x2, y2);
    }

    // Final Z = (X1 − X0)·Y[1−b]·xP / (yP·X[1−b]), inverted here.
    let mut z = C::field_sub(&rx[1], &rx[0]);
    z = C::field_mul(&z, &ry[1 - nb]);
    z = C::field_mul(&z, &point.x);
    z = C::field_invert(&z);
    z = C::field_mul(&z, &point.y);
    z = C::field_mul(&z, &rx[1 - nb]);

    {
        let (x1, x2) = slots(&mut rx, nb);
        let (y1, y2) = slots(&mut ry, nb);
        xycz_add::<C, N>(x1, y1, x2, y2);
    }

    let (mut x, mut y) = (rx[0], ry[0]);
    apply_z::<C, N>(&mut x, &mut y, &z);

    rx.zeroize();
    ry.zeroize();
    z.zeroize();

    AffinePoint::new(x, y)
}
