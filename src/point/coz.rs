//! Jacobian and co-Z point formulas for curves with `a = −3`.
//!
//! A point `(X, Y, Z)` in Jacobian coordinates stands for the affine point
//! `(X / Z², Y / Z³)`. Two points are *co-Z* when they share the same `Z`;
//! the co-Z formulas below never touch `Z` directly but return the factor
//! by which the shared `Z` was multiplied, as an updated copy of one input.
//!
//! All routines work in place on coordinate references and are generic over
//! the curve, which supplies the field operations.

use zeroize::Zeroize;

use crate::arithmetic::mod_half;
use crate::curves::PrimeCurve;
use crate::point::AffinePoint;
use crate::primitives::Uint;

/// Doubles `(x, y, z)` in place.
///
/// Uses the `a = −3` shortcut `3·(X − Z²)·(X + Z²)` for the slope
/// numerator. A point with `Z = 0` is the point at infinity and is left
/// untouched.
pub(crate) fn double_jacobian<C: PrimeCurve<N>, const N: usize>(
    x: &mut Uint<N>,
    y: &mut Uint<N>,
    z: &mut Uint<N>,
) {
    if z.is_zero() {
        return;
    }

    let y2 = C::field_square(y);
    let mut s = C::field_mul(x, &y2); // X·Y²
    let y4 = C::field_square(&y2);
    let z3 = C::field_mul(y, z); // new Z = Y·Z
    let zz = C::field_square(z);

    // m = 3·(X + Z²)·(X − Z²) / 2
    let sum = C::field_add(x, &zz);
    let diff = C::field_sub(x, &zz);
    let mut m = C::field_mul(&sum, &diff);
    let twice = C::field_add(&m, &m);
    m = C::field_add(&m, &twice);
    mod_half(&mut m, &C::P);

    // X' = m² − 2·X·Y²
    let mut x3 = C::field_square(&m);
    x3 = C::field_sub(&x3, &s);
    x3 = C::field_sub(&x3, &s);

    // Y' = m·(X·Y² − X') − Y⁴
    s = C::field_sub(&s, &x3);
    let mut y3 = C::field_mul(&m, &s);
    y3 = C::field_sub(&y3, &y4);

    *x = x3;
    *y = y3;
    *z = z3;
}

/// Doubles an affine point, returning `2·P` in affine form.
///
/// A point with `y = 0` doubles to the infinity sentinel.
pub(crate) fn double_affine<C: PrimeCurve<N>, const N: usize>(
    point: &AffinePoint<N>,
) -> AffinePoint<N> {
    let (mut x, mut y, mut z) = (point.x, point.y, Uint::ONE);
    double_jacobian::<C, N>(&mut x, &mut y, &mut z);

    let z = C::field_invert(&z);
    apply_z::<C, N>(&mut x, &mut y, &z);

    AffinePoint::new(x, y)
}

/// Rescales `(x, y)` to the Jacobian representative with the given `z`:
/// `(x·z², y·z³)`.
pub(crate) fn apply_z<C: PrimeCurve<N>, const N: usize>(
    x: &mut Uint<N>,
    y: &mut Uint<N>,
    z: &Uint<N>,
) {
    let z2 = C::field_square(z);
    *x = C::field_mul(x, &z2);
    let z3 = C::field_mul(&z2, z);
    *y = C::field_mul(y, &z3);
}

/// Doubles `Q` and rewrites a copy of it to share the doubled point's `Z`.
///
/// `Q` starts as the affine point `(x1, y1)`; it is lifted to Jacobian form
/// with `initial_z` (or 1) before doubling, which is how the caller injects
/// a random projective representative. On return `(x1, y1) = 2·Q` and
/// `(x2, y2) = Q`, co-Z.
pub(crate) fn initial_double<C: PrimeCurve<N>, const N: usize>(
    x1: &mut Uint<N>,
    y1: &mut Uint<N>,
    x2: &mut Uint<N>,
    y2: &mut Uint<N>,
    initial_z: Option<&Uint<N>>,
) {
    *x2 = *x1;
    *y2 = *y1;

    let mut z = match initial_z {
        Some(z) if !z.is_zero() => *z,
        _ => Uint::ONE,
    };

    apply_z::<C, N>(x1, y1, &z);
    double_jacobian::<C, N>(x1, y1, &mut z);
    apply_z::<C, N>(x2, y2, &z);
    z.zeroize();
}

/// Co-Z addition.
///
/// Input: `P = (x1, y1)` and `Q = (x2, y2)` sharing the same `Z`.
/// Output: `(x2, y2) = P + Q`, and `(x1, y1)` rewritten as `P` with the
/// sum's `Z`. The new `Z` is the old one times `x2 − x1`.
pub(crate) fn xycz_add<C: PrimeCurve<N>, const N: usize>(
    x1: &mut Uint<N>,
    y1: &mut Uint<N>,
    x2: &mut Uint<N>,
    y2: &mut Uint<N>,
) {
    let mut t = C::field_sub(x2, x1);
    t = C::field_square(&t); // A = (x2 − x1)²
    *x1 = C::field_mul(x1, &t); // B = x1·A
    *x2 = C::field_mul(x2, &t); // C = x2·A
    *y2 = C::field_sub(y2, y1);
    t = C::field_square(y2); // D = (y2 − y1)²

    t = C::field_sub(&t, x1);
    t = C::field_sub(&t, x2); // x3 = D − B − C
    *x2 = C::field_sub(x2, x1);
    *y1 = C::field_mul(y1, x2); // E = y1·(C − B)
    *x2 = C::field_sub(x1, &t);
    *y2 = C::field_mul(y2, x2);
    *y2 = C::field_sub(y2, y1); // y3 = (y2 − y1)·(B − x3) − E

    *x2 = t;
}

/// Co-Z conjugate addition.
///
/// Input: `P = (x1, y1)` and `Q = (x2, y2)` sharing the same `Z`.
/// Output: `(x2, y2) = P + Q` and `(x1, y1) = P − Q`, again co-Z.
pub(crate) fn xycz_addc<C: PrimeCurve<N>, const N: usize>(
    x1: &mut Uint<N>,
    y1: &mut Uint<N>,
    x2: &mut Uint<N>,
    y2: &mut Uint<N>,
) {
    let mut t5 = C::field_sub(x2, x1);
    t5 = C::field_square(&t5); // A = (x2 − x1)²
    *x1 = C::field_mul(x1, &t5); // B = x1·A
    *x2 = C::field_mul(x2, &t5); // C = x2·A
    t5 = C::field_add(y2, y1); // y2 + y1
    *y2 = C::field_sub(y2, y1); // y2 − y1

    let mut t6 = C::field_sub(x2, x1);
    *y1 = C::field_mul(y1, &t6); // E = y1·(C − B)
    t6 = C::field_add(x1, x2); // B + C
    *x2 = C::field_square(y2);
    *x2 = C::field_sub(x2, &t6); // x3 = (y2 − y1)² − (B + C)

    let mut t7 = C::field_sub(x1, x2);
    *y2 = C::field_mul(y2, &t7);
    *y2 = C::field_sub(y2, y1); // y3 = (y2 − y1)·(B − x3) − E

    t7 = C::field_square(&t5);
    t7 = C::field_sub(&t7, &t6); // x3' = (y2 + y1)² − (B + C)
    t6 = C::field_sub(&t7, x1);
    t6 = C::field_mul(&t6, &t5);
    *y1 = C::field_sub(&t6, y1); // y3' = (y2 + y1)·(x3' − B) − E

    *x1 = t7;
}
