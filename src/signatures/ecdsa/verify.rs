use crate::arithmetic::{mod_inv, mod_mul};
use crate::curves::PrimeCurve;
use crate::keys::keypair::reduce_once;
use crate::point::AffinePoint;
use crate::point::coz::{apply_z, double_affine, double_jacobian, xycz_add};
use crate::primitives::Uint;
use crate::signatures::ecdsa::hash_to_scalar;

/// Returns `G + Q` in affine form, or `None` when it is the point at
/// infinity.
///
/// Both inputs have `Z = 1`, so they are already co-Z and one co-Z
/// addition gives the sum with `Z = Qx − Gx`.
fn sum_with_base<C: PrimeCurve<N>, const N: usize>(
    public: &AffinePoint<N>,
) -> Option<AffinePoint<N>> {
    let base = C::G;

    if public.x == base.x {
        if public.y != base.y {
            return None;
        }

        return Some(double_affine::<C, N>(&base));
    }

    let (mut gx, mut gy) = (base.x, base.y);
    let (mut sx, mut sy) = (public.x, public.y);
    let z = C::field_sub(&sx, &gx);

    xycz_add::<C, N>(&mut gx, &mut gy, &mut sx, &mut sy);
    let z = C::field_invert(&z);
    apply_z::<C, N>(&mut sx, &mut sy, &z);

    Some(AffinePoint::new(sx, sy))
}

/// Table index for bit `i`: bit of `u1` in position 0, bit of `u2` in
/// position 1.
fn index<const N: usize>(u1: &Uint<N>, u2: &Uint<N>, i: u32) -> usize {
    usize::from(u1.bit(i)) | (usize::from(u2.bit(i)) << 1)
}

/// Verifies an `r || s` signature of `hash` under `public`.
///
/// ## Algorithm
///
/// With `w = s⁻¹ mod n`, `u1 = e·w` and `u2 = r·w`, the point
/// `u1·G + u2·Q` is computed with Shamir's trick: one doubling per bit of
/// the longer of `u1`, `u2`, followed by an addition of `G`, `Q` or `G + Q`
/// chosen by the two bits at that position. The accumulator stays in
/// Jacobian form and each table point is lifted to its `Z` before a co-Z
/// addition.
///
/// The signature is valid iff the affine x-coordinate of the sum, reduced
/// modulo `n`, equals `r`.
///
/// ## Returns
///
/// `false` for any malformed input (wrong lengths, `r` or `s` outside
/// `[1, n)`) as well as for a signature that does not match.
pub fn verify<C: PrimeCurve<N>, const N: usize>(
    public: &AffinePoint<N>,
    hash: &[u8],
    signature: &[u8],
) -> bool {
    let width = Uint::<N>::BYTES;
    if signature.len() != 2 * width {
        return false;
    }

    let (Some(r), Some(s)) = (
        Uint::<N>::from_be_slice(&signature[..width]),
        Uint::<N>::from_be_slice(&signature[width..]),
    ) else {
        return false;
    };
    if r.is_zero() || s.is_zero() || r >= C::ORDER || s >= C::ORDER {
        return false;
    }

    let Some(e) = hash_to_scalar(hash, &C::ORDER) else {
        return false;
    };
    if public.is_infinity() {
        return false;
    }

    let w = mod_inv(&s, &C::ORDER);
    let u1 = mod_mul(&e, &w, &C::ORDER);
    let u2 = mod_mul(&r, &w, &C::ORDER);

    let table = [None, Some(C::G), Some(*public), sum_with_base::<C, N>(public)];

    let top = u1.bits().max(u2.bits());
    if top == 0 {
        return false;
    }

    // `None` for the accumulator means the point at infinity.
    let mut acc: Option<(Uint<N>, Uint<N>)> = table[index(&u1, &u2, top - 1)].map(|p| (p.x, p.y));
    let mut z = Uint::<N>::ONE;

    for i in (0..top - 1).rev() {
        if let Some((rx, ry)) = acc.as_mut() {
            double_jacobian::<C, N>(rx, ry, &mut z);
        }

        let Some(point) = table[index(&u1, &u2, i)] else {
            continue;
        };

        let Some((rx, ry)) = acc.as_mut() else {
            acc = Some((point.x, point.y));
            z = Uint::ONE;
            continue;
        };

        let (mut tx, mut ty) = (point.x, point.y);
        apply_z::<C, N>(&mut tx, &mut ty, &z);

        if tx == *rx {
            if ty == *ry {
                double_jacobian::<C, N>(rx, ry, &mut z);
            } else {
                acc = None;
            }
            continue;
        }

        let tz = C::field_sub(rx, &tx);
        xycz_add::<C, N>(&mut tx, &mut ty, rx, ry);
        z = C::field_mul(&z, &tz);
    }

    let Some((mut x, mut y)) = acc else {
        return false;
    };

    let z = C::field_invert(&z);
    apply_z::<C, N>(&mut x, &mut y, &z);

    reduce_once(&x, &C::ORDER) == r
}
