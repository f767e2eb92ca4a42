//! 48-byte profile: `p = 2^384 − 2^128 − 2^96 + 2^32 − 1`.
//!
//! Here `2^384 ≡ ω = 2^128 + 2^96 − 2^32 + 1 (mod p)`, so the high half is
//! folded by multiplying it with `ω` and adding the result back, repeating
//! until nothing is left above bit 383.

use std::cmp::Ordering;

use crate::curves::{PrimeCurve, Profile};
use crate::point::AffinePoint;
use crate::primitives::limbs;
use crate::primitives::{Uint, Wide};

/// The 48-byte curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Secp384r1;

/// `right · ω`, as up to twelve limbs.
fn omega_mul(right: &[u64; 6]) -> [u64; 12] {
    let mut res = [0u64; 12];
    let mut tmp = [0u64; 6];

    res[..6].copy_from_slice(right);

    // right · 2^32
    let mut carry = limbs::shl_into(&mut tmp, right, 32);

    // + right · 2^96
    res[7] = carry + limbs::add_assign(&mut res[1..7], &tmp);

    // + right · 2^128
    res[8] = limbs::add_assign(&mut res[2..8], right);

    // − right · 2^32
    carry += limbs::sub_assign(&mut res[..6], &tmp);

    let diff = res[6].wrapping_sub(carry);
    if diff > res[6] {
        for limb in res[7..].iter_mut() {
            let prev = *limb;
            *limb = prev.wrapping_sub(1);
            if prev != 0 {
                break;
            }
        }
    }
    res[6] = diff;

    res
}

impl PrimeCurve<6> for Secp384r1 {
    const PROFILE: Profile = Profile::Secp384r1;

    const P: Uint<6> = Uint::from_limbs([
        0x00000000FFFFFFFF,
        0xFFFFFFFF00000000,
        0xFFFFFFFFFFFFFFFE,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
    ]);

    const B: Uint<6> = Uint::from_limbs([
        0x2A85C8EDD3EC2AEF,
        0xC656398D8A2ED19D,
        0x0314088F5013875A,
        0x181D9C6EFE814112,
        0x988E056BE3F82D19,
        0xB3312FA7E23EE7E4,
    ]);

    const G: AffinePoint<6> = AffinePoint::new(
        Uint::from_limbs([
            0x3A545E3872760AB7,
            0x5502F25DBF55296C,
            0x59F741E082542A38,
            0x6E1D3B628BA79B98,
            0x8EB1C71EF320AD74,
            0xAA87CA22BE8B0537,
        ]),
        Uint::from_limbs([
            0x7A431D7C90EA0E5F,
            0x0A60B1CE1D7E819D,
            0xE9DA3113B5F0B8C0,
            0xF8F41DBD289A147C,
            0x5D9E98BF9292DC29,
            0x3617DE4A96262C6F,
        ]),
    );

    const ORDER: Uint<6> = Uint::from_limbs([
        0xECEC196ACCC52973,
        0x581A0DB248B0A77A,
        0xC7634D81F4372DDF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
    ]);

    fn reduce(product: &Wide<6>) -> Uint<6> {
        let mut value = [0u64; 12];
        value[..6].copy_from_slice(product.lo().as_limbs());
        value[6..].copy_from_slice(product.hi().as_limbs());

        while !limbs::is_zero(&value[6..]) {
            let mut hi = [0u64; 6];
            hi.copy_from_slice(&value[6..]);
            let folded = omega_mul(&hi);

            value[6..].fill(0);
            let mut carry = 0;
            for (acc, &limb) in value[..9].iter_mut().zip(&folded[..9]) {
                let (sum, c) = limbs::adc(*acc, limb, carry);
                *acc = sum;
                carry = c;
            }
            value[9] = carry;
        }

        let mut result = [0u64; 6];
        result.copy_from_slice(&value[..6]);
        while limbs::cmp(&result, Self::P.as_limbs()) != Ordering::Less {
            limbs::sub_assign(&mut result, Self::P.as_limbs());
        }

        Uint::from_limbs(result)
    }
}
