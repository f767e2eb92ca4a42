//! 32-byte profile: `p = 2^256 − 2^224 + 2^192 + 2^96 − 1`.

use crate::curves::{PrimeCurve, Profile, settle};
use crate::point::AffinePoint;
use crate::primitives::limbs;
use crate::primitives::{Uint, Wide};

/// The 32-byte curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Secp256r1;

impl PrimeCurve<4> for Secp256r1 {
    const PROFILE: Profile = Profile::Secp256r1;

    const P: Uint<4> = Uint::from_limbs([
        0xFFFFFFFFFFFFFFFF,
        0x00000000FFFFFFFF,
        0x0000000000000000,
        0xFFFFFFFF00000001,
    ]);

    const B: Uint<4> = Uint::from_limbs([
        0x3BCE3C3E27D2604B,
        0x651D06B0CC53B0F6,
        0xB3EBBD55769886BC,
        0x5AC635D8AA3A93E7,
    ]);

    const G: AffinePoint<4> = AffinePoint::new(
        Uint::from_limbs([
            0xF4A13945D898C296,
            0x77037D812DEB33A0,
            0xF8BCE6E563A440F2,
            0x6B17D1F2E12C4247,
        ]),
        Uint::from_limbs([
            0xCBB6406837BF51F5,
            0x2BCE33576B315ECE,
            0x8EE7EB4A7C0F9E16,
            0x4FE342E2FE1A7F9B,
        ]),
    );

    const ORDER: Uint<4> = Uint::from_limbs([
        0xF3B9CAC2FC632551,
        0xBCE6FAADA7179E84,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFF00000000,
    ]);

    /// Solinas reduction over 32-bit words: `t + 2·s1 + 2·s2 + s3 + s4 − d1
    /// − d2 − d3 − d4`, with the terms packed into 64-bit limbs.
    fn reduce(product: &Wide<4>) -> Uint<4> {
        let (p4, p5, p6, p7) = (
            product.limb(4),
            product.limb(5),
            product.limb(6),
            product.limb(7),
        );

        let mut result = [
            product.limb(0),
            product.limb(1),
            product.limb(2),
            product.limb(3),
        ];
        let mut carry = 0i64;
        let mut doubled = [0u64; 4];

        let s1 = [0, p5 & 0xFFFFFFFF00000000, p6, p7];
        carry += limbs::shl_into(&mut doubled, &s1, 1) as i64;
        carry += limbs::add_assign(&mut result, &doubled) as i64;

        let s2 = [0, p6 << 32, (p6 >> 32) | (p7 << 32), p7 >> 32];
        carry += limbs::shl_into(&mut doubled, &s2, 1) as i64;
        carry += limbs::add_assign(&mut result, &doubled) as i64;

        let s3 = [p4, p5 & 0xFFFFFFFF, 0, p7];
        carry += limbs::add_assign(&mut result, &s3) as i64;

        let s4 = [
            (p4 >> 32) | (p5 << 32),
            (p5 >> 32) | (p6 & 0xFFFFFFFF00000000),
            p7,
            (p6 >> 32) | (p4 << 32),
        ];
        carry += limbs::add_assign(&mut result, &s4) as i64;

        let d1 = [
            (p5 >> 32) | (p6 << 32),
            p6 >> 32,
            0,
            (p4 & 0xFFFFFFFF) | (p5 << 32),
        ];
        carry -= limbs::sub_assign(&mut result, &d1) as i64;

        let d2 = [p6, p7, 0, (p4 >> 32) | (p5 & 0xFFFFFFFF00000000)];
        carry -= limbs::sub_assign(&mut result, &d2) as i64;

        let d3 = [
            (p6 >> 32) | (p7 << 32),
            (p7 >> 32) | (p4 << 32),
            (p4 >> 32) | (p5 << 32),
            p6 << 32,
        ];
        carry -= limbs::sub_assign(&mut result, &d3) as i64;

        let d4 = [p7, p4 & 0xFFFFFFFF00000000, p5, p6 & 0xFFFFFFFF00000000];
        carry -= limbs::sub_assign(&mut result, &d4) as i64;

        settle(&mut result, carry, &Self::P);
        Uint::from_limbs(result)
    }
}
