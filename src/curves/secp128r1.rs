//! 16-byte profile: `p = 2^128 − 2^97 − 1`.

use crate::curves::{PrimeCurve, Profile, settle};
use crate::point::AffinePoint;
use crate::primitives::limbs;
use crate::primitives::{Uint, Wide};

/// The 16-byte curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Secp128r1;

impl PrimeCurve<2> for Secp128r1 {
    const PROFILE: Profile = Profile::Secp128r1;

    const P: Uint<2> = Uint::from_limbs([0xFFFFFFFFFFFFFFFF, 0xFFFFFFFDFFFFFFFF]);

    const B: Uint<2> = Uint::from_limbs([0xD824993C2CEE5ED3, 0xE87579C11079F43D]);

    const G: AffinePoint<2> = AffinePoint::new(
        Uint::from_limbs([0x0C28607CA52C5B86, 0x161FF7528B899B2D]),
        Uint::from_limbs([0xC02DA292DDED7A83, 0xCF5AC8395BAFEB13]),
    );

    const ORDER: Uint<2> = Uint::from_limbs([0x75A30D1B9038A115, 0xFFFFFFFE00000000]);

    /// Folds the high half back using `2^128 ≡ 2^97 + 1 (mod p)`.
    ///
    /// The six terms below are the high limbs `p2, p3` multiplied out by
    /// repeated substitution until nothing lands above bit 127.
    fn reduce(product: &Wide<2>) -> Uint<2> {
        let p2 = product.limb(2);
        let p3 = product.limb(3);

        let mut result = [product.limb(0), product.limb(1)];
        let terms = [
            [p2, (p3 & 0x1FFFFFFFF) | (p2 << 33)],
            [(p2 >> 31) | (p3 << 33), (p3 >> 31) | ((p2 & 0xFFFFFFFF80000000) << 2)],
            [
                (p2 >> 62) | (p3 << 2),
                (p3 >> 62) | ((p2 & 0xC000000000000000) >> 29) | (p3 << 35),
            ],
            [p3 >> 29, (p3 & 0xFFFFFFFFE0000000) << 4],
            [p3 >> 60, p3 & 0xFFFFFFFE00000000],
            [0, (p3 & 0xF000000000000000) >> 27],
        ];

        let mut carry = 0i64;
        for term in &terms {
            carry += limbs::add_assign(&mut result, term) as i64;
        }

        settle(&mut result, carry, &Self::P);
        Uint::from_limbs(result)
    }
}
