//! 24-byte profile: `p = 2^192 − 2^64 − 1`.

use crate::curves::{PrimeCurve, Profile, settle};
use crate::point::AffinePoint;
use crate::primitives::limbs;
use crate::primitives::{Uint, Wide};

/// The 24-byte curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Secp192r1;

impl PrimeCurve<3> for Secp192r1 {
    const PROFILE: Profile = Profile::Secp192r1;

    const P: Uint<3> =
        Uint::from_limbs([0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFE, 0xFFFFFFFFFFFFFFFF]);

    const B: Uint<3> =
        Uint::from_limbs([0xFEB8DEECC146B9B1, 0x0FA7E9AB72243049, 0x64210519E59C80E7]);

    const G: AffinePoint<3> = AffinePoint::new(
        Uint::from_limbs([0xF4FF0AFD82FF1012, 0x7CBF20EB43A18800, 0x188DA80EB03090F6]),
        Uint::from_limbs([0x73F977A11E794811, 0x631011ED6B24CDD5, 0x07192B95FFC8DA78]),
    );

    const ORDER: Uint<3> =
        Uint::from_limbs([0x146BC9B1B4D22831, 0xFFFFFFFF99DEF836, 0xFFFFFFFFFFFFFFFF]);

    /// `2^192 ≡ 2^64 + 1`, so the high limbs are added back three times at
    /// different offsets.
    fn reduce(product: &Wide<3>) -> Uint<3> {
        let (p3, p4, p5) = (product.limb(3), product.limb(4), product.limb(5));

        let mut result = [product.limb(0), product.limb(1), product.limb(2)];
        let mut carry = 0i64;

        carry += limbs::add_assign(&mut result, &[p3, p4, p5]) as i64;
        carry += limbs::add_assign(&mut result, &[0, p3, p4]) as i64;
        carry += limbs::add_assign(&mut result, &[p5, p5, 0]) as i64;

        settle(&mut result, carry, &Self::P);
        Uint::from_limbs(result)
    }
}
