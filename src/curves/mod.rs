//! Curve profiles
//!
//! Four short-Weierstrass curves `y² = x³ − 3x + b` over prime fields,
//! distinguished by field width:
//!
//! | Profile      | Width | Limbs |
//! |--------------|-------|-------|
//! | `Secp128r1`  | 16    | 2     |
//! | `Secp192r1`  | 24    | 3     |
//! | `Secp256r1`  | 32    | 4     |
//! | `Secp384r1`  | 48    | 6     |
//!
//! Each profile is a zero-sized type implementing [`PrimeCurve`], carrying
//! its immutable parameter tuple `(p, b, G, n)` and its own fast reduction
//! modulo `p`. There is no generic reduction fallback: every modulus has a
//! hand-derived formula exploiting its bit pattern.
//!
//! Every supported prime satisfies `p ≡ 3 (mod 4)`, which is what makes
//! [`PrimeCurve::field_sqrt`] a single exponentiation.
//!
//! The 16-byte parameter table is authoritative as given; it is not the
//! SEC 2 `secp128r1` curve and must not be "corrected" against external
//! databases.

mod secp128r1;
mod secp192r1;
mod secp256r1;
mod secp384r1;

use std::fmt::{Display, Formatter};

use crate::arithmetic::{mod_add, mod_inv, mod_sub};
use crate::error::EccError;
use crate::point::AffinePoint;
use crate::primitives::limbs;
use crate::primitives::{Uint, Wide};

pub use secp128r1::Secp128r1;
pub use secp192r1::Secp192r1;
pub use secp256r1::Secp256r1;
pub use secp384r1::Secp384r1;

/// Field-width profile selecting a curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Profile {
    /// 16-byte field, 2 limbs.
    Secp128r1,
    /// 24-byte field, 3 limbs.
    Secp192r1,
    /// 32-byte field, 4 limbs.
    Secp256r1,
    /// 48-byte field, 6 limbs.
    Secp384r1,
}

impl Profile {
    /// Every supported profile, narrowest first.
    pub const ALL: [Profile; 4] = [
        Profile::Secp128r1,
        Profile::Secp192r1,
        Profile::Secp256r1,
        Profile::Secp384r1,
    ];

    /// Selects the profile for a field width in bytes.
    pub fn from_width(width: usize) -> Result<Self, EccError> {
        match width {
            16 => Ok(Profile::Secp128r1),
            24 => Ok(Profile::Secp192r1),
            32 => Ok(Profile::Secp256r1),
            48 => Ok(Profile::Secp384r1),
            _ => Err(EccError::UnsupportedProfile { width }),
        }
    }

    /// Field width in bytes.
    pub const fn width(self) -> usize {
        match self {
            Profile::Secp128r1 => 16,
            Profile::Secp192r1 => 24,
            Profile::Secp256r1 => 32,
            Profile::Secp384r1 => 48,
        }
    }

    /// Number of 64-bit limbs per field element.
    pub const fn digits(self) -> usize {
        self.width() / 8
    }

    /// Length of an uncompressed point: tag, x, y.
    pub const fn uncompressed_len(self) -> usize {
        1 + 2 * self.width()
    }

    /// Length of a compressed point: tag, x.
    pub const fn compressed_len(self) -> usize {
        1 + self.width()
    }

    /// Length of a raw `r || s` signature.
    pub const fn signature_len(self) -> usize {
        2 * self.width()
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Profile::Secp128r1 => "secp128r1",
            Profile::Secp192r1 => "secp192r1",
            Profile::Secp256r1 => "secp256r1",
            Profile::Secp384r1 => "secp384r1",
        };

        f.write_str(name)
    }
}

/// A prime-field curve `y² = x³ − 3x + b` with `N`-limb elements.
///
/// The coefficient `a = −3` is not a parameter: it is built into the
/// doubling formula and the curve equation.
pub trait PrimeCurve<const N: usize> {
    /// The profile this curve implements.
    const PROFILE: Profile;

    /// Field prime `p`.
    const P: Uint<N>;

    /// Curve coefficient `b`.
    const B: Uint<N>;

    /// Base point `G`.
    const G: AffinePoint<N>;

    /// Group order `n`.
    const ORDER: Uint<N>;

    /// Reduces a double-width product modulo `p` into `[0, p)`.
    fn reduce(product: &Wide<N>) -> Uint<N>;

    /// `(a · b) mod p`.
    fn field_mul(a: &Uint<N>, b: &Uint<N>) -> Uint<N> {
        Self::reduce(&a.mul_wide(b))
    }

    /// `a² mod p`.
    fn field_square(a: &Uint<N>) -> Uint<N> {
        Self::reduce(&a.square_wide())
    }

    /// `(a + b) mod p`.
    fn field_add(a: &Uint<N>, b: &Uint<N>) -> Uint<N> {
        mod_add(a, b, &Self::P)
    }

    /// `(a − b) mod p`.
    fn field_sub(a: &Uint<N>, b: &Uint<N>) -> Uint<N> {
        mod_sub(a, b, &Self::P)
    }

    /// `a⁻¹ mod p`, with zero mapping to zero.
    fn field_invert(a: &Uint<N>) -> Uint<N> {
        mod_inv(a, &Self::P)
    }

    /// A square root of `a` modulo `p`, computed as `a^((p + 1) / 4)`.
    ///
    /// The exponent is `p + 1` shifted right by two, so square-and-multiply
    /// walks the bits of `p + 1` from the top down and stops before the
    /// lowest two. When `a` is not a quadratic residue the result is not a
    /// root; callers that care check by squaring.
    fn field_sqrt(a: &Uint<N>) -> Uint<N> {
        let (p1, _) = Self::P.add_with_carry(&Uint::ONE);
        let mut result = Uint::<N>::ONE;

        for i in (2..p1.bits()).rev() {
            result = Self::field_square(&result);
            if p1.bit(i) {
                result = Self::field_mul(&result, a);
            }
        }

        result
    }

    /// Right-hand side of the curve equation, `x³ − 3x + b`.
    fn curve_rhs(x: &Uint<N>) -> Uint<N> {
        let three = Uint::from_u64(3);
        let y2 = Self::field_square(x);
        let y2 = Self::field_sub(&y2, &three);
        let y2 = Self::field_mul(&y2, x);

        Self::field_add(&y2, &Self::B)
    }
}

/// Brings a partially reduced value back into `[0, p)`.
///
/// `carry` is the signed count of `2^(64·N)` overflows accumulated by a
/// sum/difference reduction formula. A negative count is repaid by adding
/// `p`; otherwise `p` is subtracted until no overflow remains and the value
/// is below `p`.
pub(crate) fn settle<const N: usize>(result: &mut [u64; N], mut carry: i64, p: &Uint<N>) {
    if carry < 0 {
        while carry < 0 {
            carry += limbs::add_assign(result, &p.0) as i64;
        }
    } else {
        while carry != 0 || limbs::cmp(&p.0, result).is_le() {
            carry -= limbs::sub_assign(result, &p.0) as i64;
        }
    }
}
