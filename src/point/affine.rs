use crate::curves::PrimeCurve;
use crate::primitives::Uint;

/// A point in affine coordinates.
///
/// `(0, 0)` stands for the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint<const N: usize> {
    pub x: Uint<N>,
    pub y: Uint<N>,
}

impl<const N: usize> AffinePoint<N> {
    /// The point at infinity.
    pub const INFINITY: Self = Self::new(Uint::ZERO, Uint::ZERO);

    pub const fn new(x: Uint<N>, y: Uint<N>) -> Self {
        Self { x, y }
    }

    /// Returns `true` for the infinity sentinel.
    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Checks that both coordinates are reduced and that
    /// `y² = x³ − 3x + b` holds.
    ///
    /// The infinity sentinel is not on the curve.
    pub fn is_on_curve<C: PrimeCurve<N>>(&self) -> bool {
        if self.x >= C::P || self.y >= C::P || self.is_infinity() {
            return false;
        }

        C::field_square(&self.y) == C::curve_rhs(&self.x)
    }

    /// Returns `−P = (x, p − y)`; infinity stays infinity.
    pub fn negate<C: PrimeCurve<N>>(&self) -> Self {
        if self.is_infinity() {
            return *self;
        }

        Self::new(self.x, C::field_sub(&Uint::ZERO, &self.y))
    }
}
