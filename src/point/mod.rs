//! Curve points
//!
//! Points are kept in affine form `(x, y)` at rest and converted to
//! Jacobian coordinates only inside the arithmetic routines. The point at
//! infinity is the sentinel `x = y = 0`. It cannot collide with a real
//! point: `(0, 0)` would require `b = 0`.
//!
//! Submodules:
//! - `affine`: the point type, infinity test, curve-equation check
//! - `coz`: Jacobian doubling and co-Z addition formulas for `a = −3`
//! - `ladder`: blinded co-Z Montgomery ladder scalar multiplication
//! - `encoding`: uncompressed and compressed wire formats

mod affine;
pub(crate) mod coz;
mod encoding;
mod ladder;

pub use affine::AffinePoint;
pub use encoding::{
    decode_public_key, decode_uncompressed, decompress, encode_compressed, encode_uncompressed,
};
pub use ladder::scalar_mul;
