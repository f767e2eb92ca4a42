//! Point wire formats
//!
//! - uncompressed: `0x04 || x || y`, `1 + 2w` bytes
//! - compressed:   `(0x02 | (y & 1)) || x`, `1 + w` bytes
//!
//! `w` is the field width in bytes and both coordinates are fixed-width
//! big-endian. Every decoder validates the point against the curve: a
//! coordinate at or above `p`, or a point off the curve, is rejected with
//! [`EccError::InvalidEncoding`].

use crate::curves::PrimeCurve;
use crate::error::EccError;
use crate::point::AffinePoint;
use crate::primitives::Uint;

const TAG_UNCOMPRESSED: u8 = 0x04;
const TAG_COMPRESSED_EVEN: u8 = 0x02;
const TAG_COMPRESSED_ODD: u8 = 0x03;

fn check_len(out: &[u8], needed: usize) -> Result<(), EccError> {
    if out.len() < needed {
        return Err(EccError::BufferTooSmall {
            needed,
            actual: out.len(),
        });
    }

    Ok(())
}

/// Writes `0x04 || x || y` into `out`, returning the number of bytes
/// written.
pub fn encode_uncompressed<const N: usize>(
    point: &AffinePoint<N>,
    out: &mut [u8],
) -> Result<usize, EccError> {
    let width = Uint::<N>::BYTES;
    let needed = 1 + 2 * width;
    check_len(out, needed)?;

    out[0] = TAG_UNCOMPRESSED;
    point.x.write_be(&mut out[1..1 + width])?;
    point.y.write_be(&mut out[1 + width..needed])?;

    Ok(needed)
}

/// Writes `(0x02 | parity(y)) || x` into `out`, returning the number of
/// bytes written.
pub fn encode_compressed<const N: usize>(
    point: &AffinePoint<N>,
    out: &mut [u8],
) -> Result<usize, EccError> {
    let width = Uint::<N>::BYTES;
    let needed = 1 + width;
    check_len(out, needed)?;

    out[0] = TAG_COMPRESSED_EVEN | (point.y.as_limbs()[0] & 1) as u8;
    point.x.write_be(&mut out[1..needed])?;

    Ok(needed)
}

/// Decodes and validates an uncompressed point.
pub fn decode_uncompressed<C: PrimeCurve<N>, const N: usize>(
    bytes: &[u8],
) -> Result<AffinePoint<N>, EccError> {
    let width = Uint::<N>::BYTES;
    if bytes.len() != 1 + 2 * width || bytes[0] != TAG_UNCOMPRESSED {
        return Err(EccError::InvalidEncoding);
    }

    let x = Uint::from_be_slice(&bytes[1..1 + width]).ok_or(EccError::InvalidEncoding)?;
    let y = Uint::from_be_slice(&bytes[1 + width..]).ok_or(EccError::InvalidEncoding)?;
    let point = AffinePoint::new(x, y);

    if !point.is_on_curve::<C>() {
        return Err(EccError::InvalidEncoding);
    }

    Ok(point)
}

/// Recovers a point from its compressed encoding.
///
/// `y` is the square root of `x³ − 3x + b` whose low bit matches the low
/// bit of the tag; the other root `p − y` is taken on mismatch. Fails when
/// `x ≥ p` or when `x³ − 3x + b` is not a square.
pub fn decompress<C: PrimeCurve<N>, const N: usize>(
    bytes: &[u8],
) -> Result<AffinePoint<N>, EccError> {
    let width = Uint::<N>::BYTES;
    if bytes.len() != 1 + width {
        return Err(EccError::InvalidEncoding);
    }

    let tag = bytes[0];
    if tag != TAG_COMPRESSED_EVEN && tag != TAG_COMPRESSED_ODD {
        return Err(EccError::InvalidEncoding);
    }

    let x = Uint::from_be_slice(&bytes[1..]).ok_or(EccError::InvalidEncoding)?;
    if x >= C::P {
        return Err(EccError::InvalidEncoding);
    }

    let rhs = C::curve_rhs(&x);
    let mut y = C::field_sqrt(&rhs);
    if C::field_square(&y) != rhs {
        return Err(EccError::InvalidEncoding);
    }

    if (y.as_limbs()[0] & 1) != u64::from(tag & 1) {
        // y = 0 has no odd counterpart
        if y.is_zero() {
            return Err(EccError::InvalidEncoding);
        }
        y = C::field_sub(&C::P, &y);
    }

    let point = AffinePoint::new(x, y);
    if point.is_infinity() {
        return Err(EccError::InvalidEncoding);
    }

    Ok(point)
}

/// Decodes a public key in either format, dispatching on the tag byte.
pub fn decode_public_key<C: PrimeCurve<N>, const N: usize>(
    bytes: &[u8],
) -> Result<AffinePoint<N>, EccError> {
    match bytes.first() {
        Some(&TAG_UNCOMPRESSED) => decode_uncompressed::<C, N>(bytes),
        Some(&TAG_COMPRESSED_EVEN) | Some(&TAG_COMPRESSED_ODD) => decompress::<C, N>(bytes),
        _ => Err(EccError::InvalidEncoding),
    }
}
