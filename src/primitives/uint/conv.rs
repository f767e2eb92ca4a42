//! Conversions between `Uint<N>` and byte representations
//!
//! The wire format of every integer produced by this crate is fixed-width
//! big-endian: exactly `8·N` bytes, most significant byte first. These two
//! conversions (one per direction) are pure and total for well-formed
//! input.

use std::fmt::{self, Display, Formatter};

use crate::error::EccError;
use crate::primitives::Uint;

impl<const N: usize> Uint<N> {
    /// Decodes a fixed-width big-endian byte string.
    ///
    /// Returns `None` unless `bytes` is exactly `8·N` bytes long.
    pub fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::BYTES {
            return None;
        }

        let mut out = Self::ZERO;
        for (limb, chunk) in out.0.iter_mut().zip(bytes.rchunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }

        Some(out)
    }

    /// Writes the fixed-width big-endian encoding into the first `8·N`
    /// bytes of `out`, returning the number of bytes written.
    ///
    /// # Errors
    /// [`EccError::BufferTooSmall`] if `out` is shorter than `8·N` bytes.
    pub fn write_be(&self, out: &mut [u8]) -> Result<usize, EccError> {
        if out.len() < Self::BYTES {
            return Err(EccError::BufferTooSmall {
                needed: Self::BYTES,
                actual: out.len(),
            });
        }

        self.put_be(&mut out[..Self::BYTES]);
        Ok(Self::BYTES)
    }

    /// `out` is exactly `8·N` bytes long.
    fn put_be(&self, out: &mut [u8]) {
        for (chunk, limb) in out.rchunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
    }

    /// Returns the fixed-width big-endian encoding as an owned buffer.
    pub fn to_be_vec(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::BYTES];
        self.put_be(&mut out);

        out
    }
}

/// Converts a `u64` into a `Uint<N>`.
///
/// The value is placed in the least significant limb, with all higher
/// limbs set to zero.
impl<const N: usize> From<u64> for Uint<N> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const N: usize> Display for Uint<N> {
    /// Formats the value as a colon-separated hexadecimal string in
    /// big-endian byte order.
    ///
    /// Example:
    /// `00:1F:A4:...`
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.to_be_vec().iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}
