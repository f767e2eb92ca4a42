//! ECDSA over the prime-field curves.
//!
//! Signatures are the raw concatenation `r || s`, each a fixed-width
//! big-endian integer of the curve's field width. The message hash is
//! supplied by the caller and must be exactly one field width long; a
//! hash value at or above `n` is reduced by a single subtraction.

mod sign;
mod verify;

pub use sign::sign;
pub use verify::verify;

use crate::keys::keypair::reduce_once;
use crate::primitives::Uint;

/// Reads a hash of exactly `8·N` bytes as an integer below `order`.
pub(crate) fn hash_to_scalar<const N: usize>(hash: &[u8], order: &Uint<N>) -> Option<Uint<N>> {
    Uint::from_be_slice(hash).map(|value| reduce_once(&value, order))
}
