//! Primitive types
//!
//! This module defines the fixed-width integer types the curve arithmetic
//! is built on.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks with
//! well-defined semantics and predictable behavior. They are intentionally
//! minimal: only the operations required by modular and elliptic-curve
//! arithmetic are provided, and no attempt is made to replicate a
//! general-purpose big-integer library.
//!
//! Current primitives include:
//! - `Uint<N>`: an unsigned integer of `N` 64-bit limbs (a "digit vector")
//! - `Wide<N>`: the double-width result of multiplying two `Uint<N>`
//!
//! Limbs are stored **least-significant first**. Byte conversions use
//! big-endian order, which is the wire format of every encoding produced
//! by this crate.

pub(crate) mod limbs;
mod uint;
mod wide;

/// Fixed-width unsigned integer primitives.
///
/// These types are re-exported as the integers used across the crate for
/// field elements, scalars and double-width products.
pub use uint::Uint;
pub use wide::Wide;
