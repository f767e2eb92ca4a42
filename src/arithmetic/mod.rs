//! Modular arithmetic
//!
//! Generic routines over an arbitrary odd modulus:
//! - addition and subtraction with a single conditional correction
//! - multiplication by full product followed by shift-and-subtract
//!   reduction (used for scalars modulo the group order)
//! - binary extended-Euclidean inversion
//!
//! Field arithmetic modulo the curve prime uses the same addition,
//! subtraction and inversion, but multiplies through the curve-specific
//! fast reductions defined in [`crate::curves`].

mod modular;

pub(crate) use modular::mod_half;
pub use modular::{mod_add, mod_inv, mod_mul, mod_sub};
