//! Multi-limb unsigned integer primitive
//!
//! This module defines `Uint<N>`, a fixed-width unsigned integer made of
//! `N` 64-bit limbs stored least-significant first.
//!
//! `Uint<N>` is designed as a low-level, dependency-free primitive rather
//! than a full big-integer abstraction. The limb count is fixed by the
//! curve profile in use (2, 3, 4 or 6), so operands of different widths
//! can never be mixed: the compiler rejects it.
//!
//! The module is split in three parts:
//! - `core`: the type itself, constants, bit queries and ordering
//! - `ops`: carry/borrow arithmetic, shifts, multiplication and squaring
//! - `conv`: big-endian byte conversions and formatting

mod conv;
mod core;
mod ops;

/// Fixed-width unsigned integer of `N` 64-bit limbs.
pub use self::core::Uint;
