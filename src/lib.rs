//! Prime-field elliptic-curve cryptography
//!
//! This crate implements key generation, Diffie-Hellman key agreement and
//! ECDSA over four short-Weierstrass curves `y² = x³ − 3x + b`, selected by
//! field width (16, 24, 32 or 48 bytes).
//!
//! The focus is on **clarity, predictability, and auditability**: fixed
//! width integer arithmetic with explicit carries, one hand-derived
//! reduction per prime, and co-Z point formulas driving a Montgomery ladder
//! whose control flow does not depend on the scalar.
//!
//! # Module overview
//!
//! - `primitives`  
//!   Fixed-width integers `Uint<N>` of `N` 64-bit limbs and their
//!   double-width products `Wide<N>`.
//!
//! - `arithmetic`  
//!   Modular addition, subtraction, multiplication and inversion over an
//!   arbitrary odd modulus.
//!
//! - `curves`  
//!   The [`Profile`] enum and one [`PrimeCurve`](curves::PrimeCurve)
//!   implementation per profile, carrying the curve parameters and the
//!   fast reduction modulo its prime.
//!
//! - `point`  
//!   Affine points, Jacobian and co-Z formulas, the scalar-multiplication
//!   ladder and the point wire formats.
//!
//! - `keys`  
//!   Keypairs, ECDH, and [`EccContext`], the run-time entry point working
//!   on byte buffers.
//!
//! - `signatures`  
//!   ECDSA signing and verification.
//!
//! - `rng`  
//!   Entropy sources: the operating system generator and a ChaCha20 DRBG.
//!   Any `rand_core` `RngCore + CryptoRng` can drive a context.
//!
//! # Design goals
//!
//! - No global state: every parameter and key lives in an owned value
//! - Bounded work: every randomized loop has a configurable retry bound
//! - Explicit failures: one error enum, no panics on caller input
//! - Secret scalars are wiped when no longer needed
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries.

pub mod arithmetic;
pub mod config;
pub mod curves;
pub mod error;
pub mod keys;
pub mod point;
pub mod primitives;
pub mod rng;
pub mod signatures;

mod os;

pub use config::EccConfig;
pub use curves::Profile;
pub use error::EccError;
pub use keys::EccContext;
