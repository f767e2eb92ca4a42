//! Key material and key agreement.
//!
//! - `keypair`: a private scalar with its public point, generated from an
//!   entropy source or imported
//! - `ecdh`: blinded Diffie-Hellman over an uncompressed peer key
//! - `context`: [`EccContext`], the profile-selected entry point that owns
//!   one keypair and an entropy source and exposes every operation on
//!   byte buffers
//!
//! The generic functions here work for a curve chosen at compile time.
//! [`EccContext`] chooses the curve at run time from a field width.

mod context;
pub mod ecdh;
pub(crate) mod keypair;

pub use context::EccContext;
pub use keypair::Keypair;
