//! Digital signature schemes.
//!
//! Only ECDSA is provided. It works on any [`PrimeCurve`](crate::curves::PrimeCurve)
//! and signs caller-supplied message hashes; hashing the message is the
//! caller's job.

pub mod ecdsa;
