//! Operating system abstraction layer
//!
//! Platform-specific implementations are selected at compile time. Each
//! submodule exposes the same function:
//!
//! `sys_random(buf: &mut [u8]) -> std::io::Result<()>`
//!
//! which fills `buf` entirely with cryptographically secure bytes or
//! reports why it could not.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(all(unix, not(any(target_os = "linux", target_os = "macos"))))]
pub(crate) mod unix;

#[cfg(all(unix, not(any(target_os = "linux", target_os = "macos"))))]
pub(crate) use unix::*;
