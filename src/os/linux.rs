//! Operating system entropy (Linux)
//!
//! Reads from the kernel pool through the `getrandom` system call, which
//! blocks only until the pool has been initialized once after boot.

use std::io;

use libc::{c_void, getrandom};

/// Fills `buf` from `getrandom`.
///
/// Partial reads are continued and `EINTR` is retried. Any other error is
/// returned to the caller.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let rest = &mut buf[filled..];
        let ret = unsafe { getrandom(rest.as_mut_ptr() as *mut c_void, rest.len(), 0) };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
