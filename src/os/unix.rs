//! Operating system entropy (other Unix systems)

use std::fs::File;
use std::io::{self, Read};

pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    File::open("/dev/urandom")?.read_exact(buf)
}
