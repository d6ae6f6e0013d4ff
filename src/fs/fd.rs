use std::ffi::CStr;
use std::fmt::{self, Debug, Formatter};
use std::mem::MaybeUninit;

use libc::{c_int, mode_t};
use log::error;

use crate::fs::error::{MetadataError, OpenError, ReadError, ShortTransferError, WriteError};
use crate::fs::syscall::err_no;
use crate::fs::Metadata;

/// An owned file descriptor, closed on drop.
pub(crate) struct Fd(c_int);

impl Fd {
    pub fn open(path: &CStr, flags: c_int, mode: mode_t) -> Result<Fd, OpenError> {
        // SAFETY: path is a valid nul-terminated string for the duration of the call.
        match unsafe { libc::open(path.as_ptr(), flags | libc::O_CLOEXEC, mode) } {
            -1 => Err(OpenError::from_errno(err_no())),
            fd => Ok(Fd(fd)),
        }
    }

    /// Reads up to `buf.len()` bytes, returning the number read. 0 indicates the end of the file.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, ReadError> {
        // SAFETY: buf is valid for writes of buf.len() bytes.
        match unsafe { libc::read(self.0, buf.as_mut_ptr().cast(), buf.len()) } {
            -1 => Err(ReadError::from_errno(err_no())),
            count => Ok(count.unsigned_abs()),
        }
    }

    /// Fills `buf` entirely, failing if the end of the file comes first.
    pub fn read_exact(&self, buf: &mut [u8]) -> Result<(), ReadError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read(&mut buf[filled..])? {
                0 => Err(ShortTransferError {
                    expected: buf.len(),
                    found: filled,
                })?,
                count => filled += count,
            }
        }
        Ok(())
    }

    pub fn write(&self, buf: &[u8]) -> Result<usize, WriteError> {
        // SAFETY: buf is valid for reads of buf.len() bytes.
        match unsafe { libc::write(self.0, buf.as_ptr().cast(), buf.len()) } {
            -1 => Err(WriteError::from_errno(err_no())),
            count => Ok(count.unsigned_abs()),
        }
    }

    /// Writes the whole of `buf`, returning the number of bytes written.
    pub fn write_all(&self, buf: &[u8]) -> Result<usize, WriteError> {
        let mut written = 0;
        while written < buf.len() {
            match self.write(&buf[written..])? {
                0 => Err(ShortTransferError {
                    expected: buf.len(),
                    found: written,
                })?,
                count => written += count,
            }
        }
        Ok(written)
    }

    pub fn metadata(&self) -> Result<Metadata, MetadataError> {
        let mut raw_meta: MaybeUninit<libc::stat> = MaybeUninit::uninit();
        // SAFETY: raw_meta is valid for writes of a stat struct.
        if unsafe { libc::fstat(self.0, raw_meta.as_mut_ptr()) } == -1 {
            Err(MetadataError::from_errno(err_no()))?
        }
        // SAFETY: fstat succeeded, so raw_meta has been initialized.
        Ok(Metadata::from_stat(unsafe { raw_meta.assume_init() }))
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: The descriptor is owned and isn't used again after this.
        if unsafe { libc::close(self.0) } == -1 {
            error!("error while closing file descriptor {}: os error {}", self.0, err_no());
        }
    }
}

impl Debug for Fd {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.0)
    }
}
