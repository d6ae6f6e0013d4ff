use std::io;

use libc::c_int;

/// Returns the error code set by the last failing libc call on this thread.
pub(crate) fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Clears the error code, for calls like `readdir` which only signal failure through it.
pub(crate) fn clear_err_no() {
    // SAFETY: __errno_location always returns a valid pointer to this thread's errno.
    unsafe { *libc::__errno_location() = 0 };
}
