use std::ffi::CStr;
use std::fmt::{self, Display, Formatter};

use crate::fs::error::{InvalidPathError, PathError};
use crate::text::ByteString;

/// A path converted into the nul-terminated form expected by libc.
pub(crate) struct CPath {
    inner: ByteString,
}

impl CPath {
    pub fn new(path: &[u8]) -> Result<CPath, PathError> {
        let inner = ByteString::try_from_bytes(path)?;
        if inner.to_c_str().is_none() {
            Err(InvalidPathError)?
        }
        Ok(CPath {
            inner,
        })
    }

    pub fn as_c_str(&self) -> &CStr {
        // Checked for interior nul bytes on construction.
        self.inner.to_c_str().unwrap_or_default()
    }
}

impl Display for CPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
