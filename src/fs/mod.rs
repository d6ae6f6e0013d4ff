//! Whole-file reading and writing, file metadata and directory listing, built directly on libc.
//!
//! Paths are accepted as anything that can be viewed as bytes, so `&str`,
//! [`ByteString`](crate::text::ByteString) and [`StringView`](crate::text::StringView) can all be
//! used. A path containing a nul byte is rejected with an `InvalidPath` error rather than being
//! silently truncated.
//!
//! Every operation logs what it does through the [`log`] facade: opened files and transferred
//! byte counts at `info` level, failures at `error` level. The same failures are always returned
//! as typed errors as well.
#![cfg(target_os = "linux")]

mod dir;
mod error;
mod fd;
mod file;
mod file_type;
mod metadata;
mod path;
mod syscall;
mod tests;

pub use dir::*;
pub use error::*;
pub use file::*;
pub use file_type::*;
pub use metadata::*;
