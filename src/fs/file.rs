use std::mem::MaybeUninit;

use libc::{O_CREAT, O_RDONLY, O_TRUNC, O_WRONLY, mode_t};
use log::{error, info};

use crate::collections::contiguous::Vector;
use crate::fs::error::{DoesNotExistError, FileError, MetadataError};
use crate::fs::fd::Fd;
use crate::fs::path::CPath;
use crate::fs::syscall::err_no;
use crate::fs::Metadata;
use crate::text::{ByteString, utf8};

/// The permissions given to files created by [`write_binary`] and [`write_text`], before the
/// process umask is applied.
pub const DEFAULT_FILE_MODE: mode_t = 0o644;

/// Reads the whole of the file at `path` into a [`Vector`].
///
/// # Errors
/// Returns a [`FileError`] if the file can't be opened, its size can't be determined, the buffer
/// can't be allocated or fewer bytes than the reported size could be read. A partially read buffer
/// is never returned.
pub fn read_binary<P: AsRef<[u8]>>(path: P) -> Result<Vector<u8>, FileError> {
    let path = CPath::new(path.as_ref())?;
    let fd = open_logged(&path, O_RDONLY, 0)?;
    let size = file_size(&fd, &path)?;

    let mut buf = Vector::try_with_cap(size)?;
    buf.try_resize(size, 0)?;
    fd.read_exact(&mut buf)
        .inspect_err(|e| error!("error reading {path}: {e}"))?;
    Ok(buf)
}

/// Reads the whole of the file at `path` into a [`ByteString`], without validating its encoding.
/// The result is nul-terminated like every ByteString.
///
/// # Errors
/// See [`read_binary`].
pub fn read_text<P: AsRef<[u8]>>(path: P) -> Result<ByteString, FileError> {
    let path = CPath::new(path.as_ref())?;
    read_string(&path)
}

/// Reads the whole of the file at `path` into a [`ByteString`] and validates it as UTF-8. A file
/// without a byte order mark is accepted, but noted in the log.
///
/// # Errors
/// Returns [`FileError::CorruptedEncoding`] if the contents aren't valid UTF-8, otherwise see
/// [`read_binary`].
pub fn read_utf8<P: AsRef<[u8]>>(path: P) -> Result<ByteString, FileError> {
    let path = CPath::new(path.as_ref())?;
    let text = read_string(&path)?;

    if !text.contains_bom() {
        info!("{path} does not contain a utf-8 BOM");
    }
    text.validate_utf8()
        .inspect_err(|e| error!("{path} is corrupted or does not use utf-8 encoding: {e}"))?;
    Ok(text)
}

/// Creates or truncates the file at `path` and writes all of `bytes` to it, returning the number
/// of bytes written.
///
/// # Errors
/// Returns a [`FileError`] if the file can't be opened or not every byte could be written.
pub fn write_binary<P: AsRef<[u8]>>(path: P, bytes: &[u8]) -> Result<usize, FileError> {
    let path = CPath::new(path.as_ref())?;
    write_bytes(&path, bytes)
}

/// Creates or truncates the file at `path` and writes `text` up to its first zero byte, returning
/// the number of bytes written.
///
/// # Errors
/// See [`write_binary`].
///
/// # Examples
/// ```
/// # use mini_std::fs;
/// # let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("note.txt");
/// let path = path.to_str().unwrap();
///
/// assert_eq!(fs::write_text(path, b"hello\0ignored"), Ok(5));
/// assert_eq!(fs::read_text(path).unwrap(), "hello");
/// ```
pub fn write_text<P: AsRef<[u8]>, T: AsRef<[u8]>>(path: P, text: T) -> Result<usize, FileError> {
    let path = CPath::new(path.as_ref())?;
    let text = text.as_ref();
    write_bytes(&path, &text[..utf8::c_str_len(text)])
}

/// Returns true if the file at `path` exists and can be opened for reading.
pub fn file_exists<P: AsRef<[u8]>>(path: P) -> bool {
    CPath::new(path.as_ref())
        .ok()
        .and_then(|path| Fd::open(path.as_c_str(), O_RDONLY, 0).ok())
        .is_some()
}

/// Retrieves [`Metadata`] for the file at `path`, following symlinks.
///
/// # Errors
/// Returns [`FileError::DoesNotExist`] if there is nothing at `path`, or
/// [`FileError::Metadata`] for any other failure.
pub fn file_info<P: AsRef<[u8]>>(path: P) -> Result<Metadata, FileError> {
    let path = CPath::new(path.as_ref())?;
    let mut raw_meta: MaybeUninit<libc::stat> = MaybeUninit::uninit();

    // SAFETY: path is nul-terminated and raw_meta is valid for writes of a stat struct.
    if unsafe { libc::stat(path.as_c_str().as_ptr(), raw_meta.as_mut_ptr()) } == -1 {
        let error = match err_no() {
            libc::ENOENT => FileError::from(DoesNotExistError),
            e => MetadataError::from_errno(e).into(),
        };
        error!("can't get info for {path}: {error}");
        Err(error)?
    }

    // SAFETY: stat succeeded, so raw_meta has been initialized.
    Ok(Metadata::from_stat(unsafe { raw_meta.assume_init() }))
}

fn read_string(path: &CPath) -> Result<ByteString, FileError> {
    let fd = open_logged(path, O_RDONLY, 0)?;
    let size = file_size(&fd, path)?;

    let mut text = ByteString::try_zeroed(size)?;
    fd.read_exact(text.as_bytes_mut())
        .inspect_err(|e| error!("error reading {path}: {e}"))?;
    Ok(text)
}

fn write_bytes(path: &CPath, bytes: &[u8]) -> Result<usize, FileError> {
    let fd = open_logged(path, O_WRONLY | O_CREAT | O_TRUNC, DEFAULT_FILE_MODE)?;
    info!("writing to {path}");

    let written = fd
        .write_all(bytes)
        .inspect_err(|e| error!("error writing to {path}: {e}"))?;
    info!("wrote {written} bytes to {path}");
    Ok(written)
}

fn open_logged(path: &CPath, flags: libc::c_int, mode: mode_t) -> Result<Fd, FileError> {
    let fd = Fd::open(path.as_c_str(), flags, mode)
        .inspect_err(|e| error!("can't open {path}: {e}"))?;
    info!("opened {path}");
    Ok(fd)
}

fn file_size(fd: &Fd, path: &CPath) -> Result<usize, FileError> {
    let size = fd
        .metadata()
        .inspect_err(|e| error!("can't get the size of {path}: {e}"))?
        .size;
    info!("file size {size} bytes");
    // A size that doesn't fit in memory can't be buffered either.
    Ok(usize::try_from(size).unwrap_or(usize::MAX))
}
