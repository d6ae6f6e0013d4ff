use std::ffi::CStr;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use log::{error, info};

use crate::fs::error::{DirError, MetadataError, OpenError, ReadError};
use crate::fs::path::CPath;
use crate::fs::syscall::{clear_err_no, err_no};
use crate::fs::{FileType, Metadata};
use crate::text::{ByteString, StringArray};

/// The names of the entries in a directory, split into directories and everything else.
///
/// Both lists are sorted in ascending byte order and exclude names starting with `.`. Symlinks
/// are never followed, so a link to a directory is listed as a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirContents {
    pub files: StringArray,
    pub directories: StringArray,
}

/// Lists the entries of the directory at `path`.
///
/// # Errors
/// Returns a [`DirError`] if the directory can't be opened or read, or if the type of an entry
/// can't be determined.
///
/// # Examples
/// ```
/// # use mini_std::fs;
/// # let dir = tempfile::tempdir().unwrap();
/// # let root = dir.path().to_str().unwrap();
/// fs::write_text(format!("{root}/b.txt"), "b").unwrap();
/// fs::write_text(format!("{root}/a.txt"), "a").unwrap();
/// fs::write_text(format!("{root}/.hidden"), "h").unwrap();
///
/// let contents = fs::list_directory(root).unwrap();
/// assert_eq!(contents.files.len(), 2);
/// assert_eq!(contents.files[0], "a.txt");
/// assert!(contents.directories.is_empty());
/// ```
pub fn list_directory<P: AsRef<[u8]>>(path: P) -> Result<DirContents, DirError> {
    let path = CPath::new(path.as_ref())?;
    let stream = DirStream::open(&path).inspect_err(|e| error!("can't open {path}: {e}"))?;
    info!("listing {path}");

    let mut contents = DirContents::default();
    while let Some((name, d_type)) = stream
        .next_entry()
        .inspect_err(|e| error!("error reading {path}: {e}"))?
    {
        if name.to_bytes().starts_with(b".") {
            continue;
        }

        let file_type = match FileType::from_dirent_type(d_type) {
            Some(file_type) => file_type,
            None => stream.entry_type(name)?,
        };

        let name = ByteString::try_from_bytes(name.to_bytes())?;
        if file_type.is_dir() {
            contents.directories.push(name);
        } else {
            contents.files.push(name);
        }
    }

    contents.files.sort();
    contents.directories.sort();
    Ok(contents)
}

/// An open directory stream, closed on drop.
struct DirStream(NonNull<libc::DIR>);

impl DirStream {
    fn open(path: &CPath) -> Result<DirStream, OpenError> {
        // SAFETY: path is a valid nul-terminated string.
        let dir = unsafe { libc::opendir(path.as_c_str().as_ptr()) };
        NonNull::new(dir)
            .map(DirStream)
            .ok_or_else(|| OpenError::from_errno(err_no()))
    }

    /// Returns the name and `d_type` of the next entry, or [`None`] at the end of the stream. The
    /// name is only valid until the next call.
    fn next_entry(&self) -> Result<Option<(&CStr, u8)>, ReadError> {
        clear_err_no();
        // SAFETY: The stream is open. readdir returns null at the end of the stream or on error,
        // which are distinguished by errno.
        let entry = unsafe { libc::readdir(self.0.as_ptr()) };
        if entry.is_null() {
            return match err_no() {
                0 => Ok(None),
                e => Err(ReadError::from_errno(e)),
            };
        }

        // SAFETY: A non-null entry points to a valid dirent, which lives until the next readdir on
        // this stream.
        let entry = unsafe { &*entry };
        // SAFETY: d_name is always nul-terminated.
        let name = unsafe { CStr::from_ptr(entry.d_name.as_ptr()) };
        Ok(Some((name, entry.d_type)))
    }

    /// Determines the type of an entry whose directory didn't report it, without following links.
    fn entry_type(&self, name: &CStr) -> Result<FileType, MetadataError> {
        let mut raw_meta: MaybeUninit<libc::stat> = MaybeUninit::uninit();

        // SAFETY: The stream is open, name is nul-terminated and raw_meta is valid for writes.
        let result = unsafe {
            libc::fstatat(
                libc::dirfd(self.0.as_ptr()),
                name.as_ptr(),
                raw_meta.as_mut_ptr(),
                libc::AT_SYMLINK_NOFOLLOW,
            )
        };
        if result == -1 {
            Err(MetadataError::from_errno(err_no()))?
        }

        // SAFETY: fstatat succeeded, so raw_meta has been initialized.
        Ok(Metadata::from_stat(unsafe { raw_meta.assume_init() }).file_type)
    }
}

impl Drop for DirStream {
    fn drop(&mut self) {
        // SAFETY: The stream is owned and isn't used again after this.
        if unsafe { libc::closedir(self.0.as_ptr()) } == -1 {
            error!("error while closing directory stream: os error {}", err_no());
        }
    }
}
