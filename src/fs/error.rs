use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

use crate::text::utf8::Utf8Error;
use crate::util::error::ReserveError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file metadata would overflow capacity")]
pub struct MetadataOverflowError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("permission denied")]
pub struct AccessError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path refers to a directory")]
pub struct IsDirectoryError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file system is read-only")]
pub struct ReadOnlyFSError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file is too large to open")]
pub struct OversizedFileError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file does not exist")]
pub struct DoesNotExistError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path contains a nul byte")]
pub struct InvalidPathError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("expected {expected} bytes, transferred {found}")]
pub struct ShortTransferError {
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub c_int);

/// The ways in which opening a file or directory can fail.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum OpenError {
    Access(AccessError),
    Interrupt(InterruptError),
    ExcessiveLinks(ExcessiveLinksError),
    FileCount(FileCountError),
    PathLength(PathLengthError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    IsDirectory(IsDirectoryError),
    OOM(OOMError),
    StorageExhausted(StorageExhaustedError),
    ReadOnlyFS(ReadOnlyFSError),
    OversizedFile(OversizedFileError),
    Unexpected(UnexpectedError),
}

impl OpenError {
    pub(crate) const fn from_errno(errno: c_int) -> OpenError {
        match errno {
            libc::EACCES | libc::EPERM => OpenError::Access(AccessError),
            libc::EINTR => OpenError::Interrupt(InterruptError),
            libc::ELOOP => OpenError::ExcessiveLinks(ExcessiveLinksError),
            libc::EMFILE | libc::ENFILE => OpenError::FileCount(FileCountError),
            libc::ENAMETOOLONG => OpenError::PathLength(PathLengthError),
            libc::ENOENT => OpenError::MissingComponent(MissingComponentError),
            libc::ENOTDIR => OpenError::NonDirComponent(NonDirComponentError),
            libc::EISDIR => OpenError::IsDirectory(IsDirectoryError),
            libc::ENOMEM => OpenError::OOM(OOMError),
            libc::ENOSPC | libc::EDQUOT => OpenError::StorageExhausted(StorageExhaustedError),
            libc::EROFS => OpenError::ReadOnlyFS(ReadOnlyFSError),
            libc::EFBIG | libc::EOVERFLOW => OpenError::OversizedFile(OversizedFileError),
            e => OpenError::Unexpected(UnexpectedError(e)),
        }
    }
}

/// The ways in which reading from an open file or directory can fail.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum ReadError {
    Interrupt(InterruptError),
    IO(IOError),
    IsDirectory(IsDirectoryError),
    ShortRead(ShortTransferError),
    Unexpected(UnexpectedError),
}

impl ReadError {
    pub(crate) const fn from_errno(errno: c_int) -> ReadError {
        match errno {
            libc::EINTR => ReadError::Interrupt(InterruptError),
            libc::EIO => ReadError::IO(IOError),
            libc::EISDIR => ReadError::IsDirectory(IsDirectoryError),
            e => ReadError::Unexpected(UnexpectedError(e)),
        }
    }
}

/// The ways in which writing to an open file can fail.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum WriteError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
    OversizedFile(OversizedFileError),
    ShortWrite(ShortTransferError),
    Unexpected(UnexpectedError),
}

impl WriteError {
    pub(crate) const fn from_errno(errno: c_int) -> WriteError {
        match errno {
            libc::EINTR => WriteError::Interrupt(InterruptError),
            libc::EIO => WriteError::IO(IOError),
            libc::ENOSPC | libc::EDQUOT => WriteError::StorageExhausted(StorageExhaustedError),
            libc::EFBIG => WriteError::OversizedFile(OversizedFileError),
            e => WriteError::Unexpected(UnexpectedError(e)),
        }
    }
}

/// The ways in which retrieving [`Metadata`](super::Metadata) can fail, other than the file being
/// absent.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum MetadataError {
    Access(AccessError),
    ExcessiveLinks(ExcessiveLinksError),
    PathLength(PathLengthError),
    NonDirComponent(NonDirComponentError),
    OOM(OOMError),
    MetadataOverflow(MetadataOverflowError),
    Unexpected(UnexpectedError),
}

impl MetadataError {
    pub(crate) const fn from_errno(errno: c_int) -> MetadataError {
        match errno {
            libc::EACCES => MetadataError::Access(AccessError),
            libc::ELOOP => MetadataError::ExcessiveLinks(ExcessiveLinksError),
            libc::ENAMETOOLONG => MetadataError::PathLength(PathLengthError),
            libc::ENOTDIR => MetadataError::NonDirComponent(NonDirComponentError),
            libc::ENOMEM => MetadataError::OOM(OOMError),
            libc::EOVERFLOW => MetadataError::MetadataOverflow(MetadataOverflowError),
            e => MetadataError::Unexpected(UnexpectedError(e)),
        }
    }
}

/// The ways in which turning a byte path into a C path can fail.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum PathError {
    InvalidPath(InvalidPathError),
    BufferAllocation(ReserveError),
}

/// The ways in which the whole-file operations can fail.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum FileError {
    Open(OpenError),
    Read(ReadError),
    Write(WriteError),
    Metadata(MetadataError),
    BufferAllocation(ReserveError),
    DoesNotExist(DoesNotExistError),
    CorruptedEncoding(Utf8Error),
    InvalidPath(InvalidPathError),
}

impl From<PathError> for FileError {
    fn from(value: PathError) -> Self {
        match value {
            PathError::InvalidPath(e) => e.into(),
            PathError::BufferAllocation(e) => e.into(),
        }
    }
}

/// The ways in which listing a directory can fail.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum DirError {
    Open(OpenError),
    Read(ReadError),
    Metadata(MetadataError),
    BufferAllocation(ReserveError),
    InvalidPath(InvalidPathError),
}

impl From<PathError> for DirError {
    fn from(value: PathError) -> Self {
        match value {
            PathError::InvalidPath(e) => e.into(),
            PathError::BufferAllocation(e) => e.into(),
        }
    }
}
