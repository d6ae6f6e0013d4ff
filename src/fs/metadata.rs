use std::time::{Duration, SystemTime};

use libc::stat as Stat;

use super::FileType;

/// A point in time as reported by `stat`: seconds and nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub secs: i64,
    pub nanos: i64,
}

impl Timestamp {
    /// Converts the Timestamp into a [`SystemTime`], returning [`None`] if it can't be represented.
    pub fn to_system_time(self) -> Option<SystemTime> {
        let nanos = Duration::from_nanos(u64::try_from(self.nanos).ok()?);
        match u64::try_from(self.secs) {
            Ok(secs) => SystemTime::UNIX_EPOCH.checked_add(Duration::from_secs(secs) + nanos),
            Err(_) => SystemTime::UNIX_EPOCH
                .checked_sub(Duration::from_secs(self.secs.unsigned_abs()))?
                .checked_add(nanos),
        }
    }
}

/// Information about a file, as returned by [`file_info`](super::file_info).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub size: u64,
    pub file_type: FileType,
    /// Permission bits, including setuid, setgid and sticky.
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub device_id: u64,
    pub inode: u64,
    pub links: u64,
    pub block_size: i64,
    pub blocks: i64,
    pub accessed: Timestamp,
    pub modified: Timestamp,
    pub changed: Timestamp,
}

impl Metadata {
    #[allow(clippy::unnecessary_cast)]
    pub(crate) const fn from_stat(raw: Stat) -> Metadata {
        Metadata {
            size: raw.st_size as u64,
            file_type: FileType::from_stat_mode(raw.st_mode),
            mode: raw.st_mode & 0o7777,
            uid: raw.st_uid,
            gid: raw.st_gid,
            device_id: raw.st_dev as u64,
            inode: raw.st_ino as u64,
            links: raw.st_nlink as u64,
            block_size: raw.st_blksize as i64,
            blocks: raw.st_blocks as i64,
            accessed: Timestamp {
                secs: raw.st_atime as i64,
                nanos: raw.st_atime_nsec as i64,
            },
            modified: Timestamp {
                secs: raw.st_mtime as i64,
                nanos: raw.st_mtime_nsec as i64,
            },
            changed: Timestamp {
                secs: raw.st_ctime as i64,
                nanos: raw.st_ctime_nsec as i64,
            },
        }
    }

    pub const fn is_dir(&self) -> bool {
        self.file_type.is_dir()
    }

    pub const fn is_file(&self) -> bool {
        self.file_type.is_file()
    }
}
