/// The kind of object a path or directory entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    BlockDevice,
    CharDevice,
    Directory,
    Fifo,
    Symlink,
    Regular,
    Socket,
    Other,
}

impl FileType {
    /// Extracts the type from the `st_mode` field of a `stat` result.
    pub(crate) const fn from_stat_mode(st_mode: u32) -> FileType {
        match st_mode & libc::S_IFMT {
            libc::S_IFBLK => FileType::BlockDevice,
            libc::S_IFCHR => FileType::CharDevice,
            libc::S_IFDIR => FileType::Directory,
            libc::S_IFIFO => FileType::Fifo,
            libc::S_IFLNK => FileType::Symlink,
            libc::S_IFREG => FileType::Regular,
            libc::S_IFSOCK => FileType::Socket,
            _ => FileType::Other,
        }
    }

    /// Converts the `d_type` field of a directory entry, returning [`None`] for `DT_UNKNOWN`,
    /// which file systems may report when they don't store the type in the directory itself.
    pub(crate) const fn from_dirent_type(d_type: u8) -> Option<FileType> {
        Some(match d_type {
            libc::DT_BLK => FileType::BlockDevice,
            libc::DT_CHR => FileType::CharDevice,
            libc::DT_DIR => FileType::Directory,
            libc::DT_FIFO => FileType::Fifo,
            libc::DT_LNK => FileType::Symlink,
            libc::DT_REG => FileType::Regular,
            libc::DT_SOCK => FileType::Socket,
            libc::DT_UNKNOWN => return None,
            _ => FileType::Other,
        })
    }

    pub const fn is_dir(&self) -> bool {
        matches!(self, FileType::Directory)
    }

    pub const fn is_file(&self) -> bool {
        matches!(self, FileType::Regular)
    }
}
