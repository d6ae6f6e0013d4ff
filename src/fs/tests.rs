#![cfg(test)]

use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::symlink;

use tempfile::TempDir;

use super::*;
use crate::text::StringArray;
use crate::text::utf8::Utf8ErrorKind;
use crate::util::log::init as init_logging;

fn setup() -> TempDir {
    init_logging();
    tempfile::tempdir().unwrap()
}

fn path_in(dir: &TempDir, name: &str) -> Vec<u8> {
    dir.path().join(name).as_os_str().as_bytes().to_vec()
}

#[test]
fn test_binary_round_trip() {
    let dir = setup();
    let path = path_in(&dir, "data.bin");
    let bytes = [0xDE, 0xAD, 0x00, 0xBE, 0xEF];

    assert_eq!(write_binary(&path, &bytes), Ok(5));
    let read = read_binary(&path).unwrap();
    assert_eq!(read, bytes, "Zero bytes should survive a binary round trip.");
    assert_eq!(read.cap(), 5);

    assert_eq!(write_binary(&path, b"x"), Ok(1));
    assert_eq!(read_binary(&path).unwrap(), *b"x", "Writing should truncate the old contents.");
}

#[test]
fn test_text_stops_at_nul() {
    let dir = setup();
    let path = path_in(&dir, "note.txt");

    assert_eq!(write_text(&path, b"hello\0world"), Ok(5));
    let text = read_text(&path).unwrap();
    assert_eq!(text, "hello");
    assert_eq!(text.as_bytes_with_nul(), b"hello\0");

    assert_eq!(write_text(&path, ""), Ok(0), "Writing empty text should succeed.");
    let empty = read_text(&path).unwrap();
    assert!(empty.is_empty());
    assert!(read_binary(&path).unwrap().is_empty());
}

#[test]
fn test_read_utf8() {
    let dir = setup();
    let with_bom = path_in(&dir, "bom.txt");
    let without_bom = path_in(&dir, "plain.txt");
    let corrupted = path_in(&dir, "corrupted.txt");

    write_binary(&with_bom, "\u{FEFF}grüße".as_bytes()).unwrap();
    write_binary(&without_bom, "grüße".as_bytes()).unwrap();
    write_binary(&corrupted, b"ab\xED\xA0\x80").unwrap();

    let text = read_utf8(&with_bom).unwrap();
    assert!(text.contains_bom());
    assert_eq!(text.codepoint_count(), 6);
    assert_eq!(read_utf8(&without_bom).unwrap(), "grüße", "A missing BOM isn't an error.");

    match read_utf8(&corrupted) {
        Err(FileError::CorruptedEncoding(error)) => {
            assert_eq!(error.valid_up_to, 2);
            assert_eq!(error.kind, Utf8ErrorKind::Surrogate);
        },
        other => panic!("expected an encoding error, found {other:?}"),
    }
    assert!(read_text(&corrupted).is_ok(), "Reading text doesn't validate it.");
}

#[test]
fn test_missing_file() {
    let dir = setup();
    let path = path_in(&dir, "missing");

    assert_eq!(
        read_binary(&path),
        Err(FileError::Open(OpenError::MissingComponent(MissingComponentError)))
    );
    assert!(read_text(&path).unwrap_err().is_open());
    assert_eq!(file_info(&path), Err(FileError::DoesNotExist(DoesNotExistError)));
    assert!(!file_exists(&path));
}

#[test]
fn test_invalid_path() {
    setup();
    assert_eq!(read_binary("bad\0path"), Err(FileError::InvalidPath(InvalidPathError)));
    assert_eq!(write_text("bad\0path", "text"), Err(FileError::InvalidPath(InvalidPathError)));
    assert_eq!(list_directory("bad\0path"), Err(DirError::InvalidPath(InvalidPathError)));
    assert!(!file_exists("bad\0path"));
}

#[test]
fn test_file_info() {
    let dir = setup();
    let path = path_in(&dir, "info.txt");
    write_text(&path, "twelve bytes").unwrap();

    assert!(file_exists(&path));
    let info = file_info(&path).unwrap();
    assert_eq!(info.size, 12);
    assert!(info.is_file());
    assert_eq!(info.file_type, FileType::Regular);
    assert_eq!(info.mode & 0o600, 0o600, "New files should be readable and writable by the owner.");
    assert_eq!(info.mode & 0o111, 0, "New files shouldn't be executable.");
    assert!(info.modified.to_system_time().is_some());

    let dir_info = file_info(dir.path().as_os_str().as_bytes()).unwrap();
    assert!(dir_info.is_dir());
}

#[test]
fn test_list_directory() {
    let dir = setup();
    for name in ["zeta.txt", "alpha.txt", "Beta.txt", ".hidden"] {
        write_text(path_in(&dir, name), name).unwrap();
    }
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    symlink(dir.path().join("sub"), dir.path().join("link")).unwrap();

    let contents = list_directory(dir.path().as_os_str().as_bytes()).unwrap();
    let files: Vec<_> = contents.files.iter().map(|name| name.as_bytes()).collect();
    assert_eq!(files, [&b"Beta.txt"[..], b"alpha.txt", b"link", b"zeta.txt"]);
    assert_eq!(contents.directories.len(), 1);
    assert!(contents.directories.contains("sub"));
    assert!(!contents.files.contains(".hidden"), "Names starting with '.' should be skipped.");
}

#[test]
fn test_list_directory_errors() {
    let dir = setup();
    let file = path_in(&dir, "file.txt");
    write_text(&file, "not a directory").unwrap();

    assert_eq!(
        list_directory(&file),
        Err(DirError::Open(OpenError::NonDirComponent(NonDirComponentError)))
    );
    assert!(list_directory(path_in(&dir, "missing")).unwrap_err().is_open());

    let trailing_slash = list_directory(path_in(&dir, "")).unwrap();
    assert_eq!(trailing_slash.files.len(), 1);
    assert_eq!(DirContents::default(), DirContents {
        files: StringArray::new(),
        directories: StringArray::new(),
    });
}
