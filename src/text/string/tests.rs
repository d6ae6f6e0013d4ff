#![cfg(test)]

use std::ffi::CStr;
use std::fmt::Write;

use quickcheck_macros::quickcheck;

use super::*;
use crate::text::StringView;
use crate::util::error::{IndexOutOfBounds, InsertError};

fn assert_terminated(string: &ByteString) {
    let with_nul = string.as_bytes_with_nul();
    assert_eq!(with_nul.len(), string.len() + 1);
    assert_eq!(with_nul.last(), Some(&0), "The byte after the contents should be zero.");
}

#[test]
fn test_from_bytes() {
    let string = ByteString::from("Test");
    assert_eq!(string.len(), 4);
    assert_eq!(string.cap(), 4, "A new string should have capacity equal to its length.");
    assert_terminated(&string);

    let empty = ByteString::from_bytes(b"");
    assert!(empty.is_empty());
    assert_eq!(empty.cap(), 0, "An empty string shouldn't allocate.");
    assert_eq!(empty.as_bytes_with_nul(), b"\0");
    assert_eq!(empty.get(0), 0);
}

#[test]
fn test_zeroed() {
    let string = ByteString::zeroed(4);
    assert!(!string.is_empty());
    assert_eq!(string.len(), 4);
    assert_eq!(string.cap(), 4);
    assert_eq!(string.as_bytes_with_nul(), &[0; 5]);
}

#[test]
fn test_append_grows_with_terminator() {
    let mut string = ByteString::from("Testttt");
    assert_eq!(string.cap(), 7);

    string.append_cstring(b"opa\0and more");
    assert_eq!(string, "Testtttopa");
    assert_eq!(string.len(), 10);
    assert_eq!(string.cap(), 22, "Growth should request room for the terminator too.");
    assert_terminated(&string);

    string.shrink_to_fit();
    assert_eq!(string.cap(), 10);
    assert_terminated(&string);
}

#[test]
fn test_append_variants() {
    let mut string = ByteString::new();
    string
        .append_c_str(c"one ")
        .append_view(StringView::from_str("two "))
        .append_string(&ByteString::from_bytes(b"thr\0ee"));
    assert_eq!(string.as_bytes(), b"one two thr\0ee", "Appending a string keeps zero bytes.");
    assert_terminated(&string);

    let cap = string.cap();
    string.append_bytes(b"");
    assert_eq!(string.cap(), cap, "Appending nothing shouldn't grow.");
}

#[test]
fn test_reserve_and_shrink() {
    let mut string = ByteString::from("Test");
    string.reserve(5);
    assert_eq!(string.cap(), 5);
    string.reserve(4);
    assert_eq!(string.cap(), 5, "Reserving less than the capacity should do nothing.");
    assert_terminated(&string);

    string.clear();
    string.shrink_to_fit();
    assert_eq!(string.cap(), 0);
    assert_eq!(string.as_bytes_with_nul(), b"\0");

    let mut empty = ByteString::new();
    empty.reserve(3);
    assert_eq!(empty.cap(), 3);
    assert_terminated(&empty);
}

#[test]
fn test_insert_byte() {
    let mut string = ByteString::from("Tes");
    string.insert(3, b't');
    assert_eq!(string, "Test");

    let mut string = ByteString::from("est");
    string.insert(0, b'T');
    assert_eq!(string, "Test");
    assert_terminated(&string);

    assert_eq!(
        string.try_insert(5, b'!'),
        Err(InsertError::IndexOutOfBounds(IndexOutOfBounds { index: 5, len: 4 }))
    );
    string.insert(5, b'!');
    assert_eq!(string, "Test");
}

#[test]
fn test_insert_string() {
    let mut string = ByteString::from("ampl");
    string.insert_string(&ByteString::from("ex"), 0);
    string.insert_string(&ByteString::from("e"), 6);
    assert_eq!(string, "example");
    assert_terminated(&string);

    let mut string = ByteString::from("apl");
    string.insert_string(&ByteString::from("ex"), 0);
    string.insert_string(&ByteString::from("m"), 3);
    string.insert_string(&ByteString::from("e"), 6);
    assert_eq!(string, "example");

    string.insert_bytes(b"!", 100);
    assert_eq!(string, "example", "An out of bounds insert should be ignored.");
}

#[test]
fn test_erase() {
    let mut string = ByteString::from("Tes");
    assert_eq!(string.erase(4), None);
    assert_eq!(string.erase(3), None);
    assert_eq!(string, "Tes");

    assert_eq!(string.erase(1), Some(b'e'));
    assert_eq!(string, "Ts");
    assert_terminated(&string);
}

#[test]
fn test_resize() {
    let mut string = ByteString::from("ab");
    string.resize(4);
    assert_eq!(string.as_bytes(), b"ab\0\0");
    assert_eq!(string.cap(), 8);

    string.resize(1);
    assert_eq!(string, "a");
    assert_eq!(string.as_bytes_with_nul(), b"a\0");
}

#[test]
fn test_accessors() {
    let string = ByteString::from("abc");
    assert_eq!(string.get(0), b'a');
    assert_eq!(string.get(3), 0, "get(len) should read the terminator.");
    assert_eq!(string.get(4), 0);
    assert!(!string.get_ptr(3).is_null());
    assert!(string.get_ptr(4).is_null());
    assert_eq!(string.front(), Some(b'a'));
    assert_eq!(string.back(), Some(b'c'));

    // SAFETY: 3 is the length, where the terminator lives.
    assert_eq!(unsafe { string.get_unchecked(3) }, 0);

    let empty = ByteString::new();
    assert_eq!(empty.front(), None);
    assert_eq!(empty.back(), None);
}

#[test]
fn test_c_str() {
    let string = ByteString::from("hello");
    assert_eq!(string.to_c_str(), Some(c"hello"));
    assert_eq!(ByteString::from(c"hello"), string);

    let interior = ByteString::from_bytes(b"he\0llo");
    assert_eq!(interior.to_c_str(), None);

    // SAFETY: as_ptr always points to a nul-terminated buffer.
    let read_back = unsafe { CStr::from_ptr(string.as_ptr().cast()) };
    assert_eq!(read_back, c"hello");
}

#[test]
fn test_utf8() {
    let string = ByteString::from("\u{FEFF}héllo");
    assert!(string.is_valid_utf8());
    assert!(string.contains_bom());
    assert_eq!(string.codepoint_count(), 6);
    assert_eq!(string.to_str(), Ok("\u{FEFF}héllo"));
    assert_eq!(string.char_indices().nth(2), Some((4, 'é')));

    let invalid = ByteString::from_bytes(b"ok\xFF");
    assert!(!invalid.is_valid_utf8());
    assert_eq!(invalid.to_str().unwrap_err().valid_up_to, 2);
    assert!(invalid.looks_like_utf8(), "ASCII bytes are enough for the guess.");
    assert_eq!(invalid.to_string(), "ok\u{FFFD}");
}

#[test]
fn test_push_char_and_write() {
    let mut string = ByteString::new();
    for value in "añ€😀".chars() {
        string.push_char(value);
    }
    assert_eq!(string.to_str(), Ok("añ€😀"));

    write!(string, "-{}", 12).unwrap();
    assert_eq!(string.to_str(), Ok("añ€😀-12"));
    assert_terminated(&string);
}

#[test]
fn test_traits() {
    let string: ByteString = b"b\n".iter().copied().collect();
    assert_eq!(format!("{string:?}"), "\"b\\n\"");
    assert_eq!(string.clone(), string);

    let mut sorted = [ByteString::from("b"), ByteString::from("ab"), ByteString::from("a")];
    sorted.sort();
    assert_eq!(sorted, [ByteString::from("a"), ByteString::from("ab"), ByteString::from("b")]);
}

#[quickcheck]
fn appends_stay_terminated(chunks: Vec<Vec<u8>>) -> bool {
    let mut string = ByteString::new();
    let mut expected = Vec::new();

    for chunk in &chunks {
        string.append_bytes(chunk);
        expected.extend_from_slice(chunk);

        let with_nul = string.as_bytes_with_nul();
        if with_nul.last() != Some(&0) || string.cap() < string.len() {
            return false;
        }
    }

    string.as_bytes() == expected.as_slice()
}

#[quickcheck]
fn insert_then_erase_is_identity(bytes: Vec<u8>, index: usize, byte: u8) -> bool {
    let mut string = ByteString::from_bytes(&bytes);
    let index = index % (bytes.len() + 1);

    string.insert(index, byte);
    string.erase(index) == Some(byte) && string.as_bytes() == bytes.as_slice()
}
