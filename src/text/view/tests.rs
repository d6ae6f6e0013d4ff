#![cfg(test)]

use super::*;
use crate::text::ByteString;

#[test]
fn test_constructors() {
    assert_eq!(StringView::from_str("hello").len(), 5);
    assert_eq!(StringView::from_c_str(c"hello"), "hello");
    assert_eq!(StringView::from_nul_terminated(b"hi\0there"), "hi");
    assert_eq!(StringView::from_nul_terminated(b"no nul"), "no nul");
    assert!(StringView::default().is_empty());

    let string = ByteString::from("owned");
    let view = StringView::from_string(&string);
    assert_eq!(view, string);
    assert!(view.ptr_eq_string(&string), "A view of a string should share its buffer.");
}

#[test]
fn test_substr_drops_from_the_tail() {
    let view = StringView::from_str("Hello world");
    assert_eq!(view.substr(0, 6), Some(StringView::from_str("Hello")));
    assert_eq!(view.substr(6, 6), Some(StringView::from_str("world")));
    assert_eq!(view.substr(3, 6), Some(StringView::from_str("lo wo")));
    assert_eq!(view.substr(0, 0), Some(view));

    assert_eq!(view.substr(7, 6), None, "The result can't run past the viewed bytes.");
    assert_eq!(view.substr(0, 11), None, "At least one byte has to remain.");
    assert_eq!(view.substr(0, 12), None);
    assert_eq!(StringView::default().substr(0, 0), None);
}

#[test]
fn test_pointer_and_content_equality() {
    let first = ByteString::from("same");
    let second = ByteString::from("same");

    let a = StringView::from(&first);
    let b = StringView::from(&second);
    assert_eq!(a, b, "Views of equal contents should compare equal.");
    assert!(!a.ptr_eq(b), "Views of distinct buffers don't share an address.");
    assert!(!a.ptr_eq_string(&second));
    assert!(a.ptr_eq(StringView::from_string(&first)));

    let prefix = a.substr(0, 2).unwrap();
    assert!(a.ptr_eq(prefix), "A prefix view starts at the same address.");
    assert!(prefix.ptr_eq_string(&first));
    assert_ne!(a, prefix);

    let suffix = a.substr(2, 2).unwrap();
    assert!(!a.ptr_eq(suffix));
    assert!(!suffix.ptr_eq_string(&first));
}

#[test]
fn test_pointer_equality_of_empty_strings() {
    for empty in [ByteString::new(), ByteString::from_bytes(b"")] {
        let view = StringView::from_string(&empty);
        assert!(view.ptr_eq_string(&empty), "A view of an empty string should point at it.");
        assert!(view.ptr_eq(StringView::from(&empty)));
        assert!(view.is_empty());
    }
}

#[test]
fn test_materialize_and_append() {
    let view = StringView::from_str("Hello world").substr(6, 6).unwrap();
    let owned = view.to_byte_string();
    assert_eq!(owned, "world");
    assert_eq!(owned.cap(), 5);

    let mut greeting = ByteString::from("Hello ");
    greeting.append_view(view);
    assert_eq!(greeting, "Hello world");
    assert_eq!(ByteString::from(view), owned);
}

#[test]
fn test_formatting() {
    let view = StringView::from_bytes(b"tab\there\xFF");
    assert_eq!(format!("{view:?}"), "\"tab\\there\\xff\"");
    assert_eq!(view.to_string(), "tab\there\u{FFFD}");
}
