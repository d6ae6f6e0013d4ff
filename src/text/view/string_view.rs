use std::ffi::CStr;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;

use crate::text::string::ByteString;
use crate::text::utf8::{self, Chars};

/// A non-owning view of a run of bytes, usually a [`ByteString`] or a literal.
///
/// The borrow checker ties a view to the bytes it was created from, so the owner can't be dropped
/// or reallocated while the view exists.
///
/// There are two kinds of comparison: [`PartialEq`] compares contents, while
/// [`ptr_eq`](StringView::ptr_eq) and [`ptr_eq_string`](StringView::ptr_eq_string) check whether
/// two views start at the same address.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringView<'a> {
    bytes: &'a [u8],
}

impl<'a> StringView<'a> {
    pub const fn from_bytes(bytes: &'a [u8]) -> StringView<'a> {
        StringView {
            bytes,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub const fn from_str(text: &'a str) -> StringView<'a> {
        StringView::from_bytes(text.as_bytes())
    }

    pub const fn from_c_str(text: &'a CStr) -> StringView<'a> {
        StringView::from_bytes(text.to_bytes())
    }

    /// Creates a view of `bytes` up to, but not including, its first zero byte.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::text::StringView;
    /// let view = StringView::from_nul_terminated(b"hello\0world");
    /// assert_eq!(view.as_bytes(), b"hello");
    /// ```
    pub fn from_nul_terminated(bytes: &'a [u8]) -> StringView<'a> {
        StringView::from_bytes(&bytes[..utf8::c_str_len(bytes)])
    }

    /// Creates a view of the whole of `string`, without scanning it.
    pub fn from_string(string: &'a ByteString) -> StringView<'a> {
        StringView::from_bytes(string.as_bytes())
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub const fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Returns a view which drops `count` bytes from the end and then starts at `index`, giving a
    /// length of `len - count`.
    ///
    /// Returns [`None`] unless `count < len`, or if the result would run past the end, which is the
    /// case when `index > count`.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::text::StringView;
    /// let view = StringView::from_str("abcdef");
    /// assert_eq!(view.substr(0, 2).unwrap().as_bytes(), b"abcd");
    /// assert_eq!(view.substr(1, 2).unwrap().as_bytes(), b"bcde");
    /// assert_eq!(view.substr(2, 2).unwrap().as_bytes(), b"cdef");
    /// assert!(view.substr(3, 2).is_none());
    /// assert!(view.substr(0, 6).is_none());
    /// ```
    pub fn substr(&self, index: usize, count: usize) -> Option<StringView<'a>> {
        let len = self.len().checked_sub(count).filter(|len| *len > 0)?;
        let end = index.checked_add(len)?;
        self.bytes.get(index..end).map(StringView::from_bytes)
    }

    /// Returns true if both views start at the same address. Lengths aren't compared, so a prefix
    /// taken with [`substr`](StringView::substr) at index 0 is the same view. Use `==` to compare
    /// contents.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::text::StringView;
    /// let first = String::from("same");
    /// let second = String::from("same");
    /// let view = StringView::from_str(&first);
    ///
    /// assert!(view.ptr_eq(StringView::from_str(&first)));
    /// assert!(!view.ptr_eq(StringView::from_str(&second)));
    /// assert_eq!(view, StringView::from_str(&second));
    /// assert!(view.ptr_eq(view.substr(0, 2).unwrap()));
    /// ```
    pub fn ptr_eq(&self, other: StringView<'_>) -> bool {
        std::ptr::eq(self.as_ptr(), other.as_ptr())
    }

    /// Returns true if the view starts at the first byte of `string`.
    pub fn ptr_eq_string(&self, string: &ByteString) -> bool {
        std::ptr::eq(self.as_ptr(), string.as_bytes().as_ptr())
    }

    pub fn chars(&self) -> Chars<'a> {
        Chars::new(self.bytes)
    }

    /// Copies the viewed bytes into a new [`ByteString`].
    pub fn to_byte_string(&self) -> ByteString {
        ByteString::from_bytes(self.bytes)
    }
}

impl Deref for StringView<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes
    }
}

impl AsRef<[u8]> for StringView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl PartialEq<ByteString> for StringView<'_> {
    fn eq(&self, other: &ByteString) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<str> for StringView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for StringView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl<'a> From<&'a ByteString> for StringView<'a> {
    fn from(value: &'a ByteString) -> Self {
        StringView::from_string(value)
    }
}

impl<'a> From<&'a str> for StringView<'a> {
    fn from(value: &'a str) -> Self {
        StringView::from_str(value)
    }
}

impl From<StringView<'_>> for ByteString {
    fn from(value: StringView<'_>) -> Self {
        value.to_byte_string()
    }
}

impl Debug for StringView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.bytes.escape_ascii())
    }
}

impl Display for StringView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use std::fmt::Write;

        for value in self.chars() {
            f.write_char(value)?;
        }
        Ok(())
    }
}
