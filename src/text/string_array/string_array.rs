use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;
use std::slice;

use crate::collections::contiguous::Vector;
use crate::text::string::ByteString;

/// An ordered collection of owned [`ByteString`]s, such as the entries of a directory.
///
/// Strings are moved in with [`push`](StringArray::push) and dropped along with the array.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StringArray {
    inner: Vector<ByteString>,
}

impl StringArray {
    /// Creates an empty StringArray without allocating.
    pub const fn new() -> StringArray {
        StringArray {
            inner: Vector::empty(),
        }
    }

    /// Takes ownership of `string` and adds it to the end of the array.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::text::{ByteString, StringArray};
    /// let mut names = StringArray::new();
    /// names.push(ByteString::from("b"));
    /// names.push(ByteString::from("a"));
    /// assert_eq!(names.len(), 2);
    /// assert_eq!(names.get(1), Some(&ByteString::from("a")));
    /// ```
    pub fn push(&mut self, string: ByteString) {
        self.inner.push(string);
    }

    pub fn get(&self, index: usize) -> Option<&ByteString> {
        self.inner.as_slice().get(index)
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ByteString> {
        self.inner.as_slice().iter()
    }

    /// Returns true if any string in the array has exactly the contents `bytes`.
    pub fn contains(&self, bytes: impl AsRef<[u8]>) -> bool {
        let bytes = bytes.as_ref();
        self.iter().any(|string| string.as_bytes() == bytes)
    }

    /// Sorts the strings in ascending byte order.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::text::StringArray;
    /// let mut names: StringArray = ["delta", "alpha", "Charlie"].into_iter().collect();
    /// names.sort();
    /// let sorted: Vec<_> = names.iter().map(|name| name.to_string()).collect();
    /// assert_eq!(sorted, ["Charlie", "alpha", "delta"]);
    /// ```
    pub fn sort(&mut self) {
        self.inner.as_mut_slice().sort_unstable();
    }

    /// Consumes the StringArray, dropping every string it holds.
    pub fn destroy(self) {}
}

impl Deref for StringArray {
    type Target = [ByteString];

    fn deref(&self) -> &Self::Target {
        self.inner.as_slice()
    }
}

impl<'a> IntoIterator for &'a StringArray {
    type Item = &'a ByteString;
    type IntoIter = slice::Iter<'a, ByteString>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<ByteString> for StringArray {
    fn from_iter<I: IntoIterator<Item = ByteString>>(iter: I) -> Self {
        StringArray {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for StringArray {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(ByteString::from).collect()
    }
}

impl Debug for StringArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
