use std::iter::FusedIterator;

use super::{char_length, decode_char};

/// An iterator over the [`char`]s of a byte slice.
///
/// Invalid sequences are yielded as [`char::REPLACEMENT_CHARACTER`], one byte at a time, so the
/// iterator always makes progress.
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    bytes: &'a [u8],
}

impl<'a> Chars<'a> {
    pub const fn new(bytes: &'a [u8]) -> Chars<'a> {
        Chars {
            bytes,
        }
    }

    /// Returns the bytes which are yet to be decoded.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let first = *self.bytes.first()?;

        let (value, consumed) = match decode_char(self.bytes) {
            Some(value) => (value, char_length(first) as usize),
            None => (char::REPLACEMENT_CHARACTER, 1),
        };

        self.bytes = &self.bytes[consumed..];
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.bytes.len().div_ceil(4), Some(self.bytes.len()))
    }
}

impl FusedIterator for Chars<'_> {}

/// An iterator over the [`char`]s of a byte slice and the byte offsets they start at.
#[derive(Debug, Clone)]
pub struct CharIndices<'a> {
    offset: usize,
    chars: Chars<'a>,
}

impl<'a> CharIndices<'a> {
    pub const fn new(bytes: &'a [u8]) -> CharIndices<'a> {
        CharIndices {
            offset: 0,
            chars: Chars::new(bytes),
        }
    }
}

impl Iterator for CharIndices<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.chars.as_bytes().len();
        let value = self.chars.next()?;
        let index = self.offset;
        self.offset += remaining - self.chars.as_bytes().len();
        Some((index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl FusedIterator for CharIndices<'_> {}
