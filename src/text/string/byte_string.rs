use std::borrow::Borrow;
use std::cmp::Ordering;
use std::ffi::CStr;
use std::fmt::{self, Debug, Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Growable;
use crate::text::utf8::{self, CharIndices, Chars, Utf8Error};
use crate::text::view::StringView;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InsertError, ReserveError};
use crate::util::result::ResultExtension;

/// The number of bytes reserved past the capacity of every allocated [`ByteString`] for its
/// terminator.
pub const TERMINATOR_LEN: usize = 1;

/// A growable string of bytes which is always followed by a zero byte once allocated.
///
/// The contents are arbitrary bytes: they may contain zeros and don't need to be valid UTF-8. The
/// terminator lives in a slot past the capacity, so `len == cap` still leaves room for it and
/// [`as_bytes_with_nul`](ByteString::as_bytes_with_nul) is always available.
///
/// Appending and inserting grow through the shared growth policy, requesting room for the new
/// length plus the terminator. As with [`Vector`](crate::collections::contiguous::Vector), each
/// growing method has a `try_` counterpart and the plain method logs failures instead.
///
/// # Examples
/// ```
/// # use mini_std::text::ByteString;
/// let mut string = ByteString::from("Testttt");
/// assert_eq!(string.cap(), 7);
///
/// string.append_cstring(b"opa\0ignored");
/// assert_eq!(string, "Testtttopa");
/// assert_eq!(string.cap(), 22);
///
/// string.shrink_to_fit();
/// assert_eq!(string.cap(), 10);
/// assert_eq!(string.as_bytes_with_nul(), b"Testtttopa\0");
/// ```
pub struct ByteString {
    buf: Growable<u8, TERMINATOR_LEN>,
}

impl ByteString {
    /// Creates a new, empty ByteString without allocating.
    pub const fn new() -> ByteString {
        ByteString {
            buf: Growable::new(),
        }
    }

    /// Creates a ByteString containing a copy of `bytes`, with capacity equal to its length. An
    /// empty slice doesn't allocate.
    ///
    /// If the allocation fails, the error is logged and an empty ByteString is returned.
    pub fn from_bytes(bytes: &[u8]) -> ByteString {
        ByteString::try_from_bytes(bytes)
            .report("failed to allocate string")
            .unwrap_or_default()
    }

    /// Creates a ByteString containing a copy of `bytes`.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the allocation fails.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<ByteString, ReserveError> {
        let mut string = ByteString::new();
        if bytes.is_empty() {
            return Ok(string);
        }

        string.buf = Growable::try_with_cap(bytes.len())?;
        // SAFETY: The buffer has exactly bytes.len() slots, which are written before being exposed.
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), string.buf.as_mut_ptr(), bytes.len());
            string.buf.set_len(bytes.len());
        }
        string.terminate();
        Ok(string)
    }

    /// Creates a ByteString of `size` zero bytes, with capacity `size`.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::text::ByteString;
    /// let string = ByteString::zeroed(4);
    /// assert_eq!(string.len(), 4);
    /// assert_eq!(string.as_bytes(), &[0; 4]);
    /// ```
    pub fn zeroed(size: usize) -> ByteString {
        ByteString::try_zeroed(size)
            .report("failed to allocate string")
            .unwrap_or_default()
    }

    /// Creates a ByteString of `size` zero bytes.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the allocation fails.
    pub fn try_zeroed(size: usize) -> Result<ByteString, ReserveError> {
        let mut string = ByteString::new();
        if size > 0 {
            string.buf = Growable::try_with_cap(size)?;
            string.try_resize(size)?;
        }
        Ok(string)
    }

    /// Returns the number of bytes in the string, excluding the terminator.
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the capacity, excluding the terminator slot.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self
    }

    /// Returns the contents followed by the terminator. An unallocated ByteString returns a static
    /// `[0]`.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.cap() == 0 {
            return &[0];
        }

        // SAFETY: An allocated buffer has cap + 1 slots and the terminator is kept at len.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len() + TERMINATOR_LEN) }
    }

    /// Returns the contents as a [`CStr`], or [`None`] if they contain a zero byte.
    pub fn to_c_str(&self) -> Option<&CStr> {
        CStr::from_bytes_with_nul(self.as_bytes_with_nul()).ok()
    }

    /// Returns a pointer to the first byte, which is always followed by a terminator.
    pub fn as_ptr(&self) -> *const u8 {
        self.as_bytes_with_nul().as_ptr()
    }

    /// Returns the byte at `index`, or 0 if the index is out of bounds. `get(len)` reads the
    /// terminator.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::text::ByteString;
    /// let string = ByteString::from("abc");
    /// assert_eq!(string.get(1), b'b');
    /// assert_eq!(string.get(3), 0);
    /// assert_eq!(string.get(100), 0);
    /// ```
    pub fn get(&self, index: usize) -> u8 {
        self.as_bytes_with_nul().get(index).copied().unwrap_or(0)
    }

    /// Returns the byte at `index` without checking bounds.
    ///
    /// # Safety
    /// `index` must be no greater than `len`.
    pub unsafe fn get_unchecked(&self, index: usize) -> u8 {
        // SAFETY: The caller guarantees that index <= len, which is within as_bytes_with_nul.
        unsafe { *self.as_bytes_with_nul().get_unchecked(index) }
    }

    /// Returns a pointer to the byte at `index`, or null if `index > len`.
    pub fn get_ptr(&self, index: usize) -> *const u8 {
        match self.as_bytes_with_nul().get(index) {
            Some(byte) => ptr::from_ref(byte),
            None => ptr::null(),
        }
    }

    pub fn front(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    pub fn back(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// Appends a nul-terminated string, copying up to the first zero byte in `bytes`, or all of
    /// `bytes` if there isn't one. Returns the ByteString to allow chaining.
    pub fn append_cstring(&mut self, bytes: &[u8]) -> &mut ByteString {
        self.try_append_cstring(bytes).report("failed to append to string");
        self
    }

    /// Appends a nul-terminated string. See [`append_cstring`](ByteString::append_cstring).
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if growing fails, leaving the ByteString unchanged.
    pub fn try_append_cstring(&mut self, bytes: &[u8]) -> Result<(), ReserveError> {
        self.try_append_bytes(&bytes[..utf8::c_str_len(bytes)])
    }

    pub fn append_c_str(&mut self, c_str: &CStr) -> &mut ByteString {
        self.append_bytes(c_str.to_bytes())
    }

    /// Appends the full contents of `other`, including any zero bytes.
    pub fn append_string(&mut self, other: &ByteString) -> &mut ByteString {
        self.append_bytes(other)
    }

    pub fn append_view(&mut self, view: StringView<'_>) -> &mut ByteString {
        self.append_bytes(view.as_bytes())
    }

    /// Appends every byte in `bytes`.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> &mut ByteString {
        self.try_append_bytes(bytes).report("failed to append to string");
        self
    }

    /// Appends every byte in `bytes`. Appending nothing never allocates.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if growing fails, leaving the ByteString unchanged.
    pub fn try_append_bytes(&mut self, bytes: &[u8]) -> Result<(), ReserveError> {
        if bytes.is_empty() {
            return Ok(());
        }

        let len = self.len();
        self.buf.try_ensure(required_for(len, bytes.len())?)?;

        // SAFETY: The capacity now exceeds len + bytes.len(). The source is a separate borrow, so
        // it can't overlap the spare capacity being written.
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), self.buf.as_mut_ptr().add(len), bytes.len());
            self.buf.set_len(len + bytes.len());
        }
        self.terminate();
        Ok(())
    }

    pub fn push(&mut self, byte: u8) {
        self.append_bytes(&[byte]);
    }

    /// Appends the UTF-8 encoding of `value`.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::text::ByteString;
    /// let mut string = ByteString::new();
    /// string.push_char('h');
    /// string.push_char('é');
    /// assert_eq!(string.as_bytes(), "hé".as_bytes());
    /// ```
    pub fn push_char(&mut self, value: char) {
        self.append_bytes(value.encode_utf8(&mut [0; 4]).as_bytes());
    }

    /// Inserts the contents of `other` at `index`, shifting the following bytes to the right.
    ///
    /// An out of bounds index, or a failure to grow, is logged and otherwise ignored.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::text::ByteString;
    /// let mut string = ByteString::from("apl");
    /// string.insert_string(&ByteString::from("ex"), 0);
    /// string.insert_string(&ByteString::from("m"), 3);
    /// string.insert_string(&ByteString::from("e"), 6);
    /// assert_eq!(string, "example");
    /// ```
    pub fn insert_string(&mut self, other: &ByteString, index: usize) {
        self.insert_bytes(other, index);
    }

    pub fn insert_bytes(&mut self, bytes: &[u8], index: usize) {
        self.try_insert_bytes(bytes, index).report("failed to insert into string");
    }

    /// Inserts `bytes` at `index`, shifting the following bytes to the right.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, before attempting to grow. Returns a capacity
    /// or allocation error if growing fails. The ByteString is unchanged in either case.
    pub fn try_insert_bytes(&mut self, bytes: &[u8], index: usize) -> Result<(), InsertError> {
        let len = self.len();
        if index > len {
            Err(IndexOutOfBounds { index, len })?
        }
        if bytes.is_empty() {
            return Ok(());
        }

        self.buf.try_ensure(required_for(len, bytes.len())?)?;

        // SAFETY: index <= len and the capacity exceeds len + bytes.len(), so both the shifted tail
        // and the gap lie within the allocation. ptr::copy allows the tail to overlap itself.
        unsafe {
            let gap = self.buf.as_mut_ptr().add(index);
            ptr::copy(gap, gap.add(bytes.len()), len - index);
            ptr::copy_nonoverlapping(bytes.as_ptr(), gap, bytes.len());
            self.buf.set_len(len + bytes.len());
        }
        self.terminate();
        Ok(())
    }

    /// Inserts a single byte at `index`. Out of bounds indices and failures to grow are logged.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::text::ByteString;
    /// let mut string = ByteString::from("es");
    /// string.insert(2, b't');
    /// string.insert(0, b'T');
    /// assert_eq!(string, "Test");
    /// ```
    pub fn insert(&mut self, index: usize, byte: u8) {
        self.try_insert(index, byte).report("failed to insert into string");
    }

    /// Inserts a single byte at `index`.
    ///
    /// # Errors
    /// See [`try_insert_bytes`](ByteString::try_insert_bytes).
    pub fn try_insert(&mut self, index: usize, byte: u8) -> Result<(), InsertError> {
        self.try_insert_bytes(&[byte], index)
    }

    /// Removes and returns the byte at `index`, moving the following bytes and the terminator to
    /// fill the gap. Returns [`None`] and leaves the string unchanged if `index >= len`.
    pub fn erase(&mut self, index: usize) -> Option<u8> {
        let len = self.len();
        if index >= len {
            return None;
        }

        // SAFETY: index < len, so the slot is initialized and the shifted range, which includes
        // the terminator, ends within the allocation.
        let byte = unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            let byte = slot.read();
            ptr::copy(slot.add(1), slot, len - index);
            self.buf.set_len(len - 1);
            byte
        };
        self.terminate();
        Some(byte)
    }

    /// Sets the length to `new_len`, zero-filling any new bytes and growing by the shared policy
    /// if required.
    pub fn resize(&mut self, new_len: usize) {
        self.try_resize(new_len).report("failed to resize string");
    }

    /// Sets the length to `new_len`, zero-filling any new bytes.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if growing fails, leaving the ByteString unchanged.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), ReserveError> {
        let len = self.len();
        // SAFETY: Bytes need no dropping, and any new bytes are zeroed before being exposed.
        unsafe {
            self.buf.try_resize(new_len)?;
            if new_len > len {
                ptr::write_bytes(self.buf.as_mut_ptr().add(len), 0, new_len - len);
            }
        }
        self.terminate();
        Ok(())
    }

    /// Removes every byte, keeping the capacity.
    pub fn clear(&mut self) {
        // SAFETY: Bytes need no dropping.
        unsafe { self.buf.set_len(0) };
        self.terminate();
    }

    /// Increases the capacity to exactly `new_cap` if it is currently smaller.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::text::ByteString;
    /// let mut string = ByteString::from("Test");
    /// string.reserve(5);
    /// assert_eq!(string.cap(), 5);
    /// string.reserve(4);
    /// assert_eq!(string.cap(), 5);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).report("failed to reserve string capacity");
    }

    /// Increases the capacity to exactly `new_cap` if it is currently smaller.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the allocation fails.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        self.buf.try_reserve(new_cap)?;
        self.terminate();
        Ok(())
    }

    /// Reduces the capacity to the length, freeing the allocation if the string is empty.
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().report("failed to shrink string");
    }

    /// Reduces the capacity to the length.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the reallocation fails.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), ReserveError> {
        self.buf.try_shrink_to_fit()?;
        self.terminate();
        Ok(())
    }

    /// Returns true if the contents are valid UTF-8.
    pub fn is_valid_utf8(&self) -> bool {
        utf8::is_valid_utf8(self)
    }

    /// Validates the contents as UTF-8.
    ///
    /// # Errors
    /// Returns a [`Utf8Error`] describing the first invalid sequence.
    pub fn validate_utf8(&self) -> Result<(), Utf8Error> {
        utf8::validate(self)
    }

    pub fn contains_bom(&self) -> bool {
        utf8::contains_bom(self)
    }

    /// See [`utf8::looks_like_utf8`].
    pub fn looks_like_utf8(&self) -> bool {
        utf8::looks_like_utf8(self)
    }

    /// Counts the code points before the first zero byte.
    pub fn codepoint_count(&self) -> usize {
        utf8::codepoint_count(self)
    }

    pub fn chars(&self) -> Chars<'_> {
        Chars::new(self)
    }

    pub fn char_indices(&self) -> CharIndices<'_> {
        CharIndices::new(self)
    }

    /// Returns the contents as a [`str`] if they are valid UTF-8.
    ///
    /// # Errors
    /// Returns a [`Utf8Error`] describing the first invalid sequence.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        self.validate_utf8()?;
        // SAFETY: The contents have just been validated against the same rules as str.
        Ok(unsafe { std::str::from_utf8_unchecked(self) })
    }

    /// Consumes and drops the ByteString, releasing its allocation.
    pub fn destroy(self) {}

    /// Writes the terminator at `len`. Called by every method that changes the length or capacity.
    fn terminate(&mut self) {
        if self.cap() > 0 {
            let len = self.len();
            // SAFETY: An allocated buffer has cap + 1 slots and len <= cap.
            unsafe { self.buf.as_mut_ptr().add(len).write(0) };
        }
    }
}

/// The capacity needed to hold `added` more bytes and the terminator.
fn required_for(len: usize, added: usize) -> Result<usize, CapacityOverflow> {
    len.checked_add(added)
        .and_then(|n| n.checked_add(TERMINATOR_LEN))
        .ok_or(CapacityOverflow)
}

impl Default for ByteString {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len bytes are always initialized. An unallocated buffer has a dangling
        // pointer and length 0.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len()) }
    }
}

impl DerefMut for ByteString {
    fn deref_mut(&mut self) -> &mut Self::Target {
        let len = self.len();
        // SAFETY: The first len bytes are always initialized, and the terminator isn't exposed.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), len) }
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        self
    }
}

impl Clone for ByteString {
    fn clone(&self) -> Self {
        ByteString::from_bytes(self)
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteString {}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for ByteString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for ByteString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl Debug for ByteString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl Display for ByteString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.chars() {
            f.write_char(value)?;
        }
        Ok(())
    }
}

impl Write for ByteString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.try_append_bytes(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl From<&[u8]> for ByteString {
    fn from(value: &[u8]) -> Self {
        ByteString::from_bytes(value)
    }
}

impl From<&str> for ByteString {
    fn from(value: &str) -> Self {
        ByteString::from_bytes(value.as_bytes())
    }
}

impl From<&CStr> for ByteString {
    fn from(value: &CStr) -> Self {
        ByteString::from_bytes(value.to_bytes())
    }
}

impl Extend<u8> for ByteString {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.push(byte);
        }
    }
}

impl<'a> Extend<&'a u8> for ByteString {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<u8> for ByteString {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut string = ByteString::new();
        string.extend(iter);
        string
    }
}
