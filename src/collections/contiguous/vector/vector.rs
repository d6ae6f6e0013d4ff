use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::growth::{Growable, INITIAL_CAP};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InsertError, ReserveError};
use crate::util::result::ResultExtension;

/// A variable size contiguous collection, built directly on top of the global allocator.
///
/// Growth follows the policy described in [`growth`](crate::collections::contiguous::growth):
/// whenever an operation needs more room than the current capacity, the Vector is reallocated to
/// twice the length required. Otherwise, the capacity is always exactly the value passed to the
/// capacity manipulation methods.
///
/// Every growing method has a `try_` counterpart which returns the error. The plain method logs the
/// error instead and leaves the Vector as it was.
///
/// Checked element access (`get`, `get_mut`, `first`, `iter`, ...) is provided through
/// [`Deref<Target = [T]>`](Deref), alongside the unchecked accessors defined here.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `erase` | `O(n-i)` |
/// | `resize` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `append` | `O(n+m)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector already has the requested capacity, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: Growable<T>,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length 0 and capacity [`INITIAL_CAP`].
    ///
    /// If the initial allocation fails, the error is logged and an unallocated Vector is returned
    /// instead, which will try to allocate again on the first push.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 1);
    /// ```
    pub fn new() -> Vector<T> {
        Vector::try_new()
            .report("failed to allocate vector")
            .unwrap_or_else(Vector::empty)
    }

    /// Creates a new Vector with length 0 and capacity [`INITIAL_CAP`].
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the initial allocation fails.
    pub fn try_new() -> Result<Vector<T>, ReserveError> {
        Vector::try_with_cap(INITIAL_CAP)
    }

    /// Creates a new Vector with length and capacity 0, without allocating.
    pub const fn empty() -> Vector<T> {
        Vector {
            buf: Growable::new(),
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation. Logs and returns an unallocated Vector if the allocation
    /// fails.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::try_with_cap(cap)
            .report("failed to allocate vector")
            .unwrap_or_else(Vector::empty)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the allocation fails.
    pub fn try_with_cap(cap: usize) -> Result<Vector<T>, ReserveError> {
        Ok(Vector {
            buf: Growable::try_with_cap(cap)?,
        })
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the current capacity of the Vector.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    pub fn as_slice(&self) -> &[T] {
        self
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// If the Vector can't grow, the error is logged, the value is dropped and the Vector is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// vec.push(1);
    /// assert_eq!(vec.cap(), 1);
    /// vec.push(2);
    /// assert_eq!(vec.cap(), 4);
    /// assert_eq!(&*vec, &[1, 2]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).report("failed to push onto vector");
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the Vector needed to grow and couldn't. The value is dropped
    /// and the Vector is left unchanged.
    pub fn try_push(&mut self, value: T) -> Result<(), ReserveError> {
        let required = self.len().checked_add(1).ok_or(CapacityOverflow)?;
        self.buf.try_ensure(required)?;

        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that `len < cap`. Using this method on a Vector without
    /// enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        let len = self.len();
        // SAFETY: The caller guarantees that the slot at len is allocated. It is uninitialized, so
        // nothing is overwritten without being dropped.
        unsafe {
            self.buf.as_mut_ptr().add(len).write(value);
            self.buf.set_len(len + 1);
        }
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0. The capacity is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            // SAFETY: The Vector isn't empty.
            Some(unsafe { self.pop_unchecked() })
        }
    }

    /// Pops the last value off the end of the Vector without checking that there is one.
    ///
    /// # Safety
    /// Calling this method on an empty Vector is undefined behavior.
    pub unsafe fn pop_unchecked(&mut self) -> T {
        let new_len = self.len() - 1;

        // SAFETY: The caller guarantees that len > 0, so new_len indexes the last initialized value.
        // Decrementing len first means that the value is moved out rather than copied.
        unsafe {
            self.buf.set_len(new_len);
            self.buf.as_ptr().add(new_len).read()
        }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Inserting at `len` is equivalent to a push.
    ///
    /// An out of bounds index, or a failure to grow, is logged and otherwise ignored.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2]);
    ///
    /// vec.insert(10, 400);
    /// assert_eq!(vec.len(), 6);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).report("failed to insert into vector");
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, before attempting to grow. Returns a capacity
    /// or allocation error if growing fails. The Vector is unchanged in either case.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError> {
        let len = self.len();
        if index > len {
            Err(IndexOutOfBounds { index, len })?
        }

        let required = len.checked_add(1).ok_or(CapacityOverflow)?;
        self.buf.try_ensure(required)?;

        // SAFETY: index <= len < cap, so the shifted range ends within the allocation. ptr::copy
        // allows the source and destination to overlap.
        unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), len - index);
            slot.write(value);
            self.buf.set_len(required);
        }
        Ok(())
    }

    /// Removes and returns the element at the provided index, moving all following values to fill
    /// in the gap. Returns [`None`] without modifying the Vector if the index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.erase(1), Some('e'));
    /// assert_eq!(vec.erase(4), Some(' '));
    /// assert_eq!(vec.erase(100), None);
    /// assert_eq!(vec, "Hlloworld!".chars().collect::<Vector<_>>());
    /// ```
    pub fn erase(&mut self, index: usize) -> Option<T> {
        if index < self.len() {
            // SAFETY: index has just been checked.
            Some(unsafe { self.erase_unchecked(index) })
        } else {
            None
        }
    }

    /// Removes and returns the element at the provided index without checking bounds.
    ///
    /// # Safety
    /// The caller must ensure that `index < len`.
    pub unsafe fn erase_unchecked(&mut self, index: usize) -> T {
        let len = self.len();

        // SAFETY: The caller guarantees index < len, so the value is initialized and the shifted
        // range lies within the initialized values.
        unsafe {
            let slot = self.buf.as_mut_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.buf.set_len(len - 1);
            value
        }
    }

    /// Returns a reference to the element at `index` without checking bounds.
    ///
    /// # Safety
    /// The caller must ensure that `index < len`.
    pub const unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that index refers to an initialized value.
        unsafe { &*self.buf.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the element at `index` without checking bounds.
    ///
    /// # Safety
    /// The caller must ensure that `index < len`.
    pub const unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees that index refers to an initialized value.
        unsafe { &mut *self.buf.as_mut_ptr().add(index) }
    }

    /// Returns a pointer to the element at `index`, or a null pointer if the index is out of
    /// bounds.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::Vector;
    /// let vec: Vector<_> = [1, 2, 3].into();
    /// assert_eq!(unsafe { *vec.get_ptr(2) }, 3);
    /// assert!(vec.get_ptr(3).is_null());
    /// ```
    pub const fn get_ptr(&self, index: usize) -> *const T {
        if index < self.len() {
            // SAFETY: index is in bounds of the allocation.
            unsafe { self.get_ptr_unchecked(index) }
        } else {
            ptr::null()
        }
    }

    /// Returns a pointer to the element at `index` without checking bounds.
    ///
    /// # Safety
    /// The caller must ensure that `index <= cap`, so that the offset stays within the allocation.
    pub const unsafe fn get_ptr_unchecked(&self, index: usize) -> *const T {
        // SAFETY: The caller guarantees that the offset is within the allocation.
        unsafe { self.buf.as_ptr().add(index) }
    }

    /// Returns a reference to the first element, or [`None`] if the Vector is empty.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns a reference to the last element, or [`None`] if the Vector is empty.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Returns a reference to the first element without checking that there is one.
    ///
    /// # Safety
    /// Calling this method on an empty Vector is undefined behavior.
    pub const unsafe fn front_unchecked(&self) -> &T {
        // SAFETY: The caller guarantees that len > 0.
        unsafe { self.get_unchecked(0) }
    }

    /// Returns a reference to the last element without checking that there is one.
    ///
    /// # Safety
    /// Calling this method on an empty Vector is undefined behavior.
    pub const unsafe fn back_unchecked(&self) -> &T {
        // SAFETY: The caller guarantees that len > 0.
        unsafe { self.get_unchecked(self.len() - 1) }
    }

    /// Resizes the Vector to `new_len`, filling new slots with values produced by `f`. Shrinking
    /// drops the trailing elements but keeps the capacity.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) {
        self.try_resize_with(new_len, f).report("failed to resize vector");
    }

    /// Resizes the Vector to `new_len`, filling new slots with values produced by `f`.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if growth was required and failed, leaving the Vector unchanged.
    pub fn try_resize_with<F: FnMut() -> T>(
        &mut self,
        new_len: usize,
        mut f: F,
    ) -> Result<(), ReserveError> {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
            return Ok(());
        }

        self.buf.try_ensure(new_len)?;
        for _ in len..new_len {
            // SAFETY: Capacity for new_len elements has just been ensured.
            unsafe { self.push_unchecked(f()) }
        }
        Ok(())
    }

    /// Shortens the Vector to `len` elements, dropping the rest. Has no effect if `len` is greater
    /// than or equal to the current length.
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len();
        if len >= old_len {
            return;
        }

        // SAFETY: Values in len..old_len are initialized. The length is updated first so that a
        // panicking destructor can't cause a double drop.
        unsafe {
            self.buf.set_len(len);
            let tail = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(len), old_len - len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops all elements, keeping the capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Increases the capacity to exactly `new_cap` if it is currently smaller. Never shrinks.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::Vector;
    /// let mut vec: Vector<u32> = Vector::new();
    /// vec.reserve(3);
    /// assert_eq!(vec.cap(), 3);
    /// vec.reserve(2);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).report("failed to reserve vector capacity");
    }

    /// Increases the capacity to exactly `new_cap` if it is currently smaller.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the allocation fails, leaving the Vector unchanged.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        self.buf.try_reserve(new_cap)
    }

    /// Shrinks the Vector so that its capacity is equal to its length. A Vector of length 0 frees
    /// its allocation.
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().report("failed to shrink vector");
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the reallocation fails, leaving the Vector unchanged.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), ReserveError> {
        self.buf.try_shrink_to_fit()
    }

    /// Moves all elements from `other` onto the end of self, leaving `other` empty.
    pub fn append(&mut self, other: &mut Vector<T>) {
        self.try_append(other).report("failed to append to vector");
    }

    /// Moves all elements from `other` onto the end of self, leaving `other` empty.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if self couldn't grow. Neither Vector is modified in that case.
    pub fn try_append(&mut self, other: &mut Vector<T>) -> Result<(), ReserveError> {
        let len = self.len();
        let count = other.len();
        let required = len.checked_add(count).ok_or(CapacityOverflow)?;
        self.buf.try_ensure(required)?;

        // SAFETY: self has room for count more values and the two allocations can't overlap.
        // Setting other's length to 0 moves ownership of the copied values over to self.
        unsafe {
            ptr::copy_nonoverlapping(other.buf.as_ptr(), self.buf.as_mut_ptr().add(len), count);
            other.buf.set_len(0);
            self.buf.set_len(required);
        }
        Ok(())
    }

    /// Drops all elements and frees the allocation. Equivalent to dropping the Vector.
    pub fn destroy(self) {
        drop(self)
    }
}

impl<T: Clone> Vector<T> {
    /// Resizes the Vector to `new_len`, filling new slots with clones of `value`.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.resize(3, 7);
    /// assert_eq!(&*vec, &[7, 7, 7]);
    /// assert_eq!(vec.cap(), 6);
    /// vec.resize(1, 0);
    /// assert_eq!(&*vec, &[7]);
    /// assert_eq!(vec.cap(), 6);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.try_resize(new_len, value).report("failed to resize vector");
    }

    /// Resizes the Vector to `new_len`, filling new slots with clones of `value`.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if growth was required and failed, leaving the Vector unchanged.
    pub fn try_resize(&mut self, new_len: usize, value: T) -> Result<(), ReserveError> {
        self.try_resize_with(new_len, || value.clone())
    }
}

impl<T: Copy + Default> Vector<T> {
    /// Returns a copy of the element at `index`, or `T::default()` if the index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::Vector;
    /// let vec: Vector<i32> = [4, 5].into();
    /// assert_eq!(vec.get_or_default(1), 5);
    /// assert_eq!(vec.get_or_default(2), 0);
    /// ```
    pub fn get_or_default(&self, index: usize) -> T {
        self.get(index).copied().unwrap_or_default()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // The allocation itself is freed when buf's RawBuffer is dropped.
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The pointer is non-null and aligned, and the first len values are initialized.
        // The borrow checker prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len()) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        let len = self.len();
        // SAFETY: As with deref, and the &mut self guarantees unique access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        **self == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        **self == *other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &self.as_slice())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
