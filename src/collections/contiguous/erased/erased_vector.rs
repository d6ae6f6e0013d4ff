use std::fmt::{self, Debug, Formatter};
use std::ptr;
use std::slice::{self, ChunksExact};

use super::{ElementSizeError, ErasedPushError, ZeroElementSizeError};
use crate::collections::contiguous::growth::{Growable, INITIAL_CAP};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, ReserveError};
use crate::util::result::ResultExtension;

/// A growable array of fixed-size elements, where the element size is only known at runtime.
///
/// Elements are opaque runs of exactly [`element_size`](ErasedVector::element_size) bytes, with no
/// alignment guarantees. This is the shape of array that is handed across an FFI boundary or used
/// for heterogeneous records, when [`Vector<T>`](super::super::Vector) can't be named.
///
/// Capacity is counted in elements and follows the same growth policy as every other container in
/// this crate, through a [`Growable`] whose stride is the element size.
pub struct ErasedVector {
    buf: Growable<u8>,
}

impl ErasedVector {
    /// Creates a new ErasedVector for elements of `element_size` bytes, with capacity
    /// [`INITIAL_CAP`]. If the initial allocation fails, the error is logged and an unallocated
    /// ErasedVector is returned.
    ///
    /// # Errors
    /// Returns [`ZeroElementSizeError`] if `element_size` is 0.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::ErasedVector;
    /// assert!(ErasedVector::new(0).is_err());
    ///
    /// let vec = ErasedVector::new(4).unwrap();
    /// assert_eq!(vec.element_size(), 4);
    /// assert_eq!(vec.cap(), 1);
    /// ```
    pub fn new(element_size: usize) -> Result<ErasedVector, ZeroElementSizeError> {
        let mut vec = ErasedVector {
            buf: Growable::with_stride(element_size).ok_or(ZeroElementSizeError)?,
        };
        vec.buf.try_reserve(INITIAL_CAP).report("failed to allocate erased vector");
        Ok(vec)
    }

    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the capacity, in elements.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    pub const fn element_size(&self) -> usize {
        self.buf.stride()
    }

    /// Returns every element as one contiguous byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: The first len * element_size bytes are initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len() * self.element_size()) }
    }

    /// Returns an iterator over the elements, each as a slice of `element_size` bytes.
    pub fn iter(&self) -> ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.element_size())
    }

    /// Copies `element` onto the end of the ErasedVector. Errors are logged and otherwise ignored.
    pub fn push(&mut self, element: &[u8]) {
        self.try_push(element).report("failed to push onto erased vector");
    }

    /// Copies `element` onto the end of the ErasedVector, growing if required.
    ///
    /// # Errors
    /// Returns [`ElementSizeError`] if `element` isn't exactly `element_size` bytes long, or a
    /// capacity or allocation error if growing fails.
    pub fn try_push(&mut self, element: &[u8]) -> Result<(), ErasedPushError> {
        self.check_size(element.len())?;
        let len = self.len();
        self.try_grow_by_one()?;

        // SAFETY: There is room for one more element and element can't overlap with our buffer,
        // because we hold a unique borrow of it.
        unsafe {
            ptr::copy_nonoverlapping(element.as_ptr(), self.slot_mut(len), element.len());
        }
        Ok(())
    }

    /// Copies a `T` onto the end of the ErasedVector, growing if required.
    ///
    /// # Errors
    /// Returns [`ElementSizeError`] if `size_of::<T>()` differs from `element_size`, or a capacity
    /// or allocation error if growing fails.
    pub fn push_value<T: Copy>(&mut self, value: T) -> Result<(), ErasedPushError> {
        self.check_size(size_of::<T>())?;
        let len = self.len();
        self.try_grow_by_one()?;

        // SAFETY: The new last element has room for exactly size_of::<T>() bytes. Elements aren't
        // aligned, so the write must be unaligned.
        unsafe { self.slot_mut(len).cast::<T>().write_unaligned(value) };
        Ok(())
    }

    /// Removes the last element. The returned bytes stay valid until the next mutation.
    pub fn pop(&mut self) -> Option<&[u8]> {
        let last = self.len().checked_sub(1)?;
        let size = self.element_size();
        // SAFETY: last < len. The slot stays allocated and initialized, it is only considered free
        // from now on.
        unsafe {
            self.buf.set_len(last);
            Some(slice::from_raw_parts(self.buf.as_ptr().add(last * size), size))
        }
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index < self.len() {
            // SAFETY: index has just been checked.
            Some(unsafe { self.get_unchecked(index) })
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index < self.len() {
            let size = self.element_size();
            // SAFETY: index has just been checked and &mut self guarantees unique access.
            Some(unsafe { slice::from_raw_parts_mut(self.slot_mut(index), size) })
        } else {
            None
        }
    }

    /// Returns the bytes of the element at `index` without checking bounds.
    ///
    /// # Safety
    /// The caller must ensure that `index < len`.
    pub unsafe fn get_unchecked(&self, index: usize) -> &[u8] {
        // SAFETY: The caller guarantees that the element is initialized.
        unsafe {
            let size = self.element_size();
            slice::from_raw_parts(self.buf.as_ptr().add(index * size), size)
        }
    }

    /// Returns a pointer to the first byte of the element at `index`, or a null pointer if the
    /// index is out of bounds.
    pub fn get_ptr(&self, index: usize) -> *const u8 {
        self.get(index).map_or(ptr::null(), <[u8]>::as_ptr)
    }

    /// Reads the element at `index` as a `T`.
    ///
    /// Returns [`None`] if the index is out of bounds or `size_of::<T>()` differs from
    /// `element_size`.
    ///
    /// # Safety
    /// The bytes of the element must be a valid `T`, which is always true for elements that were
    /// added with [`push_value::<T>`](ErasedVector::push_value).
    pub unsafe fn get_value<T: Copy>(&self, index: usize) -> Option<T> {
        if size_of::<T>() != self.element_size() {
            return None;
        }
        // SAFETY: The element is exactly size_of::<T>() bytes and the caller guarantees that they
        // are a valid T. Elements aren't aligned, so the read must be unaligned.
        self.get(index).map(|bytes| unsafe { bytes.as_ptr().cast::<T>().read_unaligned() })
    }

    pub fn front(&self) -> Option<&[u8]> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&[u8]> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Inserts a copy of `element` at `index`. Errors are logged and otherwise ignored.
    pub fn insert(&mut self, index: usize, element: &[u8]) {
        self.try_insert(index, element).report("failed to insert into erased vector");
    }

    /// Inserts a copy of `element` at `index`, shifting all following elements up by one.
    ///
    /// # Errors
    /// Returns [`ElementSizeError`] for a badly sized element and [`IndexOutOfBounds`] if
    /// `index > len`, both before attempting to grow. Returns a capacity or allocation error if
    /// growing fails.
    pub fn try_insert(&mut self, index: usize, element: &[u8]) -> Result<(), ErasedPushError> {
        self.check_size(element.len())?;
        let len = self.len();
        if index > len {
            Err(IndexOutOfBounds { index, len })?
        }
        self.try_grow_by_one()?;

        let size = self.element_size();
        // SAFETY: There is room for the shifted elements, and ptr::copy handles the overlap between
        // the old and shifted ranges.
        unsafe {
            let slot = self.slot_mut(index);
            ptr::copy(slot, slot.add(size), (len - index) * size);
            ptr::copy_nonoverlapping(element.as_ptr(), slot, size);
        }
        Ok(())
    }

    /// Removes the element at `index`, shifting all following elements down by one. Returns false
    /// without modifying anything if the index is out of bounds.
    pub fn erase(&mut self, index: usize) -> bool {
        let len = self.len();
        if index >= len {
            return false;
        }

        let size = self.element_size();
        // SAFETY: index < len, so every byte in the shifted range is initialized, and the bytes
        // left past the new length are plain data.
        unsafe {
            let slot = self.slot_mut(index);
            ptr::copy(slot.add(size), slot, (len - index - 1) * size);
            self.buf.set_len(len - 1);
        }
        true
    }

    /// Resizes the ErasedVector to `new_len` elements, zero-filling any new ones.
    pub fn resize(&mut self, new_len: usize) {
        self.try_resize(new_len).report("failed to resize erased vector");
    }

    /// Resizes the ErasedVector to `new_len` elements, zero-filling any new ones.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if growing fails, leaving the ErasedVector unchanged.
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), ReserveError> {
        let len = self.len();
        // SAFETY: New elements are zeroed below before they can be read, and bytes past a shorter
        // length are plain data.
        unsafe { self.buf.try_resize(new_len)? };
        if new_len > len {
            // SAFETY: There is room for new_len elements.
            unsafe {
                ptr::write_bytes(self.slot_mut(len), 0, (new_len - len) * self.element_size());
            }
        }
        Ok(())
    }

    /// Increases the capacity to exactly `new_cap` elements if it is currently smaller.
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).report("failed to reserve erased vector capacity");
    }

    /// Increases the capacity to exactly `new_cap` elements if it is currently smaller.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the allocation fails.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        self.buf.try_reserve(new_cap)
    }

    /// Shrinks the capacity to exactly the length.
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().report("failed to shrink erased vector");
    }

    /// Shrinks the capacity to exactly the length.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the reallocation fails.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), ReserveError> {
        self.buf.try_shrink_to_fit()
    }

    /// Frees the allocation. Equivalent to dropping the ErasedVector.
    pub fn destroy(self) {
        drop(self)
    }

    fn check_size(&self, found: usize) -> Result<(), ElementSizeError> {
        if found == self.element_size() {
            Ok(())
        } else {
            Err(ElementSizeError {
                expected: self.element_size(),
                found,
            })
        }
    }

    /// Extends the length by one element, growing if required. The new element is uninitialized
    /// and must be written before anything reads it.
    fn try_grow_by_one(&mut self) -> Result<(), ReserveError> {
        let new_len = self.len().checked_add(1).ok_or(CapacityOverflow)?;
        // SAFETY: Every caller writes the new element before returning.
        unsafe { self.buf.try_resize(new_len) }
    }

    /// # Safety
    /// `index` must be no greater than the capacity.
    unsafe fn slot_mut(&mut self, index: usize) -> *mut u8 {
        let offset = index * self.element_size();
        // SAFETY: The caller guarantees that the offset stays within the allocation.
        unsafe { self.buf.as_mut_ptr().add(offset) }
    }
}

impl Debug for ErasedVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedVector")
            .field("contents", &self.as_bytes())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("element_size", &self.element_size())
            .finish()
    }
}
