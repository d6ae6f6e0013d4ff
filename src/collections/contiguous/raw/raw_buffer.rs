use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::{AllocError, CapacityOverflow, ReserveError};

/// An owned, uninitialized allocation with room for exactly `size` values of `T`.
///
/// A RawBuffer never reads, writes or drops the values it has room for, it only manages the memory.
/// Keeping track of which slots are initialized is the responsibility of the owning collection.
///
/// A buffer with size zero, or one for a zero-sized `T`, holds a dangling pointer and no
/// allocation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The size of the RawBuffer.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `try_realloc` | `O(n)`*, `O(1)` |
///
/// \* The allocator may be able to resize in place, in which case no values are copied.
pub struct RawBuffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    /// Creates a new RawBuffer with size 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::RawBuffer;
    /// let buf: RawBuffer<u32> = RawBuffer::new();
    /// assert_eq!(buf.size(), 0);
    /// ```
    pub const fn new() -> RawBuffer<T> {
        RawBuffer {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new RawBuffer with room for exactly `size` values.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the memory layout would exceed [`isize::MAX`] bytes and
    /// [`AllocError`] if the allocator can't provide the memory.
    ///
    /// # Examples
    /// ```
    /// # use mini_std::collections::contiguous::RawBuffer;
    /// let buf = RawBuffer::<u16>::try_with_size(4).unwrap();
    /// assert_eq!(buf.size(), 4);
    /// ```
    pub fn try_with_size(size: usize) -> Result<RawBuffer<T>, ReserveError> {
        let mut buf = RawBuffer::new();
        buf.try_realloc(size)?;
        Ok(buf)
    }

    /// Returns the number of values that the RawBuffer has room for.
    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr().cast_const()
    }

    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns true if the RawBuffer currently owns memory in the global allocator.
    pub const fn is_allocated(&self) -> bool {
        size_of::<T>() != 0 && self.size != 0
    }

    /// Reallocates the RawBuffer so that it has room for exactly `new_size` values. Values within
    /// `0..min(size, new_size)` are preserved, new slots are uninitialized.
    ///
    /// On failure the RawBuffer is left exactly as it was: same pointer, same size, same contents.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the memory layout would exceed [`isize::MAX`] bytes and
    /// [`AllocError`] if the allocator can't provide the memory.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), ReserveError> {
        let new_ptr = match (self.size, new_size) {
            _ if size_of::<T>() == 0 => {
                // Zero-sized values never need memory, only the size changes.
                self.ptr
            },
            (old, new) if old == new => return Ok(()),
            (0, _) => {
                let layout = Self::make_layout(new_size)?;

                // SAFETY: The layout has non-zero size, because both a zero size and zero-sized
                // types are guarded against.
                let raw_ptr: *mut T = unsafe { alloc::alloc(layout).cast() };

                NonNull::new(raw_ptr).ok_or(AllocError {
                    size: layout.size(),
                })?
            },
            (_, 0) => {
                // SAFETY: The RawBuffer is allocated with non-zero size, using this same layout.
                unsafe { self.dealloc() };
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.size)?;
                let new_layout = Self::make_layout(new_size)?;

                // SAFETY: ptr was allocated in the global allocator with old_layout, and the new
                // size is non-zero and doesn't exceed isize::MAX when rounded to the alignment.
                let raw_ptr: *mut T = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                // A null return from realloc leaves the old allocation untouched.
                NonNull::new(raw_ptr).ok_or(AllocError {
                    size: new_layout.size(),
                })?
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }

    /// A helper function to create a [`Layout`] for `size` values of type `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout's size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// Frees the allocation without updating `ptr` or `size`.
    ///
    /// # Safety
    /// The RawBuffer must be allocated, and the caller must replace `ptr` and `size` before the
    /// RawBuffer is used or dropped again.
    unsafe fn dealloc(&mut self) {
        // An allocated RawBuffer was created with this layout, so it can't overflow.
        if let Ok(layout) = Self::make_layout(self.size) {
            // SAFETY: ptr is allocated in the global allocator with the same layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.is_allocated() {
            // SAFETY: The RawBuffer is allocated and won't be used again.
            unsafe { self.dealloc() }
        }
    }
}

impl<T> Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("ptr", &self.ptr)
            .field("size", &self.size)
            .finish()
    }
}

// SAFETY: A RawBuffer uniquely owns its allocation, so it is safe to Send when T: Send.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: RawBuffer has no interior mutability, all mutation requires a &mut.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}
