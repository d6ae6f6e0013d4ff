use std::fmt::{self, Debug, Formatter};

use log::debug;

use super::next_cap;
use crate::collections::contiguous::RawBuffer;
use crate::util::error::{CapacityOverflow, ReserveError};

/// A [`RawBuffer`] paired with a logical length, applying the shared growth policy.
///
/// `TAIL` slots are allocated beyond the reported capacity whenever the buffer is allocated at all.
/// [`ByteString`](crate::text::string::ByteString) uses a single tail slot to guarantee that there
/// is always room for its terminator, even when `len == cap`.
///
/// Capacity and length are counted in elements of `stride` slots each. Typed containers use a
/// stride of 1, while [`ErasedVector`](super::super::ErasedVector) uses its runtime element size
/// over a byte buffer.
///
/// A Growable tracks how many slots are in use but never initializes, reads or drops them, that is
/// left to the container that owns it. Because of this, all methods that change the length are
/// `unsafe` or only ever expose uninitialized slots past the old length.
///
/// # Invariants
/// - `len <= cap`
/// - `cap == 0` implies that nothing is allocated.
/// - `cap > 0` implies an allocation of exactly `(cap + TAIL) * stride` slots.
/// - `stride > 0`
pub struct Growable<T, const TAIL: usize = 0> {
    pub(crate) raw: RawBuffer<T>,
    pub(crate) len: usize,
    stride: usize,
}

impl<T, const TAIL: usize> Growable<T, TAIL> {
    /// Creates a new, unallocated Growable with length and capacity 0.
    pub const fn new() -> Growable<T, TAIL> {
        Growable {
            raw: RawBuffer::new(),
            len: 0,
            stride: 1,
        }
    }

    /// Creates a new, unallocated Growable where every element occupies `stride` slots, or
    /// [`None`] if `stride` is 0.
    pub const fn with_stride(stride: usize) -> Option<Growable<T, TAIL>> {
        if stride == 0 {
            return None;
        }

        Some(Growable {
            raw: RawBuffer::new(),
            len: 0,
            stride,
        })
    }

    /// Creates a new Growable with length 0 and capacity exactly `cap`.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the allocation can't be made.
    pub fn try_with_cap(cap: usize) -> Result<Growable<T, TAIL>, ReserveError> {
        let mut buf = Growable::new();
        buf.try_set_cap(cap)?;
        Ok(buf)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity in elements, which doesn't include any `TAIL` slots.
    pub const fn cap(&self) -> usize {
        (self.raw.size / self.stride).saturating_sub(TAIL)
    }

    /// Returns the number of slots each element occupies.
    pub const fn stride(&self) -> usize {
        self.stride
    }

    pub const fn as_ptr(&self) -> *const T {
        self.raw.as_ptr()
    }

    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.as_mut_ptr()
    }

    /// Sets the logical length of the Growable.
    ///
    /// # Safety
    /// `new_len` must be no greater than the capacity, and the owning container must ensure that
    /// slots below `new_len` are initialized before they are exposed and that values beyond it have
    /// been dropped or moved out.
    pub const unsafe fn set_len(&mut self, new_len: usize) {
        self.len = new_len;
    }

    /// Ensures that the Growable can hold `required` elements without touching the length. If the
    /// current capacity is too small, the buffer is reallocated to `required * GROWTH_FACTOR`.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the new capacity overflows or can't be allocated. The
    /// Growable is left unchanged in that case.
    pub fn try_ensure(&mut self, required: usize) -> Result<(), ReserveError> {
        if let Some(new_cap) = next_cap(required, self.cap())? {
            debug!("growing buffer from {} to {} elements", self.cap(), new_cap);
            self.try_set_cap(new_cap)?;
        }
        Ok(())
    }

    /// Sets the length to `new_len`, growing by the shared policy if required. Slots between the
    /// old and new length are left uninitialized.
    ///
    /// # Safety
    /// When growing, the caller must initialize the new slots before they are read. When shrinking,
    /// the caller must have already dropped or moved the values beyond `new_len`.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if growth was required and failed. The length, capacity and
    /// contents are left unchanged in that case.
    pub unsafe fn try_resize(&mut self, new_len: usize) -> Result<(), ReserveError> {
        self.try_ensure(new_len)?;
        self.len = new_len;
        Ok(())
    }

    /// Increases the capacity to exactly `new_cap` if it is currently smaller. Never shrinks.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the allocation can't be made.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        if new_cap > self.cap() {
            self.try_set_cap(new_cap)?;
        }
        Ok(())
    }

    /// Reduces the capacity to exactly the length, freeing the allocation entirely if the length
    /// is 0.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the reallocation fails.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), ReserveError> {
        if self.cap() > self.len {
            self.try_set_cap(self.len)?;
        }
        Ok(())
    }

    /// Decomposes the Growable into its buffer and length.
    pub fn into_parts(self) -> (RawBuffer<T>, usize) {
        (self.raw, self.len)
    }

    fn try_set_cap(&mut self, cap: usize) -> Result<(), ReserveError> {
        let size = match cap {
            0 => 0,
            cap => cap
                .checked_add(TAIL)
                .and_then(|slots| slots.checked_mul(self.stride))
                .ok_or(CapacityOverflow)?,
        };
        self.raw.try_realloc(size)
    }
}

impl<T, const TAIL: usize> Default for Growable<T, TAIL> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const TAIL: usize> Debug for Growable<T, TAIL> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Growable")
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("tail", &TAIL)
            .field("stride", &self.stride)
            .finish()
    }
}
