use std::iter::FusedIterator;
use std::mem;
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::RawBuffer;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Leave an empty buffer behind, so that dropping self is a no-op.
        let (buf, len) = mem::take(&mut self.buf).into_parts();
        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// Values that haven't been yielded are dropped along with the iterator, which also frees the
/// allocation.
pub struct IntoIter<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the values that are yet to be yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Values in start..end are initialized and haven't been moved out.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The value at start is initialized. Incrementing start afterwards means that
            // the value is effectively moved off of the heap.
            let value = unsafe { self.buf.as_ptr().add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end has just been decremented and still refers to an initialized value.
            Some(unsafe { self.buf.as_ptr().add(self.end).read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Only the values in start..end are still initialized. The RawBuffer frees the
        // allocation once it is dropped after this.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().add(self.start),
                self.end - self.start,
            ));
        }
    }
}
