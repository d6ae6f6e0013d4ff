#![cfg(test)]

use super::*;
use crate::util::alloc::ZeroSizedType;
use crate::util::error::ReserveError;

#[test]
fn test_new_is_unallocated() {
    let buf = RawBuffer::<u64>::new();
    assert_eq!(buf.size(), 0);
    assert!(!buf.is_allocated(), "An empty RawBuffer shouldn't own memory.");
}

#[test]
fn test_realloc_preserves_contents() {
    let mut buf = RawBuffer::<usize>::try_with_size(4).unwrap();
    assert!(buf.is_allocated());

    for i in 0..4 {
        // SAFETY: i is within the size of the buffer.
        unsafe { buf.as_mut_ptr().add(i).write(i * 10) };
    }

    buf.try_realloc(16).unwrap();
    assert_eq!(buf.size(), 16);
    for i in 0..4 {
        // SAFETY: The first four slots were initialized before growing.
        assert_eq!(
            unsafe { buf.as_ptr().add(i).read() }, i * 10,
            "Growing should keep existing values."
        );
    }

    buf.try_realloc(2).unwrap();
    assert_eq!(buf.size(), 2);
    // SAFETY: Slot 1 is within the new size and was initialized.
    assert_eq!(unsafe { buf.as_ptr().add(1).read() }, 10, "Shrinking should keep the prefix.");
}

#[test]
fn test_realloc_to_zero_frees() {
    let mut buf = RawBuffer::<u8>::try_with_size(8).unwrap();
    buf.try_realloc(0).unwrap();
    assert_eq!(buf.size(), 0);
    assert!(!buf.is_allocated());

    buf.try_realloc(3).unwrap();
    assert!(buf.is_allocated(), "A freed buffer should be able to allocate again.");
}

#[test]
fn test_same_size_keeps_pointer() {
    let mut buf = RawBuffer::<u32>::try_with_size(5).unwrap();
    let old_ptr = buf.as_ptr();
    buf.try_realloc(5).unwrap();
    assert_eq!(buf.as_ptr(), old_ptr, "Reallocating to the same size should be a no-op.");
}

#[test]
fn test_zst_support() {
    let mut buf = RawBuffer::<ZeroSizedType>::new();
    let old_ptr = buf.as_ptr();
    buf.try_realloc(30).unwrap();
    assert_eq!(buf.size(), 30);
    assert_eq!(buf.as_ptr(), old_ptr, "Zero-sized types should never allocate.");
    assert!(!buf.is_allocated());
}

#[test]
fn test_capacity_overflow() {
    let mut buf = RawBuffer::<u64>::try_with_size(2).unwrap();
    let old_ptr = buf.as_ptr();

    let result = buf.try_realloc(usize::MAX);
    assert!(matches!(result, Err(ReserveError::CapacityOverflow(_))));
    assert_eq!(buf.size(), 2, "A failed realloc should leave the size untouched.");
    assert_eq!(buf.as_ptr(), old_ptr, "A failed realloc should leave the pointer untouched.");
}

#[test]
fn test_alloc_failure() {
    let mut buf = RawBuffer::<u8>::try_with_size(2).unwrap();

    let result = buf.try_realloc(isize::MAX as usize);
    assert!(
        matches!(result, Err(ReserveError::Alloc(_))),
        "The allocator can't provide isize::MAX bytes."
    );
    assert_eq!(buf.size(), 2);
}
