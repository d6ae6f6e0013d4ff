#![cfg(test)]

use quickcheck_macros::quickcheck;

use super::*;

#[test]
fn test_next_cap() {
    assert_eq!(next_cap(0, 0), Ok(None));
    assert_eq!(next_cap(1, 0), Ok(Some(2)));
    assert_eq!(next_cap(2, 1), Ok(Some(4)));
    assert_eq!(next_cap(4, 4), Ok(None), "Exactly full shouldn't grow.");
    assert_eq!(next_cap(usize::MAX, 0), Err(CapacityOverflow));
}

#[test]
fn test_growth_uses_required_len() {
    let mut buf = Growable::<u32>::try_with_cap(1).unwrap();
    // SAFETY: u32 values are never read from the buffer in this test.
    unsafe {
        buf.try_resize(1).unwrap();
        assert_eq!(buf.cap(), 1, "Filling the initial capacity shouldn't grow.");

        buf.try_resize(2).unwrap();
        assert_eq!(buf.cap(), 4);

        buf.try_resize(5).unwrap();
        assert_eq!(buf.cap(), 10);

        buf.try_resize(3).unwrap();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.cap(), 10, "Shrinking the length should keep the capacity.");
    }
}

#[test]
fn test_reserve_is_exact_and_never_shrinks() {
    let mut buf = Growable::<u8>::new();
    buf.try_reserve(3).unwrap();
    assert_eq!(buf.cap(), 3);

    buf.try_reserve(2).unwrap();
    assert_eq!(buf.cap(), 3, "Reserving less than the capacity should be a no-op.");
}

#[test]
fn test_shrink_to_fit() {
    let mut buf = Growable::<u16>::try_with_cap(8).unwrap();
    // SAFETY: Values are never read from the buffer in this test.
    unsafe { buf.set_len(3) };

    buf.try_shrink_to_fit().unwrap();
    assert_eq!(buf.cap(), 3);
    buf.try_shrink_to_fit().unwrap();
    assert_eq!(buf.cap(), 3, "Shrinking twice should be idempotent.");

    // SAFETY: As above.
    unsafe { buf.set_len(0) };
    buf.try_shrink_to_fit().unwrap();
    assert_eq!(buf.cap(), 0);
    assert!(!buf.raw.is_allocated(), "An empty shrunk buffer shouldn't hold memory.");
}

#[test]
fn test_tail_is_hidden_from_cap() {
    let mut buf = Growable::<u8, 1>::try_with_cap(4).unwrap();
    assert_eq!(buf.cap(), 4);
    assert_eq!(buf.raw.size(), 5, "The tail slot should be allocated beyond the capacity.");

    // SAFETY: Values are never read from the buffer in this test.
    unsafe { buf.try_resize(5).unwrap() };
    assert_eq!(buf.cap(), 10);
    assert_eq!(buf.raw.size(), 11);

    let empty = Growable::<u8, 1>::new();
    assert_eq!(empty.cap(), 0);
    assert_eq!(empty.raw.size(), 0, "An empty buffer shouldn't allocate a tail.");
}

#[test]
fn test_stride_scales_slots() {
    assert!(Growable::<u8>::with_stride(0).is_none());

    let mut buf = Growable::<u8>::with_stride(3).unwrap();
    assert_eq!(buf.stride(), 3);
    assert_eq!(buf.cap(), 0);

    // SAFETY: Values are never read from the buffer in this test.
    unsafe { buf.try_resize(2).unwrap() };
    assert_eq!(buf.cap(), 4, "Growth should be counted in elements, not slots.");
    assert_eq!(buf.raw.size(), 12);

    buf.try_reserve(5).unwrap();
    assert_eq!(buf.raw.size(), 15);
    buf.try_shrink_to_fit().unwrap();
    assert_eq!(buf.cap(), 2);
    assert_eq!(buf.raw.size(), 6);

    let mut tailed = Growable::<u8, 1>::with_stride(2).unwrap();
    assert_eq!(tailed.cap(), 0);
    tailed.try_reserve(3).unwrap();
    assert_eq!(tailed.cap(), 3);
    assert_eq!(tailed.raw.size(), 8, "The tail should be a whole element.");

    let mut huge = Growable::<u8>::with_stride(usize::MAX / 2).unwrap();
    assert!(huge.try_reserve(3).is_err());
    assert_eq!(huge.cap(), 0);
}

#[test]
fn test_failed_growth_leaves_state() {
    let mut buf = Growable::<u8>::try_with_cap(2).unwrap();
    // SAFETY: Values are never read from the buffer in this test.
    unsafe { buf.set_len(2) };
    let old_ptr = buf.as_ptr();

    // SAFETY: As above.
    let result = unsafe { buf.try_resize(isize::MAX as usize / 2) };
    assert!(result.is_err());
    assert_eq!(buf.len(), 2);
    assert_eq!(buf.cap(), 2);
    assert_eq!(buf.as_ptr(), old_ptr);
}

#[quickcheck]
fn cap_is_twice_the_required_len_after_growth(lens: Vec<u16>) -> bool {
    let mut buf = Growable::<u8>::new();

    lens.into_iter().all(|len| {
        let len = len as usize;
        let old_cap = buf.cap();
        // SAFETY: Values are never read from the buffer in this test.
        unsafe { buf.try_resize(len).unwrap() };

        let grew_correctly = if len > old_cap { buf.cap() == len * 2 } else { buf.cap() == old_cap };
        grew_correctly && buf.len() <= buf.cap()
    })
}
