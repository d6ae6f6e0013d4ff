#![cfg(test)]

use super::*;

#[test]
fn test_zero_element_size() {
    assert_eq!(ErasedVector::new(0).unwrap_err(), ZeroElementSizeError);
}

#[test]
fn test_push_pop_bytes() {
    let mut vec = ErasedVector::new(2).unwrap();
    vec.push(&[1, 2]);
    vec.push(&[3, 4]);
    assert_eq!(vec.len(), 2);
    assert_eq!(vec.cap(), 4, "Erased vectors should follow the shared growth policy.");

    assert_eq!(vec.get(1), Some(&[3, 4][..]));
    assert_eq!(vec.front(), Some(&[1, 2][..]));
    assert_eq!(vec.back(), Some(&[3, 4][..]));
    assert_eq!(vec.pop(), Some(&[3, 4][..]));
    assert_eq!(vec.len(), 1);
    assert_eq!(vec.pop(), Some(&[1, 2][..]));
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.back(), None);
}

#[test]
fn test_element_size_mismatch() {
    let mut vec = ErasedVector::new(4).unwrap();
    let result = vec.try_push(&[1, 2, 3]);
    assert_eq!(
        result,
        Err(ErasedPushError::ElementSize(ElementSizeError { expected: 4, found: 3 }))
    );
    vec.push(&[1]);
    assert!(vec.is_empty(), "A badly sized element should be ignored.");

    assert!(vec.push_value(7_u16).unwrap_err().is_element_size());
}

#[test]
fn test_typed_values() {
    let mut vec = ErasedVector::new(size_of::<u32>()).unwrap();
    for i in 0..5_u32 {
        vec.push_value(i * 1000).unwrap();
    }

    // SAFETY: Every element was pushed as a u32.
    unsafe {
        assert_eq!(vec.get_value::<u32>(3), Some(3000));
        assert_eq!(vec.get_value::<u32>(5), None);
        assert_eq!(vec.get_value::<u16>(0), None, "Reading with the wrong size should fail.");
    }
}

#[test]
fn test_insert_erase() {
    let mut vec = ErasedVector::new(1).unwrap();
    for byte in b"helo" {
        vec.push(&[*byte]);
    }

    vec.insert(3, b"l");
    assert_eq!(vec.as_bytes(), b"hello");

    vec.insert(9, b"!");
    assert_eq!(vec.len(), 5, "Inserting past the end should be ignored.");
    assert!(vec.try_insert(9, b"!").unwrap_err().is_index_out_of_bounds());

    assert!(vec.erase(0));
    assert!(!vec.erase(4));
    assert_eq!(vec.as_bytes(), b"ello");
    assert_eq!(vec.iter().count(), 4);
}

#[test]
fn test_capacity() {
    let mut vec = ErasedVector::new(8).unwrap();
    vec.reserve(3);
    assert_eq!(vec.cap(), 3);

    vec.resize(2);
    assert_eq!(vec.get(1), Some(&[0; 8][..]), "Resizing should zero-fill new elements.");
    assert!(vec.get_ptr(2).is_null());

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 2);

    assert!(vec.try_reserve(usize::MAX).is_err());
    assert_eq!(vec.cap(), 2);
}

#[test]
fn test_growth_matches_vector() {
    let mut erased = ErasedVector::new(3).unwrap();
    let mut typed = crate::collections::contiguous::Vector::<[u8; 3]>::new();

    for len in [2, 5, 3, 11] {
        erased.resize(len);
        typed.resize(len, [0; 3]);
        assert_eq!(erased.cap(), typed.cap(), "Both should grow by the same rule.");
    }
    assert_eq!(erased.cap(), 22);
    assert_eq!(erased.as_bytes().len(), 33);
}
