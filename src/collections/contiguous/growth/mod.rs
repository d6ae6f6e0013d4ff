//! The growth policy shared by every growable container, along with [`Growable`], the length-aware
//! buffer which applies it.
//!
//! Growth is driven by the length being requested, not the current capacity: when `required`
//! elements don't fit, capacity becomes exactly `required * GROWTH_FACTOR`. Reserving and
//! shrinking set capacity to exactly the requested value.

mod growable;
mod tests;

pub use growable::*;

use crate::util::error::CapacityOverflow;

/// The multiplier applied to the required length whenever a container has to grow.
pub const GROWTH_FACTOR: usize = 2;

/// The capacity allocated by default when creating a new [`Vector`](super::Vector).
pub const INITIAL_CAP: usize = 1;

/// Returns the capacity that a container with capacity `cap` must grow to in order to hold
/// `required` elements, or [`None`] if it already can.
///
/// # Errors
/// Returns [`CapacityOverflow`] if the new capacity can't be represented as a [`usize`].
///
/// # Examples
/// ```
/// # use mini_std::collections::contiguous::growth::next_cap;
/// assert_eq!(next_cap(3, 4), Ok(None));
/// assert_eq!(next_cap(5, 4), Ok(Some(10)));
/// ```
pub const fn next_cap(required: usize, cap: usize) -> Result<Option<usize>, CapacityOverflow> {
    if required <= cap {
        return Ok(None);
    }

    match required.checked_mul(GROWTH_FACTOR) {
        Some(new_cap) => Ok(Some(new_cap)),
        None => Err(CapacityOverflow),
    }
}
