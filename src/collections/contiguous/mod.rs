//! Collections which store their elements in a single contiguous allocation.
//!
//! [`RawBuffer`] owns the allocation itself, [`Growable`] layers the shared growth policy on top of
//! it and [`Vector`] is the safe, typed container built from both. [`ErasedVector`] follows the
//! same policy for elements whose size is only known at runtime.

#[cfg(feature = "erased")]
pub mod erased;
pub mod growth;
pub mod raw;
pub mod vector;

#[cfg(feature = "erased")]
#[doc(inline)]
pub use erased::ErasedVector;
#[doc(inline)]
pub use growth::{GROWTH_FACTOR, Growable, INITIAL_CAP};
#[doc(inline)]
pub use raw::RawBuffer;
#[doc(inline)]
pub use vector::Vector;
