//! General-purpose collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! provides iteration, searching and sorting without reimplementing them.

#[cfg(feature = "contiguous")]
pub mod contiguous;
