//! A module containing [`RawBuffer`], the owner of every allocation made by the contiguous
//! collections.

mod raw_buffer;
mod tests;

pub use raw_buffer::*;
