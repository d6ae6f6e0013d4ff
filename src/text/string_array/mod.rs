//! A module containing [`StringArray`], an owning collection of [`ByteString`](crate::text::ByteString)s.

mod string_array;

pub use string_array::*;
