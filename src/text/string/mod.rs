//! A module containing [`ByteString`], a growable byte-string which is always nul-terminated.

mod byte_string;
mod tests;

pub use byte_string::*;
