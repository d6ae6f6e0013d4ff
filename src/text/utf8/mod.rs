//! Decoding and validation of UTF-8 byte sequences.
//!
//! Every function here works on plain byte slices, never panics and never allocates. Validation
//! follows the rules of RFC 3629: overlong encodings, UTF-16 surrogate halves and code points above
//! `U+10FFFF` are all rejected.
//!
//! Decoding, on the other hand, trusts its input. [`decode`] masks and shifts whatever bytes it
//! finds, so it should only be used on data that has already been validated.

mod codec;
mod error;
mod iter;

pub use codec::*;
pub use error::*;
pub use iter::*;
