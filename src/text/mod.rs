//! Byte-strings, UTF-8 handling and string views.
//!
//! Strings here are byte buffers first: [`ByteString`] stores whatever bytes it is given and keeps
//! them nul-terminated, while [`utf8`] answers questions about those bytes without ever requiring
//! them to be valid. Conversion to [`str`] only happens on request.

pub mod string;
pub mod string_array;
pub mod utf8;
pub mod view;

#[doc(inline)]
pub use string::ByteString;
#[doc(inline)]
pub use string_array::StringArray;
#[doc(inline)]
pub use view::StringView;
