use derive_more::{Display, Error};

/// The reason a byte sequence was rejected as UTF-8.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Utf8ErrorKind {
    #[display("invalid lead byte")]
    InvalidLead,
    #[display("sequence truncated by the end of input")]
    Truncated,
    #[display("expected a continuation byte")]
    InvalidContinuation,
    #[display("overlong encoding")]
    Overlong,
    #[display("encoded UTF-16 surrogate")]
    Surrogate,
    #[display("code point above U+10FFFF")]
    OutOfRange,
}

/// An error describing where and why UTF-8 validation failed.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("invalid utf-8 at byte {valid_up_to}: {kind}")]
pub struct Utf8Error {
    /// The length of the prefix which was valid, which is also the index of the offending sequence.
    pub valid_up_to: usize,
    #[error(not(source))]
    pub kind: Utf8ErrorKind,
}
