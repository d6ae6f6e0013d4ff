use super::{Utf8Error, Utf8ErrorKind};

/// The byte order mark which may prefix UTF-8 text.
pub const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// The largest valid Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Returns the length of the sequence introduced by `first_byte`, or 0 if it can't start one.
///
/// # Examples
/// ```
/// # use mini_std::text::utf8;
/// assert_eq!(utf8::char_length(b'a'), 1);
/// assert_eq!(utf8::char_length(0xC3), 2);
/// assert_eq!(utf8::char_length(0xE2), 3);
/// assert_eq!(utf8::char_length(0xF0), 4);
/// assert_eq!(utf8::char_length(0x80), 0);
/// ```
pub const fn char_length(first_byte: u8) -> u8 {
    match first_byte {
        0x00..=0x7F => 1,
        b if b & 0xE0 == 0xC0 => 2,
        b if b & 0xF0 == 0xE0 => 3,
        b if b & 0xF8 == 0xF0 => 4,
        _ => 0,
    }
}

/// Returns true for bytes of the form `10xxxxxx`.
pub const fn is_continuation_byte(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

pub const fn is_ascii(byte: u8) -> bool {
    byte <= 0x7F
}

/// Returns true if `bytes` is entirely valid UTF-8. See [`validate`].
pub fn is_valid_utf8(bytes: &[u8]) -> bool {
    validate(bytes).is_ok()
}

/// Validates `bytes` as UTF-8, stopping at the first violation.
///
/// Sequences are checked in order for truncation, missing continuation bytes, overlong encodings
/// (`C0`/`C1` leads, `E0` followed by less than `A0`, `F0` followed by less than `90`), surrogates
/// (`ED` followed by `A0..=BF`) and code points above `U+10FFFF` (leads above `F4`, or `F4`
/// followed by more than `8F`).
///
/// # Errors
/// Returns a [`Utf8Error`] containing the offset and kind of the first invalid sequence.
///
/// # Examples
/// ```
/// # use mini_std::text::utf8::{self, Utf8ErrorKind};
/// assert!(utf8::validate("héllo".as_bytes()).is_ok());
///
/// let error = utf8::validate(b"ab\xED\xA0\x80").unwrap_err();
/// assert_eq!(error.valid_up_to, 2);
/// assert_eq!(error.kind, Utf8ErrorKind::Surrogate);
/// ```
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    let mut index = 0;

    while index < bytes.len() {
        let lead = bytes[index];
        let len = char_length(lead) as usize;
        let fail = move |kind| Utf8Error {
            valid_up_to: index,
            kind,
        };

        match len {
            0 => return Err(fail(Utf8ErrorKind::InvalidLead)),
            1 => {
                index += 1;
                continue;
            },
            _ => {},
        }

        let Some(sequence) = bytes.get(index..index + len) else {
            return Err(fail(Utf8ErrorKind::Truncated));
        };
        if !sequence[1..].iter().all(|byte| is_continuation_byte(*byte)) {
            return Err(fail(Utf8ErrorKind::InvalidContinuation));
        }

        let kind = match (lead, sequence[1]) {
            (0xC0 | 0xC1, _) | (0xE0, 0x80..=0x9F) | (0xF0, 0x80..=0x8F) => Utf8ErrorKind::Overlong,
            (0xED, 0xA0..=0xBF) => Utf8ErrorKind::Surrogate,
            (0xF5..=0xFF, _) | (0xF4, 0x90..=0xBF) => Utf8ErrorKind::OutOfRange,
            _ => {
                index += len;
                continue;
            },
        };
        return Err(fail(kind));
    }

    Ok(())
}

/// Decodes the sequence starting at `bytes[0]` into a code point, by masking the lead byte
/// according to the sequence length and appending six bits from each continuation byte.
///
/// No validation is performed. An invalid lead byte or empty input decodes to 0, and continuation
/// bytes missing from the end of `bytes` are read as zero.
///
/// # Examples
/// ```
/// # use mini_std::text::utf8;
/// assert_eq!(utf8::decode(b"A"), 0x41);
/// assert_eq!(utf8::decode("é".as_bytes()), 0xE9);
/// assert_eq!(utf8::decode("€".as_bytes()), 0x20AC);
/// assert_eq!(utf8::decode("😀".as_bytes()), 0x1F600);
/// ```
pub fn decode(bytes: &[u8]) -> u32 {
    let byte = |index: usize| bytes.get(index).copied().unwrap_or(0) as u32;
    let tail = |index: usize| byte(index) & 0x3F;

    match char_length(byte(0) as u8) {
        1 => byte(0),
        2 => ((byte(0) & 0x1F) << 6) | tail(1),
        3 => ((byte(0) & 0x0F) << 12) | (tail(1) << 6) | tail(2),
        4 => ((byte(0) & 0x07) << 18) | (tail(1) << 12) | (tail(2) << 6) | tail(3),
        _ => 0,
    }
}

/// Decodes the sequence starting at `bytes[0]` into a [`char`], returning [`None`] if the sequence
/// is invalid or truncated.
pub fn decode_char(bytes: &[u8]) -> Option<char> {
    let len = char_length(*bytes.first()?) as usize;
    let sequence = bytes.get(..len).filter(|_| len > 0)?;
    validate(sequence).ok()?;
    char::from_u32(decode(sequence))
}

/// Encodes `code_point` as UTF-8, returning the bytes and the number of them which are used.
/// Returns [`None`] for surrogates and values above [`MAX_CODE_POINT`].
pub fn encode(code_point: u32) -> Option<([u8; 4], usize)> {
    let mut buf = [0; 4];
    let len = char::from_u32(code_point)?.encode_utf8(&mut buf).len();
    Some((buf, len))
}

/// Returns true if `bytes` starts with the UTF-8 [`BOM`].
pub fn contains_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(&BOM)
}

/// A cheap guess at whether a nul-terminated string is UTF-8 text: true if it starts with the
/// [`BOM`], is empty, or has at least one ASCII byte before its first zero byte. Nothing is
/// validated, so use [`validate`] when the answer matters.
///
/// # Examples
/// ```
/// # use mini_std::text::utf8;
/// assert!(utf8::looks_like_utf8(b"\xEF\xBB\xBF\xC3\xA9"));
/// assert!(utf8::looks_like_utf8("é!".as_bytes()));
/// assert!(!utf8::looks_like_utf8(b"\xC3\xA9\0abc"));
/// ```
pub fn looks_like_utf8(bytes: &[u8]) -> bool {
    let bytes = &bytes[..c_str_len(bytes)];
    contains_bom(bytes) || bytes.is_empty() || bytes.iter().copied().any(is_ascii)
}

/// Returns the length of a nul-terminated string: the index of the first zero byte, or the length
/// of the slice if there isn't one.
pub fn c_str_len(bytes: &[u8]) -> usize {
    bytes.iter().position(|byte| *byte == 0).unwrap_or(bytes.len())
}

/// Counts the code points in a nul-terminated string, by counting every byte before the first
/// zero byte which isn't a continuation byte.
///
/// # Examples
/// ```
/// # use mini_std::text::utf8;
/// assert_eq!(utf8::codepoint_count("héllo".as_bytes()), 5);
/// assert_eq!(utf8::codepoint_count(b"ab\0cd"), 2);
/// ```
pub fn codepoint_count(bytes: &[u8]) -> usize {
    bytes[..c_str_len(bytes)]
        .iter()
        .filter(|byte| !is_continuation_byte(**byte))
        .count()
}

/// Returns the index of the sequence after the one starting at `current`.
///
/// The index only advances if the result is strictly less than `bytes.len()`. At the last
/// sequence, past the end or on an invalid lead byte, `current` is returned unchanged, so a caller
/// stepping through a buffer stops on its final character rather than past it.
///
/// # Examples
/// ```
/// # use mini_std::text::utf8;
/// let text = "aé€".as_bytes();
/// assert_eq!(utf8::next_char_index(text, 0), 1);
/// assert_eq!(utf8::next_char_index(text, 1), 3);
/// assert_eq!(utf8::next_char_index(text, 3), 3);
/// ```
pub fn next_char_index(bytes: &[u8], current: usize) -> usize {
    let Some(byte) = bytes.get(current) else {
        return current;
    };

    let next = current + char_length(*byte) as usize;
    if next < bytes.len() { next } else { current }
}

/// Returns the index of the sequence before the one starting at `current`, by stepping back over
/// continuation bytes. Returns 0 at the start of `bytes`, and treats a `current` past the end as
/// `bytes.len()`.
///
/// # Examples
/// ```
/// # use mini_std::text::utf8;
/// let text = "aé€".as_bytes();
/// assert_eq!(utf8::prev_char_index(text, 3), 1);
/// assert_eq!(utf8::prev_char_index(text, 1), 0);
/// assert_eq!(utf8::prev_char_index(text, 0), 0);
/// assert_eq!(utf8::prev_char_index(text, 6), 3);
/// ```
pub fn prev_char_index(bytes: &[u8], current: usize) -> usize {
    let mut index = current.min(bytes.len());

    while index > 0 {
        index -= 1;
        if !is_continuation_byte(bytes[index]) {
            break;
        }
    }

    index
}
