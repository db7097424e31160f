//! Strict single-character UTF-8 codec.
//!
//! Everything here operates on one character at a time; buffer-level policy
//! (what to do with malformed bytes mid-string) lives in [`crate::CharBuf`].

use thiserror::Error;

/// Largest valid Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// Surrogate block, invalid as standalone UTF-8 targets.
pub const SURROGATES: core::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum Utf8Error {
    /// Invalid leading byte, or a continuation byte that is not `10xxxxxx`.
    #[error("malformed UTF-8 sequence")]
    MalformedSequence,
    /// A sequence cut off by the end of the buffer.
    #[error("truncated UTF-8 sequence")]
    Truncated,
    /// A codepoint encoded with more bytes than necessary.
    #[error("overlong UTF-8 encoding")]
    OverlongEncoding,
    #[error("invalid codepoint in UTF-8 (U+{0:04X})")]
    SurrogateCodepoint(u32),
    #[error("{0:#x} out of char range")]
    CodepointOutOfRange(u32),
}

/// Expected sequence length from a leading byte, or `None` for a
/// continuation byte or an invalid lead (`0xF8..`).
#[must_use]
pub const fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

/// Number of bytes `encode` will produce for a valid scalar.
#[must_use]
pub const fn encoded_len(cp: u32) -> usize {
    if cp < 0x80 {
        1
    } else if cp < 0x800 {
        2
    } else if cp < 0x10000 {
        3
    } else {
        4
    }
}

/// Decodes the first character of `bytes`.
///
/// Returns the codepoint and the number of bytes consumed. Rejects
/// truncated and non-minimal sequences, encoded surrogates, and values
/// above [`MAX_CODEPOINT`].
///
/// # Errors
///
/// See [`Utf8Error`].
pub fn decode_first(bytes: &[u8]) -> Result<(u32, usize), Utf8Error> {
    let lead = *bytes.first().ok_or(Utf8Error::Truncated)?;
    let len = sequence_len(lead).ok_or(Utf8Error::MalformedSequence)?;
    if bytes.len() < len {
        return Err(Utf8Error::Truncated);
    }

    let mut cp = match len {
        1 => return Ok((u32::from(lead), 1)),
        2 => u32::from(lead & 0x1F),
        3 => u32::from(lead & 0x0F),
        _ => u32::from(lead & 0x07),
    };
    for &b in &bytes[1..len] {
        if b & 0xC0 != 0x80 {
            return Err(Utf8Error::MalformedSequence);
        }
        cp = cp << 6 | u32::from(b & 0x3F);
    }

    let min = match len {
        2 => 0x80,
        3 => 0x800,
        _ => 0x10000,
    };
    if cp < min {
        return Err(Utf8Error::OverlongEncoding);
    }
    if SURROGATES.contains(&cp) {
        return Err(Utf8Error::SurrogateCodepoint(cp));
    }
    if cp > MAX_CODEPOINT {
        return Err(Utf8Error::CodepointOutOfRange(cp));
    }

    Ok((cp, len))
}

/// Encodes `cp` into `buf` with the minimal-length sequence.
///
/// Returns the number of bytes written (1–4).
///
/// # Errors
///
/// [`Utf8Error::SurrogateCodepoint`] for `0xD800..=0xDFFF`,
/// [`Utf8Error::CodepointOutOfRange`] above [`MAX_CODEPOINT`].
#[expect(clippy::cast_possible_truncation)]
pub fn encode(cp: u32, buf: &mut [u8; 4]) -> Result<usize, Utf8Error> {
    if SURROGATES.contains(&cp) {
        return Err(Utf8Error::SurrogateCodepoint(cp));
    }
    if cp > MAX_CODEPOINT {
        return Err(Utf8Error::CodepointOutOfRange(cp));
    }

    let len = encoded_len(cp);
    match len {
        1 => buf[0] = cp as u8,
        2 => {
            buf[0] = 0xC0 | (cp >> 6) as u8;
            buf[1] = 0x80 | (cp & 0x3F) as u8;
        }
        3 => {
            buf[0] = 0xE0 | (cp >> 12) as u8;
            buf[1] = 0x80 | (cp >> 6 & 0x3F) as u8;
            buf[2] = 0x80 | (cp & 0x3F) as u8;
        }
        _ => {
            buf[0] = 0xF0 | (cp >> 18) as u8;
            buf[1] = 0x80 | (cp >> 12 & 0x3F) as u8;
            buf[2] = 0x80 | (cp >> 6 & 0x3F) as u8;
            buf[3] = 0x80 | (cp & 0x3F) as u8;
        }
    }
    Ok(len)
}

/// Scans the whole buffer; any decode failure makes it invalid.
#[must_use]
pub fn validate(bytes: &[u8]) -> bool {
    let mut rest = bytes;
    while !rest.is_empty() {
        match decode_first(rest) {
            Ok((_, len)) => rest = &rest[len..],
            Err(_) => return false,
        }
    }
    true
}

/// Byte length of the character starting at `bytes[0]`, for indexing
/// purposes: a complete valid sequence counts whole, anything else
/// (isolated continuation byte, bad lead, truncated or non-minimal
/// sequence) counts as a single one-byte character.
///
/// Always returns at least 1 for a non-empty slice.
#[must_use]
pub fn char_len_lossy(bytes: &[u8]) -> usize {
    match decode_first(bytes) {
        Ok((_, len)) => len,
        Err(_) => usize::from(!bytes.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::ascii(b"a", 0x61, 1)]
    #[case::latin1("é".as_bytes(), 0xE9, 2)]
    #[case::hiragana("あ".as_bytes(), 0x3042, 3)]
    #[case::emoji("😀".as_bytes(), 0x1F600, 4)]
    #[case::max_scalar(b"\xF4\x8F\xBF\xBF", 0x10_FFFF, 4)]
    #[case::trailing_ignored("あい".as_bytes(), 0x3042, 3)]
    fn decode_ok(#[case] input: &[u8], #[case] cp: u32, #[case] len: usize) {
        assert_eq!(decode_first(input), Ok((cp, len)));
    }

    #[rstest]
    #[case::empty(b"", Utf8Error::Truncated)]
    #[case::cut_two(b"\xC3", Utf8Error::Truncated)]
    #[case::cut_four(b"\xF0\x9F\x98", Utf8Error::Truncated)]
    #[case::lone_continuation(b"\x80", Utf8Error::MalformedSequence)]
    #[case::bad_lead(b"\xFF", Utf8Error::MalformedSequence)]
    #[case::bad_continuation(b"\xE3\x28\x82", Utf8Error::MalformedSequence)]
    #[case::overlong_nul(b"\xC0\x80", Utf8Error::OverlongEncoding)]
    #[case::overlong_slash(b"\xE0\x80\xAF", Utf8Error::OverlongEncoding)]
    #[case::surrogate(b"\xED\xA0\x80", Utf8Error::SurrogateCodepoint(0xD800))]
    #[case::beyond_max(b"\xF4\x90\x80\x80", Utf8Error::CodepointOutOfRange(0x11_0000))]
    fn decode_err(#[case] input: &[u8], #[case] err: Utf8Error) {
        assert_eq!(decode_first(input), Err(err));
    }

    #[rstest]
    #[case::surrogate_low(0xD800, Utf8Error::SurrogateCodepoint(0xD800))]
    #[case::surrogate_high(0xDFFF, Utf8Error::SurrogateCodepoint(0xDFFF))]
    #[case::out_of_range(0x11_0000, Utf8Error::CodepointOutOfRange(0x11_0000))]
    fn encode_err(#[case] cp: u32, #[case] err: Utf8Error) {
        let mut buf = [0; 4];
        assert_eq!(encode(cp, &mut buf), Err(err));
    }

    #[rstest]
    #[case::well_formed("aあ😀".as_bytes(), true)]
    #[case::empty(b"", true)]
    #[case::truncated_tail(b"a\xE3\x81", false)]
    #[case::overlong(b"\xC0\x80", false)]
    #[case::stray_continuation(b"ab\x81", false)]
    fn validate_buffers(#[case] input: &[u8], #[case] ok: bool) {
        assert_eq!(validate(input), ok);
    }

    #[test]
    fn lossy_len_resynchronizes() {
        // Invalid lead, then a valid 3-byte character.
        assert_eq!(char_len_lossy(b"\x80\xE3\x81\x82"), 1);
        assert_eq!(char_len_lossy(b"\xE3\x81\x82"), 3);
        // Truncated 3-byte sequence at the end counts one byte at a time.
        assert_eq!(char_len_lossy(b"\xE3\x81"), 1);
        assert_eq!(char_len_lossy(b""), 0);
    }
}
