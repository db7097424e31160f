//! Character-indexed mutable byte buffer.
//!
//! A [`CharBuf`] owns raw bytes and addresses them by character, not by
//! byte: index 0 is the first decoded character, -1 the last. Multi-byte
//! UTF-8 sequences count as one character. There is no cached offset
//! index; every character-addressed operation resolves its position by a
//! forward scan, keeping the per-buffer footprint at exactly the byte
//! payload.
//!
//! Bytes that do not begin a complete valid sequence count as one
//! character each. Read operations report such a character as its first
//! byte's value and transforms pass its bytes through unchanged.

use core::fmt;

use alloc::vec::Vec;

use bstr::{BStr, ByteSlice};

use crate::tr::{span_codepoint, TrPattern};
use crate::utf8::{self, Utf8Error};

/// Rejected argument of a mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("index {0} out of string")]
    OutOfRange(isize),
    #[error("negative length {0}")]
    NegativeLength(isize),
}

/// Mutable byte buffer addressed by character index.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct CharBuf {
    bytes: Vec<u8>,
}

fn count_chars(bytes: &[u8]) -> usize {
    let mut n = 0;
    let mut rest = bytes;
    while !rest.is_empty() {
        rest = &rest[utf8::char_len_lossy(rest)..];
        n += 1;
    }
    n
}

/// Byte length of the first `chars` characters, saturating at the end.
fn span_bytes(bytes: &[u8], chars: usize) -> usize {
    let mut off = 0;
    for _ in 0..chars {
        if off == bytes.len() {
            break;
        }
        off += utf8::char_len_lossy(&bytes[off..]);
    }
    off
}

#[cfg(feature = "unicode-case")]
fn map_case(cp: u32, upper: bool) -> u32 {
    if upper {
        crate::case::upcase_codepoint(cp)
    } else {
        crate::case::downcase_codepoint(cp)
    }
}

#[cfg(not(feature = "unicode-case"))]
const fn map_case(cp: u32, upper: bool) -> u32 {
    match cp {
        0x61..=0x7A if upper => cp ^ 0x20,
        0x41..=0x5A if !upper => cp ^ 0x20,
        _ => cp,
    }
}

const WHITESPACE: &[u8] = b" \t\r\n\x0C\x0B";

impl CharBuf {
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Count of characters; `O(byte length)`.
    #[must_use]
    pub fn char_len(&self) -> usize {
        count_chars(&self.bytes)
    }

    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Resolves a character index to a character position, or `None` when
    /// it falls outside the buffer. `allow_end` admits the one-past-last
    /// position used as an insertion point.
    fn resolve_index(&self, index: isize, allow_end: bool) -> Option<usize> {
        let len = self.char_len();
        let idx = if index < 0 {
            index.checked_add(isize::try_from(len).ok()?)?
        } else {
            index
        };
        let idx = usize::try_from(idx).ok()?;
        if idx > len || (idx == len && !allow_end) {
            return None;
        }
        Some(idx)
    }

    fn byte_offset_of(&self, char_index: usize) -> usize {
        span_bytes(&self.bytes, char_index)
    }

    /// Byte offset of the character at `index`, by sequential scan.
    #[must_use]
    pub fn byte_offset(&self, index: isize) -> Option<usize> {
        Some(self.byte_offset_of(self.resolve_index(index, false)?))
    }

    /// The single character at `index`.
    #[must_use]
    pub fn char_at(&self, index: isize) -> Option<Self> {
        let idx = self.resolve_index(index, false)?;
        let start = self.byte_offset_of(idx);
        let len = utf8::char_len_lossy(&self.bytes[start..]);
        Some(Self::from(&self.bytes[start..start + len]))
    }

    /// Up to `len` characters starting at `index`. `None` when `index` is
    /// out of range; empty when `len <= 0`.
    #[must_use]
    pub fn slice(&self, index: isize, len: isize) -> Option<Self> {
        let idx = self.resolve_index(index, true)?;
        let Ok(len) = usize::try_from(len) else {
            return Some(Self::new());
        };
        let start = self.byte_offset_of(idx);
        let nbytes = span_bytes(&self.bytes[start..], len);
        Some(Self::from(&self.bytes[start..start + nbytes]))
    }

    /// Substring between two endpoints, each resolved relative to the
    /// character count when negative. `exclusive` stops before the end
    /// character.
    #[must_use]
    pub fn slice_range(&self, start: isize, end: isize, exclusive: bool) -> Option<Self> {
        let char_len = isize::try_from(self.char_len()).ok()?;
        let s = if start < 0 { start.checked_add(char_len)? } else { start };
        let mut e = if end < 0 { end.checked_add(char_len)? } else { end };
        if !exclusive {
            e = e.saturating_add(1);
        }
        if s < 0 {
            return None;
        }
        self.slice(s, e.saturating_sub(s).max(0))
    }

    /// Character index of the first occurrence of `needle` at or after
    /// character `from`. The search itself is byte-level.
    #[must_use]
    pub fn find(&self, needle: &[u8], from: isize) -> Option<usize> {
        let idx = self.resolve_index(from, true)?;
        let start = self.byte_offset_of(idx);
        let pos = self.bytes[start..].find(needle)?;
        Some(idx + count_chars(&self.bytes[start..start + pos]))
    }

    #[must_use]
    pub fn contains(&self, needle: &[u8]) -> bool {
        self.bytes.contains_str(needle)
    }

    #[must_use]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.bytes.starts_with(prefix)
    }

    #[must_use]
    pub fn ends_with(&self, suffix: &[u8]) -> bool {
        self.bytes.ends_with(suffix)
    }

    /// Replaces `len` characters at `index` with `replacement`, resizing
    /// the buffer as needed. `index` may equal the character count, which
    /// appends. The buffer is untouched on error.
    pub fn splice(&mut self, index: isize, len: isize, replacement: &[u8]) -> Result<(), IndexError> {
        let len = usize::try_from(len).map_err(|_| IndexError::NegativeLength(len))?;
        let idx = self
            .resolve_index(index, true)
            .ok_or(IndexError::OutOfRange(index))?;
        let start = self.byte_offset_of(idx);
        let nbytes = span_bytes(&self.bytes[start..], len);
        self.bytes
            .splice(start..start + nbytes, replacement.iter().copied());
        Ok(())
    }

    /// Inserts `bytes` before the character at `index`.
    pub fn insert(&mut self, index: isize, bytes: &[u8]) -> Result<(), IndexError> {
        self.splice(index, 0, bytes)
    }

    /// Removes up to `len` characters at `index` and returns them.
    pub fn take_slice(&mut self, index: isize, len: isize) -> Option<Self> {
        let len = usize::try_from(len).ok()?;
        let idx = self.resolve_index(index, true)?;
        let start = self.byte_offset_of(idx);
        let nbytes = span_bytes(&self.bytes[start..], len);
        Some(Self {
            bytes: self.bytes.drain(start..start + nbytes).collect(),
        })
    }

    /// Byte at byte index `index`, negative counting from the end.
    #[must_use]
    pub fn getbyte(&self, index: isize) -> Option<u8> {
        self.bytes.get(self.resolve_byte_index(index)?).copied()
    }

    /// Overwrites one byte, returning the previous value.
    pub fn setbyte(&mut self, index: isize, byte: u8) -> Option<u8> {
        let idx = self.resolve_byte_index(index)?;
        Some(core::mem::replace(&mut self.bytes[idx], byte))
    }

    /// Byte-addressed substring; no character alignment is applied.
    #[must_use]
    pub fn byteslice(&self, offset: isize, len: isize) -> Option<Self> {
        let len = usize::try_from(len).ok()?;
        let blen = self.bytes.len();
        let off = if offset < 0 {
            offset.checked_add(isize::try_from(blen).ok()?)?
        } else {
            offset
        };
        let off = usize::try_from(off).ok()?;
        if off > blen {
            return None;
        }
        let end = (off + len).min(blen);
        Some(Self::from(&self.bytes[off..end]))
    }

    fn resolve_byte_index(&self, index: isize) -> Option<usize> {
        let idx = if index < 0 {
            index.checked_add(isize::try_from(self.bytes.len()).ok()?)?
        } else {
            index
        };
        let idx = usize::try_from(idx).ok()?;
        (idx < self.bytes.len()).then_some(idx)
    }

    /// Codepoint of the first character; the first byte's value when that
    /// character is malformed.
    #[must_use]
    pub fn ord(&self) -> Option<u32> {
        self.chars().next().map(span_codepoint)
    }

    #[must_use]
    pub fn is_ascii_only(&self) -> bool {
        self.bytes.is_ascii()
    }

    #[must_use]
    pub fn is_valid_utf8(&self) -> bool {
        utf8::validate(&self.bytes)
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Encodes `cp` and appends it. Fails on surrogates and codepoints
    /// past U+10FFFF, leaving the buffer unchanged.
    pub fn push_codepoint(&mut self, cp: u32) -> Result<(), Utf8Error> {
        let mut enc = [0u8; 4];
        let len = utf8::encode(cp, &mut enc)?;
        self.bytes.extend_from_slice(&enc[..len]);
        Ok(())
    }

    /// Character spans, one `&[u8]` per character.
    #[must_use]
    pub fn chars(&self) -> Chars<'_> {
        Chars { rest: &self.bytes }
    }

    /// Decoded codepoints; a malformed character yields its first byte's
    /// value.
    #[must_use]
    pub fn codepoints(&self) -> Codepoints<'_> {
        Codepoints {
            chars: self.chars(),
        }
    }

    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes.iter().copied()
    }

    /// Substrings between byte-level occurrences of `sep`. An empty `sep`
    /// yields one substring per character; an empty buffer yields
    /// nothing.
    #[must_use]
    pub fn split<'a>(&'a self, sep: &'a [u8]) -> Split<'a> {
        Split {
            rest: (!self.bytes.is_empty()).then_some(self.bytes.as_slice()),
            sep,
        }
    }

    /// Character-order reversal; multi-byte sequences stay intact.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut out = Vec::with_capacity(self.bytes.len());
        let spans: Vec<&[u8]> = self.chars().collect();
        for span in spans.iter().rev() {
            out.extend_from_slice(span);
        }
        Self { bytes: out }
    }

    pub fn reverse_in_place(&mut self) -> &mut Self {
        self.bytes = self.reverse().bytes;
        self
    }

    /// Concatenation of `n` copies.
    #[must_use]
    pub fn repeat(&self, n: usize) -> Self {
        Self {
            bytes: self.bytes.repeat(n),
        }
    }

    /// Transliteration: each character in `from` is replaced by the
    /// positionally corresponding character of `to`, clamped to `to`'s
    /// last character. An empty `to` deletes matched characters; a
    /// leading `^` in `from` negates the set.
    #[must_use]
    pub fn tr(&self, from: &[u8], to: &[u8]) -> Self {
        let mut out = self.clone();
        out.tr_in_place(from, to);
        out
    }

    /// Mutating [`tr`](Self::tr); reports whether anything changed.
    pub fn tr_in_place(&mut self, from: &[u8], to: &[u8]) -> bool {
        let from = TrPattern::parse(from, true);
        let to = TrPattern::parse(to, false);
        let mut out = Vec::with_capacity(self.bytes.len());
        let mut changed = false;
        for span in self.chars() {
            let Some(n) = from.position(span_codepoint(span)) else {
                out.extend_from_slice(span);
                continue;
            };
            match to.get(n) {
                Some(cp) => {
                    let mut enc = [0u8; 4];
                    if let Ok(len) = utf8::encode(cp, &mut enc) {
                        // A character mapped to itself is not a change.
                        if enc[..len] != *span {
                            changed = true;
                        }
                        out.extend_from_slice(&enc[..len]);
                    } else {
                        out.extend_from_slice(span);
                    }
                }
                // Empty replacement set deletes the character.
                None => changed = true,
            }
        }
        if changed {
            self.bytes = out;
        }
        changed
    }

    #[must_use]
    pub fn upcase(&self) -> Self {
        Self {
            bytes: self.case_mapped(true).0,
        }
    }

    #[must_use]
    pub fn downcase(&self) -> Self {
        Self {
            bytes: self.case_mapped(false).0,
        }
    }

    /// Uppercases in place, returning the number of changed characters.
    pub fn upcase_in_place(&mut self) -> usize {
        let (bytes, changed) = self.case_mapped(true);
        if changed > 0 {
            self.bytes = bytes;
        }
        changed
    }

    /// Lowercases in place, returning the number of changed characters.
    pub fn downcase_in_place(&mut self) -> usize {
        let (bytes, changed) = self.case_mapped(false);
        if changed > 0 {
            self.bytes = bytes;
        }
        changed
    }

    fn case_mapped(&self, upper: bool) -> (Vec<u8>, usize) {
        let mut out = Vec::with_capacity(self.bytes.len());
        let mut changed = 0;
        for span in self.chars() {
            let Ok((cp, _)) = utf8::decode_first(span) else {
                out.extend_from_slice(span);
                continue;
            };
            let mapped = map_case(cp, upper);
            if mapped == cp {
                out.extend_from_slice(span);
                continue;
            }
            let mut enc = [0u8; 4];
            match utf8::encode(mapped, &mut enc) {
                Ok(len) => {
                    out.extend_from_slice(&enc[..len]);
                    changed += 1;
                }
                Err(_) => out.extend_from_slice(span),
            }
        }
        (out, changed)
    }

    /// Drops one trailing line terminator (`\r\n`, `\n`, or `\r`).
    pub fn chomp_in_place(&mut self) -> bool {
        let n = match self.bytes.as_slice() {
            [.., b'\r', b'\n'] => 2,
            [.., b'\n' | b'\r'] => 1,
            _ => return false,
        };
        self.bytes.truncate(self.bytes.len() - n);
        true
    }

    #[must_use]
    pub fn chomp(&self) -> Self {
        let mut out = self.clone();
        out.chomp_in_place();
        out
    }

    pub fn lstrip_in_place(&mut self) -> bool {
        let n = self
            .bytes
            .iter()
            .take_while(|b| WHITESPACE.contains(b))
            .count();
        if n == 0 {
            return false;
        }
        self.bytes.drain(..n);
        true
    }

    pub fn rstrip_in_place(&mut self) -> bool {
        let n = self
            .bytes
            .iter()
            .rev()
            .take_while(|b| WHITESPACE.contains(b))
            .count();
        if n == 0 {
            return false;
        }
        self.bytes.truncate(self.bytes.len() - n);
        true
    }

    pub fn strip_in_place(&mut self) -> bool {
        let r = self.rstrip_in_place();
        self.lstrip_in_place() || r
    }

    #[must_use]
    pub fn lstrip(&self) -> Self {
        let mut out = self.clone();
        out.lstrip_in_place();
        out
    }

    #[must_use]
    pub fn rstrip(&self) -> Self {
        let mut out = self.clone();
        out.rstrip_in_place();
        out
    }

    #[must_use]
    pub fn strip(&self) -> Self {
        let mut out = self.clone();
        out.strip_in_place();
        out
    }
}

impl fmt::Debug for CharBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(&self.bytes), f)
    }
}

impl fmt::Display for CharBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(&self.bytes), f)
    }
}

impl From<&str> for CharBuf {
    fn from(s: &str) -> Self {
        Self {
            bytes: s.as_bytes().to_vec(),
        }
    }
}

impl From<&[u8]> for CharBuf {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl<const N: usize> From<&[u8; N]> for CharBuf {
    fn from(bytes: &[u8; N]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl From<Vec<u8>> for CharBuf {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl PartialEq<[u8]> for CharBuf {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes.as_slice() == other
    }
}

impl PartialEq<&[u8]> for CharBuf {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes.as_slice() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for CharBuf {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.bytes.as_slice() == *other
    }
}

impl PartialEq<str> for CharBuf {
    fn eq(&self, other: &str) -> bool {
        self.bytes.as_slice() == other.as_bytes()
    }
}

impl PartialEq<&str> for CharBuf {
    fn eq(&self, other: &&str) -> bool {
        self.bytes.as_slice() == other.as_bytes()
    }
}

/// See [`CharBuf::chars`].
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Chars<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.rest.is_empty() {
            return None;
        }
        let (span, rest) = self.rest.split_at(utf8::char_len_lossy(self.rest));
        self.rest = rest;
        Some(span)
    }
}

/// See [`CharBuf::codepoints`].
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    chars: Chars<'a>,
}

impl Iterator for Codepoints<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.chars.next().map(span_codepoint)
    }
}

/// See [`CharBuf::split`].
#[derive(Debug, Clone)]
pub struct Split<'a> {
    rest: Option<&'a [u8]>,
    sep: &'a [u8],
}

impl Iterator for Split<'_> {
    type Item = CharBuf;

    fn next(&mut self) -> Option<CharBuf> {
        let rest = self.rest.take()?;
        if self.sep.is_empty() {
            let (span, tail) = rest.split_at(utf8::char_len_lossy(rest));
            self.rest = (!tail.is_empty()).then_some(tail);
            return Some(CharBuf::from(span));
        }
        match rest.find(self.sep) {
            Some(p) => {
                self.rest = Some(&rest[p + self.sep.len()..]);
                Some(CharBuf::from(&rest[..p]))
            }
            None => Some(CharBuf::from(rest)),
        }
    }
}
