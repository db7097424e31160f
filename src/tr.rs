//! Transliteration pattern sets for [`CharBuf::tr`](crate::CharBuf::tr).
//!
//! A pattern is a sequence of literal characters and `a-z` style ranges;
//! a leading `^` (when followed by at least one character) negates the
//! whole set. Characters are matched by codepoint, so multi-byte UTF-8
//! ranges such as `あ-ん` work.

use alloc::vec::Vec;

use crate::utf8;

#[derive(Debug, Clone)]
enum Segment {
    InOrder(Vec<u32>),
    Range(u32, u32),
}

impl Segment {
    fn len(&self) -> usize {
        match self {
            Self::InOrder(cps) => cps.len(),
            Self::Range(first, last) => {
                if last >= first {
                    (last - first + 1) as usize
                } else {
                    0
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TrPattern {
    segments: Vec<Segment>,
    negated: bool,
}

impl TrPattern {
    /// Parses pattern bytes. Malformed UTF-8 falls back to one character
    /// per byte, consistent with the buffer's indexing policy.
    pub fn parse(pattern: &[u8], allow_negation: bool) -> Self {
        let mut cps = Vec::new();
        let mut rest = pattern;
        while !rest.is_empty() {
            let len = utf8::char_len_lossy(rest);
            cps.push(span_codepoint(&rest[..len]));
            rest = &rest[len..];
        }

        let mut negated = false;
        let mut cps = cps.as_slice();
        if allow_negation && cps.len() >= 2 && cps[0] == u32::from(b'^') {
            negated = true;
            cps = &cps[1..];
        }

        let mut segments = Vec::new();
        let mut literals = Vec::new();
        let mut i = 0;
        while i < cps.len() {
            // `x-y` forms a range only when something follows the dash.
            if i + 2 < cps.len() && cps[i + 1] == u32::from(b'-') {
                if !literals.is_empty() {
                    segments.push(Segment::InOrder(core::mem::take(&mut literals)));
                }
                segments.push(Segment::Range(cps[i], cps[i + 2]));
                i += 3;
            } else {
                literals.push(cps[i]);
                i += 1;
            }
        }
        if !literals.is_empty() {
            segments.push(Segment::InOrder(literals));
        }

        Self { segments, negated }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Position of `cp` within the set, counting across segments; the
    /// last occurrence wins. A negated set reports `usize::MAX` for
    /// every codepoint outside it.
    pub fn position(&self, cp: u32) -> Option<usize> {
        let mut found = None;
        let mut base = 0;
        for seg in &self.segments {
            match seg {
                Segment::InOrder(cps) => {
                    if let Some(i) = cps.iter().rposition(|&c| c == cp) {
                        found = Some(base + i);
                    }
                }
                Segment::Range(first, last) => {
                    if (*first..=*last).contains(&cp) {
                        found = Some(base + (cp - first) as usize);
                    }
                }
            }
            base += seg.len();
        }

        if self.negated {
            match found {
                Some(_) => None,
                None => Some(usize::MAX),
            }
        } else {
            found
        }
    }

    /// The `n`-th codepoint of the set, clamped to the last one when `n`
    /// runs past the end. `None` only for an empty set.
    pub fn get(&self, n: usize) -> Option<u32> {
        let mut base = 0;
        for (i, seg) in self.segments.iter().enumerate() {
            let len = seg.len();
            if n < base + len || i == self.segments.len() - 1 {
                let offset = (n - base).min(len.saturating_sub(1));
                return match seg {
                    Segment::InOrder(cps) => cps.get(offset).copied(),
                    Segment::Range(first, last) => {
                        if last < first {
                            None
                        } else {
                            Some(first + offset as u32)
                        }
                    }
                };
            }
            base += len;
        }
        None
    }
}

/// Codepoint of one character span; a malformed span yields its first
/// byte's value.
pub(crate) fn span_codepoint(span: &[u8]) -> u32 {
    utf8::decode_first(span).map_or_else(|_| u32::from(span[0]), |(cp, _)| cp)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::literal(b"abc", 'b', Some(1))]
    #[case::missing(b"abc", 'x', None)]
    #[case::range(b"a-z", 'c', Some(2))]
    #[case::range_then_literal(b"a-cXY", 'Y', Some(4))]
    #[case::trailing_dash_is_literal(b"a-", '-', Some(1))]
    #[case::leading_dash_is_literal(b"-x", '-', Some(0))]
    #[case::multibyte_range("あ-ん".as_bytes(), 'い', Some(2))]
    fn positions(#[case] pattern: &[u8], #[case] cp: char, #[case] expected: Option<usize>) {
        let pat = TrPattern::parse(pattern, true);
        assert_eq!(pat.position(cp as u32), expected);
    }

    #[test]
    fn negation_inverts_membership() {
        let pat = TrPattern::parse(b"^a-z", true);
        assert_eq!(pat.position('q' as u32), None);
        assert_eq!(pat.position('0' as u32), Some(usize::MAX));
    }

    #[test]
    fn lone_caret_is_a_literal() {
        let pat = TrPattern::parse(b"^", true);
        assert_eq!(pat.position('^' as u32), Some(0));
        // In a replacement set `^` is never special.
        let rep = TrPattern::parse(b"^x", false);
        assert_eq!(rep.position('^' as u32), Some(0));
    }

    #[test]
    fn get_clamps_to_last() {
        let pat = TrPattern::parse(b"xyz", false);
        assert_eq!(pat.get(0), Some('x' as u32));
        assert_eq!(pat.get(2), Some('z' as u32));
        assert_eq!(pat.get(100), Some('z' as u32));
        assert_eq!(pat.get(usize::MAX), Some('z' as u32));
    }

    #[test]
    fn empty_pattern_has_no_codepoints() {
        let pat = TrPattern::parse(b"", false);
        assert!(pat.is_empty());
        assert_eq!(pat.get(0), None);
    }
}
