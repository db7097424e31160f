//! Compressed simple case mapping for the Basic Multilingual Plane.
//!
//! A table is a sorted list of XOR ranges (one delta applied across a
//! contiguous block, 6 bytes per entry) plus a sorted list of exceptions
//! (4 bytes per entry). The embedded [`UPCASE`]/[`DOWNCASE`] tables are
//! generated offline by the `mkcasetable` binary and committed in
//! `tables.rs`; they are never built or modified at runtime.

use core::cmp::Ordering;

#[cfg(feature = "unicode-case")]
mod tables;

/// One XOR delta applied uniformly across `start..=end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CaseRange {
    pub xor: u16,
    pub start: u16,
    pub end: u16,
}

/// A single irregular mapping not captured by any range.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CaseException {
    pub from: u16,
    pub to: u16,
}

/// One direction's complete case map. Ranges are sorted by `start` and
/// never overlap; exceptions are sorted by `from`.
#[derive(Debug, Copy, Clone)]
pub struct CaseTable<'a> {
    pub ranges: &'a [CaseRange],
    pub exceptions: &'a [CaseException],
}

impl CaseTable<'_> {
    /// Resolves `cp` to its mapped codepoint, or returns it unchanged when
    /// no mapping exists. Codepoints outside the BMP are always unchanged.
    ///
    /// Two binary searches: O(log ranges + log exceptions).
    #[must_use]
    pub fn lookup(&self, cp: u32) -> u32 {
        let Ok(cp16) = u16::try_from(cp) else {
            return cp;
        };

        let hit = self.ranges.binary_search_by(|r| {
            if (r.start..=r.end).contains(&cp16) {
                Ordering::Equal
            } else if cp16 < r.start {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        });
        if let Ok(i) = hit {
            return u32::from(cp16 ^ self.ranges[i].xor);
        }

        match self.exceptions.binary_search_by_key(&cp16, |e| e.from) {
            Ok(i) => u32::from(self.exceptions[i].to),
            Err(_) => cp,
        }
    }
}

/// Lowercase-to-uppercase table.
#[cfg(feature = "unicode-case")]
pub const UPCASE: CaseTable<'static> = CaseTable {
    ranges: &tables::UPCASE_RANGES,
    exceptions: &tables::UPCASE_EXCEPTIONS,
};

/// Uppercase-to-lowercase table.
#[cfg(feature = "unicode-case")]
pub const DOWNCASE: CaseTable<'static> = CaseTable {
    ranges: &tables::DOWNCASE_RANGES,
    exceptions: &tables::DOWNCASE_EXCEPTIONS,
};

/// Simple uppercase mapping of a single codepoint.
#[cfg(feature = "unicode-case")]
#[must_use]
pub fn upcase_codepoint(cp: u32) -> u32 {
    UPCASE.lookup(cp)
}

/// Simple lowercase mapping of a single codepoint.
#[cfg(feature = "unicode-case")]
#[must_use]
pub fn downcase_codepoint(cp: u32) -> u32 {
    DOWNCASE.lookup(cp)
}

#[cfg(all(test, feature = "unicode-case"))]
mod tests {
    extern crate std;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::ascii('a' as u32, 'A' as u32)]
    #[case::latin1('à' as u32, 'À' as u32)]
    #[case::y_diaeresis('ÿ' as u32, 'Ÿ' as u32)]
    #[case::micro('µ' as u32, 'Μ' as u32)]
    #[case::dotless_i('ı' as u32, 'I' as u32)]
    #[case::z_caron('ž' as u32, 'Ž' as u32)]
    #[case::long_s('ſ' as u32, 'S' as u32)]
    #[case::greek('ω' as u32, 'Ω' as u32)]
    #[case::final_sigma('ς' as u32, 'Σ' as u32)]
    #[case::sigma('σ' as u32, 'Σ' as u32)]
    #[case::pi('π' as u32, 'Π' as u32)]
    #[case::rho('ρ' as u32, 'Ρ' as u32)]
    #[case::alpha_tonos('ά' as u32, 'Ά' as u32)]
    #[case::cyrillic('я' as u32, 'Я' as u32)]
    #[case::cyrillic_er('р' as u32, 'Р' as u32)]
    #[case::cyrillic_io('ё' as u32, 'Ё' as u32)]
    #[case::cyrillic_omega('ѡ' as u32, 'Ѡ' as u32)]
    #[case::latin_ext_a('ā' as u32, 'Ā' as u32)]
    #[case::fullwidth('ａ' as u32, 'Ａ' as u32)]
    fn upcase_pairs(#[case] from: u32, #[case] to: u32) {
        assert_eq!(upcase_codepoint(from), to);
        // Simple mappings in this table are symmetric except for the
        // sigma/micro/dotless-i/long-s irregulars.
        if !matches!(from, 0xB5 | 0x131 | 0x17F | 0x3C2) {
            assert_eq!(downcase_codepoint(to), from);
        }
    }

    #[rstest]
    #[case::digit('7' as u32)]
    #[case::already_upper('A' as u32)]
    #[case::division_sign('÷' as u32)]
    #[case::sharp_s('ß' as u32)]
    #[case::hiragana('あ' as u32)]
    #[case::astral(0x1F600)]
    #[case::bmp_limit(0xFFFF)]
    fn upcase_identity(#[case] cp: u32) {
        assert_eq!(upcase_codepoint(cp), cp);
    }

    #[test]
    fn tables_are_ordered() {
        for t in [UPCASE, DOWNCASE] {
            for w in t.ranges.windows(2) {
                assert!(w[0].end < w[1].start, "overlapping ranges: {w:?}");
            }
            for w in t.exceptions.windows(2) {
                assert!(w[0].from < w[1].from, "unsorted exceptions: {w:?}");
            }
        }
    }

    #[test]
    fn exceptions_disjoint_from_ranges() {
        for t in [UPCASE, DOWNCASE] {
            for e in t.exceptions {
                assert!(
                    !t.ranges
                        .iter()
                        .any(|r| (r.start..=r.end).contains(&e.from)),
                    "exception {e:?} shadowed by a range"
                );
            }
        }
    }
}
