//! Offline compression of a codepoint-to-codepoint case mapping into XOR
//! ranges plus exceptions.
//!
//! This is host-side tooling: it runs once, offline, over UnicodeData.txt
//! (see the `mkcasetable` binary) and its output is committed as
//! `case/tables.rs`. It never runs inside the live interpreter. The
//! algorithm is a pure function of the input mapping and the options:
//! rerunning it on identical input yields an identical table.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::cmp::Reverse;

use crate::case::{CaseException, CaseRange, CaseTable};

/// Tuning knobs for [`compress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Minimum number of mapping entries sharing an XOR delta before that
    /// delta is considered for range compression.
    pub min_xor_count: usize,
    /// Maximum distance between consecutive same-delta codepoints merged
    /// into one candidate run.
    pub max_gap: u16,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            min_xor_count: 15,
            max_gap: 2,
        }
    }
}

/// One direction's compressed table, as produced by [`compress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedTable {
    /// Sorted by `start`; non-overlapping.
    pub ranges: Vec<CaseRange>,
    /// Sorted by `from`; never covered by a range.
    pub exceptions: Vec<CaseException>,
}

impl CompressedTable {
    /// Borrows the compressed data as a runtime lookup table.
    #[must_use]
    pub fn as_table(&self) -> CaseTable<'_> {
        CaseTable {
            ranges: &self.ranges,
            exceptions: &self.exceptions,
        }
    }
}

/// Compresses a `source -> mapped` table (BMP only, identity entries
/// ignored) into ranges and exceptions.
///
/// Frequent XOR deltas are processed first (ties broken by ascending
/// delta), each claiming maximal runs of still-unassigned codepoints.
/// Candidate runs may bridge gaps of up to `max_gap`, but are re-split at
/// any codepoint the full mapping does not send to `cp ^ xor`: a range
/// entry asserts its delta for every codepoint it spans, so an accepted
/// run must never shadow a differently-mapped or unmapped codepoint.
/// Runs carrying fewer than 2 codepoints fall through to the exception
/// list.
#[must_use]
pub fn compress(mapping: &[(u16, u16)], opts: &BuilderOptions) -> CompressedTable {
    let full: BTreeMap<u16, u16> = mapping
        .iter()
        .copied()
        .filter(|(from, to)| from != to)
        .collect();
    let mut remaining = full.clone();

    let mut counts: BTreeMap<u16, usize> = BTreeMap::new();
    for (&from, &to) in &full {
        *counts.entry(from ^ to).or_default() += 1;
    }
    let mut selected: Vec<(u16, usize)> = counts
        .into_iter()
        .filter(|&(_, count)| count >= opts.min_xor_count)
        .collect();
    selected.sort_unstable_by_key(|&(xor, count)| (Reverse(count), xor));

    let mut ranges = Vec::new();
    for (xor, _) in selected {
        let members: Vec<u16> = remaining
            .iter()
            .filter(|&(&from, &to)| from ^ to == xor)
            .map(|(&from, _)| from)
            .collect();

        for (run_start, run_end) in merge_runs(&members, opts.max_gap) {
            for (start, end) in sound_segments(run_start, run_end, xor, &full) {
                if end - start < 1 {
                    continue;
                }
                ranges.push(CaseRange { xor, start, end });
                for cp in start..=end {
                    remaining.remove(&cp);
                }
            }
        }
    }

    ranges.sort_unstable_by_key(|r| r.start);
    let exceptions = remaining
        .into_iter()
        .map(|(from, to)| CaseException { from, to })
        .collect();

    CompressedTable { ranges, exceptions }
}

/// Merges an ascending codepoint list into runs, bridging gaps of up to
/// `max_gap` between consecutive entries.
fn merge_runs(members: &[u16], max_gap: u16) -> Vec<(u16, u16)> {
    let mut runs = Vec::new();
    let Some((&first, rest)) = members.split_first() else {
        return runs;
    };

    let (mut start, mut prev) = (first, first);
    for &cp in rest {
        if cp - prev <= max_gap {
            prev = cp;
        } else {
            runs.push((start, prev));
            start = cp;
            prev = cp;
        }
    }
    runs.push((start, prev));
    runs
}

/// Splits a candidate run into the maximal sub-runs whose every codepoint
/// the mapping sends to `cp ^ xor`.
fn sound_segments(
    run_start: u16,
    run_end: u16,
    xor: u16,
    full: &BTreeMap<u16, u16>,
) -> Vec<(u16, u16)> {
    let mut segments = Vec::new();
    let mut start = None;
    for cp in run_start..=run_end {
        if full.get(&cp) == Some(&(cp ^ xor)) {
            start.get_or_insert(cp);
        } else if let Some(s) = start.take() {
            segments.push((s, cp - 1));
        }
    }
    if let Some(s) = start {
        segments.push((s, run_end));
    }
    segments
}

/// The two directional mappings extracted from UnicodeData.txt.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaseMaps {
    /// `lowercase -> uppercase` entries.
    pub upper: Vec<(u16, u16)>,
    /// `uppercase -> lowercase` entries.
    pub lower: Vec<(u16, u16)>,
}

/// Generation diagnostics: how much input was consumed and how much was
/// dropped as malformed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseDiagnostics {
    /// Non-empty records seen.
    pub records: usize,
    /// Malformed or short records skipped (non-fatal).
    pub skipped: usize,
}

/// Parses UnicodeData.txt content: one semicolon-delimited record per
/// codepoint, fields 12 and 13 holding the simple uppercase and lowercase
/// mappings. Records beyond the BMP are ignored; malformed records are
/// skipped and counted in the diagnostics.
#[must_use]
pub fn parse_unicode_data(text: &str) -> (CaseMaps, ParseDiagnostics) {
    let mut maps = CaseMaps::default();
    let mut diag = ParseDiagnostics::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        diag.records += 1;

        let fields: Vec<&str> = line.split(';').collect();
        let Some(cp) = fields.first().and_then(|s| u32::from_str_radix(s, 16).ok()) else {
            diag.skipped += 1;
            continue;
        };
        let Ok(cp) = u16::try_from(cp) else {
            continue; // beyond the BMP, out of table scope
        };
        if fields.len() < 14 {
            diag.skipped += 1;
            continue;
        }

        if let Some(upper) = mapping_field(fields[12]) {
            if upper != cp {
                maps.upper.push((cp, upper));
            }
        }
        if let Some(lower) = mapping_field(fields[13]) {
            if lower != cp {
                maps.lower.push((cp, lower));
            }
        }
    }

    (maps, diag)
}

fn mapping_field(field: &str) -> Option<u16> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    u32::from_str_radix(field, 16)
        .ok()
        .and_then(|cp| u16::try_from(cp).ok())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    fn ascii_lower_to_upper() -> Vec<(u16, u16)> {
        (0x61..=0x7A).map(|cp| (cp, cp ^ 0x20)).collect()
    }

    #[test]
    fn ascii_block_compresses_to_one_range() {
        let table = compress(&ascii_lower_to_upper(), &BuilderOptions::default());
        assert_eq!(
            table.ranges,
            [CaseRange {
                xor: 0x20,
                start: 0x61,
                end: 0x7A
            }]
        );
        assert!(table.exceptions.is_empty());
    }

    #[test]
    fn deterministic_regardless_of_input_order() {
        let forward = ascii_lower_to_upper();
        let mut backward = forward.clone();
        backward.reverse();

        let opts = BuilderOptions::default();
        assert_eq!(compress(&forward, &opts), compress(&backward, &opts));
    }

    #[test]
    fn below_threshold_becomes_exceptions() {
        // 5 entries sharing one delta, threshold 15.
        let mapping: Vec<(u16, u16)> = (0x61..0x66).map(|cp| (cp, cp ^ 0x20)).collect();
        let table = compress(&mapping, &BuilderOptions::default());
        assert!(table.ranges.is_empty());
        assert_eq!(table.exceptions.len(), 5);
    }

    #[test]
    fn irregular_codepoint_splits_the_run() {
        // Greek lowercase block: final sigma (U+03C2) maps to U+03A3 with
        // a different delta and must not be shadowed by the surrounding
        // XOR-0x20 run.
        let mut mapping: Vec<(u16, u16)> = (0x3B1..=0x3C1).map(|cp| (cp, cp ^ 0x20)).collect();
        mapping.push((0x3C2, 0x3A3));
        mapping.extend((0x3C3..=0x3C9).map(|cp| (cp, cp ^ 0x20)));

        let table = compress(&mapping, &BuilderOptions::default());
        assert_eq!(
            table.ranges,
            [
                CaseRange {
                    xor: 0x20,
                    start: 0x3B1,
                    end: 0x3C1
                },
                CaseRange {
                    xor: 0x20,
                    start: 0x3C3,
                    end: 0x3C9
                },
            ]
        );
        assert_eq!(
            table.exceptions,
            [CaseException {
                from: 0x3C2,
                to: 0x3A3
            }]
        );
        assert_eq!(table.as_table().lookup(0x3C2), 0x3A3);
    }

    #[test]
    fn alternating_pairs_stay_exceptions() {
        // Latin Extended-A style: sources two apart, so a range would
        // claim the unmapped codepoints in between.
        let mapping: Vec<(u16, u16)> = (0..20).map(|i| (0x101 + 2 * i, 0x100 + 2 * i)).collect();
        let table = compress(&mapping, &BuilderOptions::default());
        assert!(table.ranges.is_empty());
        assert_eq!(table.exceptions.len(), 20);
        // Unmapped codepoints keep their identity.
        assert_eq!(table.as_table().lookup(0x100), 0x100);
        assert_eq!(table.as_table().lookup(0x101), 0x100);
    }

    #[test]
    fn identity_entries_are_dropped() {
        let table = compress(&[(0x41, 0x41)], &BuilderOptions::default());
        assert!(table.ranges.is_empty());
        assert!(table.exceptions.is_empty());
    }

    #[test]
    fn reproduces_every_input_pair() {
        let mut mapping = ascii_lower_to_upper();
        mapping.push((0xFF, 0x178));
        mapping.push((0xB5, 0x39C));
        mapping.extend((0x430..=0x44F).map(|cp| (cp, cp ^ 0x20)));

        let compressed = compress(&mapping, &BuilderOptions::default());
        let table = compressed.as_table();
        for (from, to) in mapping {
            assert_eq!(table.lookup(u32::from(from)), u32::from(to));
        }
    }

    #[test]
    fn parses_unicode_data_records() {
        let text = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041
00F7;DIVISION SIGN;Sm;0;ON;;;;;N;;;;;
garbage
0042;SHORT RECORD
10400;DESERET CAPITAL LETTER LONG I;Lu;0;L;;;;;N;;;;10428;
";
        let (maps, diag) = parse_unicode_data(text);
        assert_eq!(maps.upper, [(0x61, 0x41)]);
        assert_eq!(maps.lower, [(0x41, 0x61)]);
        assert_eq!(diag.records, 6);
        assert_eq!(diag.skipped, 2);
    }
}
