use charbuf::{CharBuf, IndexError};

use rstest::rstest;

#[rstest]
#[case::ascii("abc", 3)]
#[case::hiragana("あいう", 3)]
#[case::emoji("😀", 1)]
#[case::mixed("aあ😀", 3)]
#[case::empty("", 0)]
fn char_len(#[case] text: &str, #[case] expected: usize) {
    assert_eq!(CharBuf::from(text).char_len(), expected);
}

#[rstest]
#[case::first(0, Some("あ"))]
#[case::last(2, Some("う"))]
#[case::past(3, None)]
#[case::neg_last(-1, Some("う"))]
#[case::neg_first(-3, Some("あ"))]
#[case::neg_past(-4, None)]
fn char_at(#[case] index: isize, #[case] expected: Option<&str>) {
    let buf = CharBuf::from("あいう");
    assert_eq!(buf.char_at(index), expected.map(CharBuf::from));
}

#[test]
fn negative_index_symmetry() {
    let buf = CharBuf::from("あいう");
    assert_eq!(buf.char_at(-1), buf.char_at(2));
}

#[rstest]
#[case::middle(1, 2, Some("いう"))]
#[case::clamped(3, 99, Some("えお"))]
#[case::at_end(5, 1, Some(""))]
#[case::zero_len(2, 0, Some(""))]
#[case::negative_len(2, -1, Some(""))]
#[case::out_of_range(6, 1, None)]
#[case::negative_index(-2, 2, Some("えお"))]
fn slice(#[case] index: isize, #[case] len: isize, #[case] expected: Option<&str>) {
    let buf = CharBuf::from("あいうえお");
    assert_eq!(buf.slice(index, len), expected.map(CharBuf::from));
}

#[rstest]
#[case::inclusive(0, 2, false, Some("あいう"))]
#[case::exclusive(0, 2, true, Some("あい"))]
#[case::negative_end(1, -1, false, Some("いうえお"))]
#[case::negative_both(-3, -2, false, Some("うえ"))]
#[case::empty(2, 1, true, Some(""))]
#[case::negative_start_out(-9, 2, false, None)]
#[case::huge_end(0, isize::MAX, false, Some("あいうえお"))]
#[case::huge_negative_end(0, isize::MIN, false, Some(""))]
#[case::huge_negative_start(isize::MIN, 2, false, None)]
fn slice_range(
    #[case] start: isize,
    #[case] end: isize,
    #[case] exclusive: bool,
    #[case] expected: Option<&str>,
) {
    let buf = CharBuf::from("あいうえお");
    assert_eq!(buf.slice_range(start, end, exclusive), expected.map(CharBuf::from));
}

#[test]
fn splice_replaces_one_char() {
    let mut buf = CharBuf::from("あいう");
    buf.splice(1, 1, b"X").unwrap();
    assert_eq!(buf, "あXう");
}

#[test]
fn splice_resizes_span() {
    let mut buf = CharBuf::from("あいうえお");
    buf.splice(1, 3, "か".as_bytes()).unwrap();
    assert_eq!(buf, "あかお");

    let mut buf = CharBuf::from("abc");
    buf.splice(3, 1, b"d").unwrap();
    assert_eq!(buf, "abcd");
}

#[test]
fn splice_rejects_bad_index() {
    let mut buf = CharBuf::from("abc");
    assert_eq!(buf.splice(4, 1, b"x"), Err(IndexError::OutOfRange(4)));
    assert_eq!(buf.splice(-4, 1, b"x"), Err(IndexError::OutOfRange(-4)));
}

#[test]
fn insert_shifts_tail() {
    let mut buf = CharBuf::from("あう");
    buf.insert(1, "い".as_bytes()).unwrap();
    assert_eq!(buf, "あいう");
    buf.insert(3, b"!").unwrap();
    assert_eq!(buf, "あいう!");
}

#[test]
fn take_slice_then_insert_restores() {
    let original = CharBuf::from("あいうえお");
    for i in 0..=4 {
        for n in 0..=5 - i {
            let mut buf = original.clone();
            let removed = buf.take_slice(i, n).unwrap();
            buf.insert(i, removed.as_bytes()).unwrap();
            assert_eq!(buf, original, "i={i} n={n}");
        }
    }
}

#[test]
fn take_slice_returns_removed_span() {
    let mut buf = CharBuf::from("あいうえお");
    let removed = buf.take_slice(1, 2).unwrap();
    assert_eq!(removed, "いう");
    assert_eq!(buf, "あえお");
}

#[rstest]
#[case::from_start("あ", 0, Some(0))]
#[case::after_first("あ", 1, Some(2))]
#[case::second_char("い", 0, Some(1))]
#[case::missing("う", 0, None)]
#[case::from_end("あ", 4, None)]
fn find(#[case] needle: &str, #[case] from: isize, #[case] expected: Option<usize>) {
    let buf = CharBuf::from("あいあい");
    assert_eq!(buf.find(needle.as_bytes(), from), expected);
}

#[test]
fn split_on_separator() {
    let buf = CharBuf::from("a,b,,c");
    let parts: Vec<CharBuf> = buf.split(b",").collect();
    assert_eq!(parts, ["a", "b", "", "c"]);
}

#[test]
fn split_keeps_trailing_empty() {
    let buf = CharBuf::from("a,");
    let parts: Vec<CharBuf> = buf.split(b",").collect();
    assert_eq!(parts, ["a", ""]);
}

#[test]
fn split_on_empty_yields_chars() {
    let buf = CharBuf::from("あいう");
    let parts: Vec<CharBuf> = buf.split(b"").collect();
    assert_eq!(parts, ["あ", "い", "う"]);
}

#[test]
fn split_of_empty_buffer_is_empty() {
    let buf = CharBuf::new();
    assert_eq!(buf.split(b",").count(), 0);
    assert_eq!(buf.split(b"").count(), 0);
}

#[test]
fn split_separator_respects_char_boundaries() {
    // "い" shares no bytes with its neighbors, so the byte-level search
    // lands on character boundaries.
    let buf = CharBuf::from("あいうい!");
    let parts: Vec<CharBuf> = buf.split("い".as_bytes()).collect();
    assert_eq!(parts, ["あ", "う", "!"]);
}

#[test]
fn each_char_and_each_byte() {
    let buf = CharBuf::from("aあ");
    let chars: Vec<&[u8]> = buf.chars().collect();
    assert_eq!(chars, [b"a" as &[u8], "あ".as_bytes()]);
    let bytes: Vec<u8> = buf.bytes().collect();
    assert_eq!(bytes, "aあ".as_bytes());
    assert_eq!(buf.codepoints().collect::<Vec<u32>>(), [0x61, 0x3042]);
}

#[rstest]
#[case::ascii("abc", "cba")]
#[case::multibyte("あいう", "ういあ")]
#[case::emoji("🎉🎊", "🎊🎉")]
#[case::empty("", "")]
fn reverse(#[case] text: &str, #[case] expected: &str) {
    let buf = CharBuf::from(text);
    let rev = buf.reverse();
    assert_eq!(rev, expected);
    assert_eq!(rev.reverse(), buf);
}

#[test]
fn reverse_in_place_returns_self() {
    let mut buf = CharBuf::from("abc");
    buf.reverse_in_place().push_bytes(b"!");
    assert_eq!(buf, "cba!");
}

#[rstest]
#[case::three("ab", 3, "ababab")]
#[case::once("あ", 1, "あ")]
#[case::zero("ab", 0, "")]
fn repeat(#[case] text: &str, #[case] n: usize, #[case] expected: &str) {
    assert_eq!(CharBuf::from(text).repeat(n), expected);
}

#[rstest]
#[case::basic("hello", "el", "ip", "hippo")]
#[case::range("hello", "a-y", "b-z", "ifmmp")]
#[case::clamp("hello", "el", "i", "hiiio")]
#[case::negated("hello", "^l", "*", "**ll*")]
#[case::delete("hello", "l", "", "heo")]
#[case::multibyte("あいうあ", "あ", "ん", "んいうん")]
#[case::no_match("hello", "xyz", "ab", "hello")]
fn tr(#[case] text: &str, #[case] from: &str, #[case] to: &str, #[case] expected: &str) {
    let buf = CharBuf::from(text);
    assert_eq!(buf.tr(from.as_bytes(), to.as_bytes()), expected);
    assert_eq!(buf, text);
}

#[test]
fn tr_in_place_reports_change() {
    let mut buf = CharBuf::from("hello");
    assert!(buf.tr_in_place(b"l", b"r"));
    assert_eq!(buf, "herro");
    assert!(!buf.tr_in_place(b"xyz", b"a"));
    assert_eq!(buf, "herro");
}

#[test]
fn tr_in_place_identity_mapping_is_not_a_change() {
    let mut buf = CharBuf::from("abc");
    assert!(!buf.tr_in_place(b"a", b"a"));
    assert_eq!(buf, "abc");
    assert!(!buf.tr_in_place(b"a-c", b"a-c"));
    assert_eq!(buf, "abc");
}

#[rstest]
#[case::crlf("line\r\n", "line")]
#[case::lf("line\n", "line")]
#[case::cr("line\r", "line")]
#[case::lf_cr("line\n\r", "line\n")]
#[case::none("line", "line")]
#[case::empty("", "")]
fn chomp(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(CharBuf::from(text).chomp(), expected);
}

#[rstest]
#[case::both("  abc\t\n", "abc")]
#[case::inner_kept(" a b ", "a b")]
#[case::vertical_tab("\x0B\x0Cabc", "abc")]
#[case::all_space("   ", "")]
#[case::none("abc", "abc")]
fn strip(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(CharBuf::from(text).strip(), expected);
}

#[test]
fn lstrip_and_rstrip_are_one_sided() {
    let buf = CharBuf::from("  abc  ");
    assert_eq!(buf.lstrip(), "abc  ");
    assert_eq!(buf.rstrip(), "  abc");

    let mut buf = CharBuf::from("abc");
    assert!(!buf.lstrip_in_place());
    assert!(!buf.rstrip_in_place());
}

#[rstest]
#[case::first_byte(0, Some(b'a'))]
#[case::multibyte_lead(1, Some(0xE3))]
#[case::last(-1, Some(0x82))]
#[case::past(4, None)]
fn getbyte(#[case] index: isize, #[case] expected: Option<u8>) {
    // "aあ" is [0x61, 0xE3, 0x81, 0x82].
    assert_eq!(CharBuf::from("aあ").getbyte(index), expected);
}

#[rstest]
#[case::head(0, 2, Some(&b"he"[..]))]
#[case::clamped(3, 99, Some(&b"lo"[..]))]
#[case::negative(-2, 2, Some(&b"lo"[..]))]
#[case::at_end(5, 1, Some(&b""[..]))]
#[case::past(6, 1, None)]
#[case::negative_len(0, -1, None)]
fn byteslice(#[case] offset: isize, #[case] len: isize, #[case] expected: Option<&[u8]>) {
    let buf = CharBuf::from("hello");
    assert_eq!(buf.byteslice(offset, len), expected.map(CharBuf::from));
}

#[rstest]
#[case::ascii("a", Some(0x61))]
#[case::hiragana("あいう", Some(0x3042))]
#[case::emoji("😀", Some(0x1F600))]
#[case::empty("", None)]
fn ord(#[case] text: &str, #[case] expected: Option<u32>) {
    assert_eq!(CharBuf::from(text).ord(), expected);
}

#[test]
fn ord_of_malformed_is_first_byte() {
    assert_eq!(CharBuf::from(&[0xFF, b'a'][..]).ord(), Some(0xFF));
}

#[test]
fn ascii_only_and_validity() {
    assert!(CharBuf::from("abc").is_ascii_only());
    assert!(!CharBuf::from("あ").is_ascii_only());
    assert!(CharBuf::from("あ").is_valid_utf8());
    assert!(!CharBuf::from(&[0x61, 0x80][..]).is_valid_utf8());
}

#[test]
fn search_predicates() {
    let buf = CharBuf::from("あいう");
    assert!(buf.starts_with("あ".as_bytes()));
    assert!(buf.ends_with("う".as_bytes()));
    assert!(buf.contains("い".as_bytes()));
    assert!(!buf.contains(b"x"));
}

#[test]
fn byte_offset_scans_characters() {
    let buf = CharBuf::from("aあb");
    assert_eq!(buf.byte_offset(0), Some(0));
    assert_eq!(buf.byte_offset(1), Some(1));
    assert_eq!(buf.byte_offset(2), Some(4));
    assert_eq!(buf.byte_offset(3), None);
    assert_eq!(buf.byte_offset(-1), Some(4));
}

#[test]
fn push_codepoint_appends_encoded() {
    let mut buf = CharBuf::from("a");
    buf.push_codepoint(0x3042).unwrap();
    assert_eq!(buf, "aあ");
    assert!(buf.push_codepoint(0xD800).is_err());
    assert_eq!(buf, "aあ");
}

#[test]
fn malformed_bytes_pass_through_transforms() {
    let buf = CharBuf::from(&[b'a', 0x80, b'b'][..]);
    assert_eq!(buf.char_len(), 3);
    assert_eq!(buf.upcase(), &[b'A', 0x80, b'B']);
    assert_eq!(buf.reverse(), &[b'b', 0x80, b'a']);
    assert_eq!(buf.tr(b"ab", b"xy"), &[b'x', 0x80, b'y']);
}

#[test]
fn equality_ignores_capacity() {
    let mut buf = CharBuf::with_capacity(64);
    buf.push_bytes(b"abc");
    assert_eq!(buf, CharBuf::from("abc"));
    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.byte_len(), 0);
}
