use charbuf::utf8::{self, Utf8Error};

use rstest::rstest;

fn expected_len(cp: u32) -> usize {
    match cp {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

#[test]
fn round_trip_every_scalar() {
    for cp in (0..=0x10_FFFF).filter(|cp| !(0xD800..=0xDFFF).contains(cp)) {
        let mut enc = [0u8; 4];
        let len = utf8::encode(cp, &mut enc).unwrap();
        assert_eq!(len, expected_len(cp), "U+{cp:04X}");
        assert_eq!(utf8::decode_first(&enc[..len]), Ok((cp, len)), "U+{cp:04X}");
    }
}

#[test]
fn every_surrogate_fails_both_ways() {
    let mut enc = [0u8; 4];
    for cp in 0xD800..=0xDFFF {
        assert_eq!(utf8::encode(cp, &mut enc), Err(Utf8Error::SurrogateCodepoint(cp)));
    }
    // The raw 3-byte encoding of U+D800.
    assert_eq!(
        utf8::decode_first(&[0xED, 0xA0, 0x80]),
        Err(Utf8Error::SurrogateCodepoint(0xD800))
    );
}

#[test]
fn codepoints_past_the_plane_limit_fail() {
    let mut enc = [0u8; 4];
    assert_eq!(
        utf8::encode(0x11_0000, &mut enc),
        Err(Utf8Error::CodepointOutOfRange(0x11_0000))
    );
    // 0xF4 0x90 0x80 0x80 would be U+110000.
    assert_eq!(
        utf8::decode_first(&[0xF4, 0x90, 0x80, 0x80]),
        Err(Utf8Error::CodepointOutOfRange(0x11_0000))
    );
}

#[rstest]
#[case::stray_continuation(&[0x80], Utf8Error::MalformedSequence)]
#[case::lead_then_ascii(&[0xC3, 0x41], Utf8Error::MalformedSequence)]
#[case::truncated_two(&[0xC3], Utf8Error::Truncated)]
#[case::truncated_three(&[0xE3, 0x81], Utf8Error::Truncated)]
#[case::truncated_four(&[0xF0, 0x9F, 0x98], Utf8Error::Truncated)]
#[case::overlong_two(&[0xC0, 0xAF], Utf8Error::OverlongEncoding)]
#[case::overlong_three(&[0xE0, 0x80, 0xAF], Utf8Error::OverlongEncoding)]
#[case::overlong_four(&[0xF0, 0x80, 0x80, 0xAF], Utf8Error::OverlongEncoding)]
fn malformed_input(#[case] bytes: &[u8], #[case] expected: Utf8Error) {
    assert_eq!(utf8::decode_first(bytes), Err(expected));
}

#[test]
fn error_messages_are_user_visible() {
    assert_eq!(
        Utf8Error::SurrogateCodepoint(0xD800).to_string(),
        "invalid codepoint in UTF-8 (U+D800)"
    );
    assert_eq!(
        Utf8Error::CodepointOutOfRange(0x11_0000).to_string(),
        "0x110000 out of char range"
    );
}

#[rstest]
#[case::ascii(b"abc", true)]
#[case::multibyte("あ😀".as_bytes(), true)]
#[case::empty(b"", true)]
#[case::stray(&[0x61, 0x80], false)]
#[case::truncated_tail(&[0x61, 0xE3, 0x81], false)]
fn validate(#[case] bytes: &[u8], #[case] expected: bool) {
    assert_eq!(utf8::validate(bytes), expected);
}
