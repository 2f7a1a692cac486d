use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes.
///
/// The color must have exactly six hexadecimal digits, in either case, and may
/// have one leading `#`. This function does not trim white space; callers
/// that read colors from users must do so before parsing. It also rejects the
/// three-digit shorthand and eight-digit colors with alpha.
pub(crate) fn parse(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);

    // Checking for ASCII hex digits first also rules out a leading `+`, which
    // u8::from_str_radix would accept, and guarantees valid slice bounds.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::InvalidFormat);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::InvalidFormat)?;
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::InvalidFormat)
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, ColorFormatError};

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(parse("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse("112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse("#FF5733")?, [0xff_u8, 0x57, 0x33]);
        assert_eq!(parse("#ff5733")?, [0xff_u8, 0x57, 0x33]);
        assert_eq!(parse("aBcDeF")?, [0xab_u8, 0xcd, 0xef]);
        assert_eq!(parse("#000000")?, [0_u8, 0, 0]);
        assert_eq!(parse("FFFFFF")?, [0xff_u8, 0xff, 0xff]);
        Ok(())
    }

    #[test]
    fn test_parse_invalid() {
        for input in [
            "",
            "#",
            "12345",
            "#12345",
            "1234567",
            "GGGGGG",
            "#12345Z",
            "#123",
            "fff",
            "#11223344",
            "##112233",
            " #112233",
            "#112233 ",
            "+1+2+3",
            "#+12233",
            "11 223",
            "#💩00",
            "ａｂｃｄｅｆ",
        ] {
            assert_eq!(
                parse(input),
                Err(ColorFormatError::InvalidFormat),
                "input {:?} should be rejected",
                input
            );
        }
    }
}
