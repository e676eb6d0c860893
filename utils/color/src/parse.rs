use crate::HexColorError;

const fn parse_runtime_hex_digit(b: u8, index: usize) -> Result<u8, HexColorError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(HexColorError::InvalidDigit(index)),
    }
}

fn parse_runtime_hex_byte(bytes: &[u8], index: usize) -> Result<u8, HexColorError> {
    let hi = parse_runtime_hex_digit(bytes[index], index)?;
    let lo = parse_runtime_hex_digit(bytes[index + 1], index + 1)?;
    Ok((hi << 4) | lo)
}

// #RGB: every digit doubles, so 0xA becomes 0xAA
fn parse_runtime_short_byte(bytes: &[u8], index: usize) -> Result<u8, HexColorError> {
    parse_runtime_hex_digit(bytes[index], index).map(|digit| digit * 17)
}

/// Parses `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB` into red, green and blue bytes.
pub fn parse_hex_color_runtime(s: &str) -> Result<(u8, u8, u8), HexColorError> {
    let bytes = s.as_bytes();
    let offset = usize::from(bytes.first() == Some(&b'#'));

    match bytes.len() - offset {
        3 => Ok((
            parse_runtime_short_byte(bytes, offset)?,
            parse_runtime_short_byte(bytes, offset + 1)?,
            parse_runtime_short_byte(bytes, offset + 2)?,
        )),
        6 => Ok((
            parse_runtime_hex_byte(bytes, offset)?,
            parse_runtime_hex_byte(bytes, offset + 2)?,
            parse_runtime_hex_byte(bytes, offset + 4)?,
        )),
        len => Err(HexColorError::InvalidLength(len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_duplicates_digits() {
        assert_eq!(parse_hex_color_runtime("abc"), Ok((0xAA, 0xBB, 0xCC)));
        assert_eq!(parse_hex_color_runtime("#60A"), Ok((0x66, 0x00, 0xAA)));
    }

    #[test]
    fn long_form_reads_byte_pairs() {
        assert_eq!(parse_hex_color_runtime("#c0FFeE"), Ok((0xC0, 0xFF, 0xEE)));
        assert_eq!(parse_hex_color_runtime("806099"), Ok((0x80, 0x60, 0x99)));
    }

    #[test]
    fn reports_digit_position() {
        assert_eq!(
            parse_hex_color_runtime("#A0A0G0"),
            Err(HexColorError::InvalidDigit(5))
        );
        assert_eq!(
            parse_hex_color_runtime("##FF"),
            Err(HexColorError::InvalidDigit(1))
        );
    }

    #[test]
    fn reports_length() {
        assert_eq!(parse_hex_color_runtime(""), Err(HexColorError::InvalidLength(0)));
        assert_eq!(parse_hex_color_runtime("#"), Err(HexColorError::InvalidLength(0)));
        assert_eq!(
            parse_hex_color_runtime("##FFF"),
            Err(HexColorError::InvalidLength(4))
        );
    }
}
