const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Appends `_` followed by the two lowercase hex digits of `byte`.
pub(crate) fn push_escaped(out: &mut String, byte: u8) {
    out.push('_');
    out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
    out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
}

/// Appends bytes that are known to be ASCII.
pub(crate) fn push_ascii(out: &mut String, bytes: &[u8]) {
    out.extend(bytes.iter().map(|byte| char::from(*byte)));
}

/// Value of a lowercase hex digit.
pub(crate) fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_escaped() {
        let mut out = String::new();
        for byte in [0x00, 0x01, 0x5f, 0xa0, 0xff] {
            push_escaped(&mut out, byte);
        }
        assert_eq!(out, "_00_01_5f_a0_ff");
    }

    #[test]
    fn test_hex_value() {
        assert_eq!(hex_value(b'0'), Some(0));
        assert_eq!(hex_value(b'9'), Some(9));
        assert_eq!(hex_value(b'a'), Some(10));
        assert_eq!(hex_value(b'f'), Some(15));
        assert_eq!(hex_value(b'F'), None);
        assert_eq!(hex_value(b'g'), None);
    }
}
