//! nom parsers for escaped identifiers.
//!
//! ```abnf
//! escaped-identifier = "_" / ( first-unit *unit )
//! first-unit         = ( ALPHA *( ALPHA / DIGIT ) ) / escape
//! unit               = 1*( ALPHA / DIGIT ) / escape
//! escape             = "_" 2LHEXDIG
//! LHEXDIG            = DIGIT / %x61-66
//! ```

#![allow(non_snake_case)]

use abnf_core::streaming::{is_ALPHA, is_DIGIT};
use nom::{
    bytes::complete::{tag, take_while_m_n},
    combinator::map_opt,
    sequence::preceded,
    IResult,
};

use crate::utils::hex_value;

pub mod identifier;

/// LHEXDIG = DIGIT / %x61-66
pub fn is_LHEXDIG(byte: u8) -> bool {
    is_DIGIT(byte) || matches!(byte, b'a'..=b'f')
}

pub(crate) fn is_alnum(byte: u8) -> bool {
    is_ALPHA(byte) || is_DIGIT(byte)
}

/// escape = "_" 2LHEXDIG
///
/// Returns the escaped byte.
pub fn escape(input: &[u8]) -> IResult<&[u8], u8> {
    let parser = preceded(tag("_"), take_while_m_n(2, 2, is_LHEXDIG));

    let (remaining, byte) = map_opt(parser, |hex: &[u8]| {
        Some(hex_value(hex[0])? << 4 | hex_value(hex[1])?)
    })(input)?;

    Ok((remaining, byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(b"_00"), Ok((&b""[..], 0x00)));
        assert_eq!(escape(b"_5fabc"), Ok((&b"abc"[..], 0x5f)));
        assert_eq!(escape(b"_ff"), Ok((&b""[..], 0xff)));

        assert!(escape(b"_FF").is_err());
        assert!(escape(b"_f").is_err());
        assert!(escape(b"5f").is_err());
        assert!(escape(b"").is_err());
    }

    #[test]
    fn test_is_LHEXDIG() {
        assert!(b"0123456789abcdef".iter().all(|b| is_LHEXDIG(*b)));
        assert!(!b"ABCDEFg_ -".iter().any(|b| is_LHEXDIG(*b)));
    }
}
