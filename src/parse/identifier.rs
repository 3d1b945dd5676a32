use abnf_core::streaming::{is_ALPHA, is_DIGIT};
use media_types::is_identifier_byte;
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1, take_while_m_n},
    combinator::{map, recognize},
    multi::many0,
    sequence::tuple,
    IResult,
};

use crate::{
    error::{Error, UnescapeErrorKind},
    parse::{escape, is_LHEXDIG, is_alnum},
};

/// A piece of an escaped identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit<'a> {
    /// Alphanumerics copied verbatim.
    Literal(&'a [u8]),
    /// A single byte written as `_xx`.
    Escaped(u8),
}

/// first-unit = ( ALPHA *( ALPHA / DIGIT ) ) / escape
pub fn first_unit(input: &[u8]) -> IResult<&[u8], Unit<'_>> {
    let literal = recognize(tuple((
        take_while_m_n(1, 1, is_ALPHA),
        take_while(is_alnum),
    )));

    alt((map(literal, Unit::Literal), map(escape, Unit::Escaped)))(input)
}

/// unit = 1*( ALPHA / DIGIT ) / escape
pub fn unit(input: &[u8]) -> IResult<&[u8], Unit<'_>> {
    alt((
        map(take_while1(is_alnum), Unit::Literal),
        map(escape, Unit::Escaped),
    ))(input)
}

/// escaped-identifier = "_" / ( first-unit *unit )
///
/// This only checks the grammar. Use [`unescape_identifier`] to also reject
/// escapes of bytes that never need escaping.
pub fn escaped_identifier(input: &[u8]) -> IResult<&[u8], Vec<Unit<'_>>> {
    if input == b"_" {
        return Ok((&input[1..], Vec::new()));
    }

    let mut parser = tuple((first_unit, many0(unit)));

    let (remaining, (first, rest)) = parser(input)?;

    let mut units = Vec::with_capacity(rest.len() + 1);
    units.push(first);
    units.extend(rest);

    Ok((remaining, units))
}

/// Decodes an identifier produced by [`escape_as_identifier`](crate::escape_as_identifier).
///
/// Only canonical encodings are accepted, so for every `escaped` that decodes
/// successfully, escaping the result yields `escaped` again.
///
/// # Example
///
/// ```
/// use media_ident::unescape_identifier;
///
/// assert_eq!(unescape_identifier("_").unwrap(), b"");
/// assert_eq!(unescape_identifier("_30123abc_5fxyz").unwrap(), b"0123abc_xyz");
/// assert!(unescape_identifier("a_41").is_err());
/// ```
pub fn unescape_identifier(escaped: &str) -> Result<Vec<u8>, Error> {
    let input = escaped.as_bytes();

    if input.is_empty() {
        return Err(reject(0, UnescapeErrorKind::Empty));
    }

    if input == b"_" {
        return Ok(Vec::new());
    }

    let mut decoded = Vec::with_capacity(input.len());
    let mut remaining = input;

    while !remaining.is_empty() {
        let offset = input.len() - remaining.len();
        let is_first = offset == 0;

        let parsed = if is_first {
            first_unit(remaining)
        } else {
            unit(remaining)
        };

        let (rest, piece) = parsed.map_err(|_| diagnose(remaining, offset))?;

        match piece {
            Unit::Literal(literal) => decoded.extend_from_slice(literal),
            Unit::Escaped(byte) => {
                if is_identifier_byte(byte, is_first) {
                    return Err(reject(offset, UnescapeErrorKind::NonCanonicalEscape(byte)));
                }
                decoded.push(byte);
            }
        }

        remaining = rest;
    }

    Ok(decoded)
}

/// Explains why no unit could be parsed at `offset`.
fn diagnose(input: &[u8], offset: usize) -> Error {
    match input {
        [] => reject(offset, UnescapeErrorKind::Empty),
        [b'_', hex @ ..] => match hex.iter().take(2).position(|byte| !is_LHEXDIG(*byte)) {
            Some(position) => reject(
                offset + 1 + position,
                UnescapeErrorKind::InvalidHexDigit(hex[position]),
            ),
            None => reject(offset, UnescapeErrorKind::TruncatedEscape),
        },
        [byte, ..] if is_DIGIT(*byte) => reject(offset, UnescapeErrorKind::LeadingDigit),
        [byte, ..] => reject(offset, UnescapeErrorKind::InvalidCharacter(*byte)),
    }
}

fn reject(offset: usize, kind: UnescapeErrorKind) -> Error {
    #[cfg(feature = "tracing")]
    tracing::debug!(offset, %kind, "rejected escaped identifier");

    Error::Unescape { offset, kind }
}
