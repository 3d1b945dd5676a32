//! Reversible escaping of arbitrary bytes into identifier components.
//!
//! All non-alphanumerics, and the first byte if it is a digit, are replaced
//! with an underscore and two lowercase hex digits:
//!
//! ```text
//! "0123abc_xyz\x01\xff" -> _30123abc_5fxyz_01_ff
//! ```
//!
//! This is similar to URI encoding with `_` in the role of `%`. Since `_` is
//! escaped itself, distinct inputs map to distinct outputs. The empty input is
//! escaped to `"_"`.

use std::borrow::Cow;

use media_types::{is_identifier_byte, Identifier};

use crate::{
    error::Error,
    utils::{push_ascii, push_escaped},
};

/// Length of `escape_as_identifier(name)` without building it.
pub fn escaped_len(name: &[u8]) -> usize {
    if name.is_empty() {
        return 1;
    }

    name.iter()
        .enumerate()
        .map(|(position, byte)| {
            if is_identifier_byte(*byte, position == 0) {
                1
            } else {
                3
            }
        })
        .sum()
}

/// Escapes `name` so that it is a valid identifier component.
///
/// # Example
///
/// ```
/// use media_ident::escape_as_identifier;
///
/// assert_eq!(escape_as_identifier(""), "_");
/// assert_eq!(escape_as_identifier("Music"), "Music");
/// assert_eq!(escape_as_identifier("0123abc_xyz"), "_30123abc_5fxyz");
/// assert_eq!(escape_as_identifier(b"a\x01\xff"), "a_01_ff");
/// ```
pub fn escape_as_identifier(name: impl AsRef<[u8]>) -> String {
    let name = name.as_ref();

    if name.is_empty() {
        return String::from("_");
    }

    let len = escaped_len(name);

    // Every byte is an ASCII alphanumeric.
    if len == name.len() {
        let mut clean = String::with_capacity(len);
        push_ascii(&mut clean, name);
        return clean;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(input_len = name.len(), escaped_len = len, "escaping identifier");

    // `first_ok` is the first byte not yet copied.
    let mut first_ok = 0;
    let mut escaped = String::with_capacity(len);

    for (position, byte) in name.iter().enumerate() {
        if !is_identifier_byte(*byte, position == 0) {
            if first_ok < position {
                push_ascii(&mut escaped, &name[first_ok..position]);
            }
            push_escaped(&mut escaped, *byte);
            first_ok = position + 1;
        }
    }

    if first_ok < name.len() {
        push_ascii(&mut escaped, &name[first_ok..]);
    }

    escaped
}

/// Like [`escape_as_identifier`], but borrows `name` when it needs no escaping.
pub fn escape_cow(name: &str) -> Cow<'_, str> {
    if !name.is_empty() && escaped_len(name.as_bytes()) == name.len() {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(escape_as_identifier(name))
    }
}

/// Escapes `name`, failing with [`Error::InvalidArgument`] if it is absent.
pub fn try_escape_as_identifier(name: Option<&[u8]>) -> Result<String, Error> {
    name.map(escape_as_identifier).ok_or(Error::InvalidArgument)
}

/// Escapes `name` into a validated [`Identifier`].
pub fn escape_to_identifier(name: impl AsRef<[u8]>) -> Identifier {
    Identifier::unvalidated(escape_as_identifier(name))
}
