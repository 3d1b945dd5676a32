//! Reversible identifier escaping for media-server object names, plus the
//! static property tables used when querying media objects.

pub mod error;
pub mod escape;
pub mod parse;
mod utils;

pub use media_types as types;

pub use error::{Error, UnescapeErrorKind};
pub use escape::{
    escape_as_identifier, escape_cow, escape_to_identifier, escaped_len,
    try_escape_as_identifier,
};
pub use media_types::{is_applicable, is_identifier_byte, property_name};
pub use parse::identifier::unescape_identifier;
