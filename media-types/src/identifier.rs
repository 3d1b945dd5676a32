//! Identifier components and object paths.

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether `byte` may appear unescaped in an identifier component.
///
/// ASCII letters are always allowed; ASCII digits everywhere except the first
/// position. Everything else, including `_`, must be escaped.
pub fn is_identifier_byte(byte: u8, is_first: bool) -> bool {
    byte.is_ascii_alphabetic() || (byte.is_ascii_digit() && !is_first)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier must not be empty")]
    Empty,
    #[error("invalid byte 0x{byte:02x} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },
}

/// A valid identifier component: nonempty, `[A-Za-z0-9_]`, no leading digit.
///
/// Usable as a D-Bus object path component, interface or bus name element, or
/// member name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Identifier(String);

impl Identifier {
    /// Wraps `inner` without validation.
    ///
    /// The caller guarantees that `inner` satisfies [`Identifier::verify`].
    #[doc(hidden)]
    pub fn unvalidated(inner: String) -> Self {
        debug_assert!(Self::verify(&inner).is_ok());

        Self(inner)
    }

    pub fn verify(value: &str) -> Result<(), IdentifierError> {
        if value.is_empty() {
            return Err(IdentifierError::Empty);
        }

        match value
            .bytes()
            .enumerate()
            .find(|(offset, byte)| !(*byte == b'_' || is_identifier_byte(*byte, *offset == 0)))
        {
            Some((offset, byte)) => Err(IdentifierError::InvalidByte { offset, byte }),
            None => Ok(()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::verify(&value)?;

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::verify(value)?;

        Ok(Self(value.to_owned()))
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectPathError {
    #[error("object path must not be empty")]
    Empty,
    #[error("object path must start with '/'")]
    NotAbsolute,
    #[error("object path must not end with '/'")]
    TrailingSlash,
    #[error("object path contains an empty segment")]
    EmptySegment,
    #[error("object path segment \"{0}\" contains invalid characters")]
    InvalidSegment(String),
}

/// A D-Bus object path such as `/org/gnome/UPnP/MediaServer2/Music`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ObjectPath(String);

impl ObjectPath {
    pub fn new(path: impl Into<String>) -> Result<Self, ObjectPathError> {
        let path = path.into();
        Self::verify(&path)?;

        Ok(Self(path))
    }

    pub fn root() -> Self {
        Self(String::from("/"))
    }

    pub fn verify(path: &str) -> Result<(), ObjectPathError> {
        if path.is_empty() {
            return Err(ObjectPathError::Empty);
        }

        if path == "/" {
            return Ok(());
        }

        let Some(rest) = path.strip_prefix('/') else {
            return Err(ObjectPathError::NotAbsolute);
        };

        if rest.ends_with('/') {
            return Err(ObjectPathError::TrailingSlash);
        }

        for segment in rest.split('/') {
            if segment.is_empty() {
                return Err(ObjectPathError::EmptySegment);
            }

            if !segment
                .bytes()
                .all(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
            {
                return Err(ObjectPathError::InvalidSegment(segment.to_owned()));
            }
        }

        Ok(())
    }

    /// Path of the child object named `component`.
    pub fn child(&self, component: &Identifier) -> ObjectPath {
        let mut path = String::with_capacity(self.0.len() + 1 + component.as_str().len());
        path.push_str(&self.0);
        if self.0 != "/" {
            path.push('/');
        }
        path.push_str(component.as_str());

        ObjectPath(path)
    }

    /// Segments of the path, root first. The root path has none.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|segment| !segment.is_empty())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ObjectPath {
    type Error = ObjectPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for ObjectPath {
    type Err = ObjectPathError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl From<ObjectPath> for String {
    fn from(path: ObjectPath) -> Self {
        path.0
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier_byte() {
        assert!(is_identifier_byte(b'a', true));
        assert!(is_identifier_byte(b'Z', true));
        assert!(!is_identifier_byte(b'0', true));
        assert!(is_identifier_byte(b'0', false));
        assert!(!is_identifier_byte(b'_', false));
        assert!(!is_identifier_byte(b'-', false));
        assert!(!is_identifier_byte(0xff, false));
    }

    #[test]
    fn test_identifier() {
        for valid in ["a", "_", "_30abc", "Music_5fFolder", "x9"] {
            let identifier = Identifier::try_from(valid).unwrap();
            assert_eq!(identifier.as_str(), valid);
            assert_eq!(identifier.to_string(), valid);
        }

        assert_eq!(Identifier::try_from(""), Err(IdentifierError::Empty));
        assert_eq!(
            Identifier::try_from("9lives"),
            Err(IdentifierError::InvalidByte {
                offset: 0,
                byte: b'9'
            })
        );
        assert_eq!(
            "my-file".parse::<Identifier>(),
            Err(IdentifierError::InvalidByte {
                offset: 2,
                byte: b'-'
            })
        );
    }

    #[test]
    fn test_object_path_verify() {
        assert!(ObjectPath::new("/").is_ok());
        assert!(ObjectPath::new("/org/gnome/UPnP/MediaServer2").is_ok());

        assert_eq!(ObjectPath::new(""), Err(ObjectPathError::Empty));
        assert_eq!(ObjectPath::new("org"), Err(ObjectPathError::NotAbsolute));
        assert_eq!(ObjectPath::new("/org/"), Err(ObjectPathError::TrailingSlash));
        assert_eq!(ObjectPath::new("/org//x"), Err(ObjectPathError::EmptySegment));
        assert_eq!(
            ObjectPath::new("/org/gnome-x"),
            Err(ObjectPathError::InvalidSegment("gnome-x".into()))
        );
    }

    #[test]
    fn test_object_path_child() {
        let music = Identifier::try_from("Music").unwrap();
        let rock = Identifier::try_from("_30s_20rock").unwrap();

        let path = ObjectPath::root().child(&music);
        assert_eq!(path.as_str(), "/Music");

        let path = ObjectPath::new("/org/gnome/UPnP/MediaServer2")
            .unwrap()
            .child(&music)
            .child(&rock);
        assert_eq!(path.as_str(), "/org/gnome/UPnP/MediaServer2/Music/_30s_20rock");
        assert_eq!(
            path.components().collect::<Vec<_>>(),
            vec!["org", "gnome", "UPnP", "MediaServer2", "Music", "_30s_20rock"]
        );
        assert_eq!(ObjectPath::root().components().count(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let identifier: Identifier = serde_json::from_str("\"Music\"").unwrap();
        assert_eq!(identifier.as_str(), "Music");
        assert!(serde_json::from_str::<Identifier>("\"1up\"").is_err());
        assert_eq!(serde_json::to_string(&identifier).unwrap(), "\"Music\"");

        let path: ObjectPath = serde_json::from_str("\"/a/b\"").unwrap();
        assert_eq!(path.as_str(), "/a/b");
        assert!(serde_json::from_str::<ObjectPath>("\"a/b\"").is_err());
    }
}
