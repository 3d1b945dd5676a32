//! Media object properties as exposed over `org.gnome.UPnP.MediaObject2` and
//! `org.gnome.UPnP.MediaItem2`.
//!
//! Property codes are grouped by value type so that a caller can bucket a
//! query by wire type with a simple range check:
//!
//! | codes     | type                  |
//! |-----------|-----------------------|
//! | `1`       | `x` (64-bit integer)  |
//! | `11..=20` | `i` (32-bit integer)  |
//! | `31..=34` | `o` (object path)     |
//! | `41..=48` | `s` (string)          |
//! | `51`      | `as` (string array)   |
//!
//! Every other code below [`PROPERTY_COUNT`] is unused.

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size of the code space. Valid codes are `0..PROPERTY_COUNT`.
pub const PROPERTY_COUNT: usize = 52;

/// Property names indexed by code. Unused codes map to `""`.
#[rustfmt::skip]
pub static PROPERTIES: [&str; PROPERTY_COUNT] = [
    "",
    "Size",
    "", "", "", "", "", "", "", "", "",
    "Duration",
    "Bitrate",
    "SampleRate",
    "BitsPerSample",
    "Width",
    "Height",
    "ColorDepth",
    "PixelWidth",
    "PixelHeight",
    "TrackNumber",
    "", "", "", "", "", "", "", "", "", "",
    "Parent",
    "Path",
    "Thumbnail",
    "AlbumArt",
    "", "", "", "", "", "",
    "Type",
    "DisplayName",
    "MIMEType",
    "Artist",
    "Album",
    "Date",
    "Genre",
    "DLNAProfile",
    "", "",
    "URLs",
];

/// Which codes apply to which media type, indexed by `[MediaType::index()][code]`.
///
/// Note that `DLNAProfile` is not part of the item row.
pub static FILTER: [[bool; PROPERTY_COUNT]; 2] = [
    // MediaItem
    mask(&[
        1, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 31, 32, 33, 34, 41, 42, 43, 44, 45, 46, 47, 51,
    ]),
    // MediaContainer
    mask(&[31, 32, 41, 42]),
];

const fn mask(codes: &[u8]) -> [bool; PROPERTY_COUNT] {
    let mut row = [false; PROPERTY_COUNT];
    let mut i = 0;

    while i < codes.len() {
        row[codes[i] as usize] = true;
        i += 1;
    }

    row
}

/// Name of the property with the given code, or `""` if the code is unused
/// or out of range.
pub fn property_name(code: usize) -> &'static str {
    PROPERTIES.get(code).copied().unwrap_or("")
}

/// Whether property `code` applies to the media type at `type_index`
/// (`0` = item, `1` = container). Out-of-range arguments yield `false`.
pub fn is_applicable(type_index: usize, code: usize) -> bool {
    FILTER
        .get(type_index)
        .and_then(|row| row.get(code))
        .copied()
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("unknown property code {0}")]
    UnknownCode(u8),
    #[error("unknown property name \"{0}\"")]
    UnknownName(String),
    #[error("unknown media type index {0}")]
    UnknownMediaType(usize),
}

/// A used property code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Property {
    Size = 1,
    // video and audio/music
    Duration = 11,
    Bitrate = 12,
    SampleRate = 13,
    BitsPerSample = 14,
    // video and images
    Width = 15,
    Height = 16,
    ColorDepth = 17,
    PixelWidth = 18,
    PixelHeight = 19,
    // music
    TrackNumber = 20,
    Parent = 31,
    Path = 32,
    Thumbnail = 33,
    // audio and music
    AlbumArt = 34,
    Type = 41,
    DisplayName = 42,
    MimeType = 43,
    Artist = 44,
    Album = 45,
    Date = 46,
    Genre = 47,
    DlnaProfile = 48,
    Urls = 51,
}

impl Property {
    /// All properties in code order.
    pub const ALL: [Property; 24] = [
        Property::Size,
        Property::Duration,
        Property::Bitrate,
        Property::SampleRate,
        Property::BitsPerSample,
        Property::Width,
        Property::Height,
        Property::ColorDepth,
        Property::PixelWidth,
        Property::PixelHeight,
        Property::TrackNumber,
        Property::Parent,
        Property::Path,
        Property::Thumbnail,
        Property::AlbumArt,
        Property::Type,
        Property::DisplayName,
        Property::MimeType,
        Property::Artist,
        Property::Album,
        Property::Date,
        Property::Genre,
        Property::DlnaProfile,
        Property::Urls,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// The D-Bus property name, e.g. `"MIMEType"`.
    pub fn name(self) -> &'static str {
        PROPERTIES[self.code() as usize]
    }

    pub fn value_type(self) -> ValueType {
        use Property::*;

        match self {
            Size => ValueType::Int64,
            Duration | Bitrate | SampleRate | BitsPerSample | Width | Height | ColorDepth
            | PixelWidth | PixelHeight | TrackNumber => ValueType::Int32,
            Parent | Path | Thumbnail | AlbumArt => ValueType::ObjectPath,
            Type | DisplayName | MimeType | Artist | Album | Date | Genre | DlnaProfile => {
                ValueType::String
            }
            Urls => ValueType::StringArray,
        }
    }

    /// The interface that declares this property.
    pub fn interface(self) -> Interface {
        match self {
            Property::Parent | Property::Path | Property::Type | Property::DisplayName => {
                Interface::MediaObject2
            }
            _ => Interface::MediaItem2,
        }
    }
}

impl TryFrom<u8> for Property {
    type Error = PropertyError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Property::ALL
            .iter()
            .copied()
            .find(|property| property.code() == code)
            .ok_or(PropertyError::UnknownCode(code))
    }
}

impl FromStr for Property {
    type Err = PropertyError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .iter()
            .copied()
            .find(|property| property.name() == name)
            .ok_or_else(|| PropertyError::UnknownName(name.to_owned()))
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wire type of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueType {
    Int64,
    Int32,
    ObjectPath,
    String,
    StringArray,
}

impl ValueType {
    /// D-Bus type signature.
    pub fn signature(self) -> &'static str {
        match self {
            ValueType::Int64 => "x",
            ValueType::Int32 => "i",
            ValueType::ObjectPath => "o",
            ValueType::String => "s",
            ValueType::StringArray => "as",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Interface {
    MediaObject2,
    MediaItem2,
    MediaContainer2,
}

impl Interface {
    pub fn name(self) -> &'static str {
        match self {
            Interface::MediaObject2 => "org.gnome.UPnP.MediaObject2",
            Interface::MediaItem2 => "org.gnome.UPnP.MediaItem2",
            Interface::MediaContainer2 => "org.gnome.UPnP.MediaContainer2",
        }
    }
}

/// The two kinds of media object a property query can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MediaType {
    Item,
    Container,
}

impl MediaType {
    /// Row of this type in [`FILTER`].
    pub fn index(self) -> usize {
        match self {
            MediaType::Item => 0,
            MediaType::Container => 1,
        }
    }

    /// The interface implemented by objects of this type.
    pub fn interface(self) -> Interface {
        match self {
            MediaType::Item => Interface::MediaItem2,
            MediaType::Container => Interface::MediaContainer2,
        }
    }

    pub fn applies(self, property: Property) -> bool {
        is_applicable(self.index(), property.code() as usize)
    }

    /// Applicable properties in code order.
    pub fn properties(self) -> impl Iterator<Item = Property> {
        Property::ALL
            .into_iter()
            .filter(move |property| self.applies(*property))
    }
}

impl TryFrom<usize> for MediaType {
    type Error = PropertyError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(MediaType::Item),
            1 => Ok(MediaType::Container),
            _ => Err(PropertyError::UnknownMediaType(index)),
        }
    }
}
