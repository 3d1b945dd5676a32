//! Misuse-resistant types for media-server objects: validated identifier
//! components, object paths, and the static property tables.

pub mod identifier;
pub mod property;

pub use identifier::{
    is_identifier_byte, Identifier, IdentifierError, ObjectPath, ObjectPathError,
};
pub use property::{
    is_applicable, property_name, Interface, MediaType, Property, PropertyError, ValueType,
    FILTER, PROPERTIES, PROPERTY_COUNT,
};
