use media_ident::{
    escape_as_identifier, escape_to_identifier, unescape_identifier,
    types::{Identifier, MediaType, ObjectPath, Property},
};

const ROOT: &str = "/org/gnome/UPnP/MediaServer2";

/// Builds the object path of a nested media object and checks that each
/// component decodes back to its original name.
fn walk(names: &[&[u8]]) -> ObjectPath {
    let mut path = ObjectPath::new(ROOT).unwrap();

    for name in names {
        let component = escape_to_identifier(name);
        assert_eq!(unescape_identifier(component.as_str()).unwrap(), *name);
        path = path.child(&component);
    }

    let components: Vec<&str> = path.components().skip(4).collect();
    assert_eq!(components.len(), names.len());
    for (component, name) in components.iter().zip(names) {
        assert_eq!(unescape_identifier(component).unwrap(), *name);
    }

    path
}

#[test]
/// A music library with the kind of names a file system produces.
fn test_music_library() {
    let path = walk(&[
        b"Music",
        b"Pink Floyd",
        b"1973 - The Dark Side of the Moon",
        b"01_speak_to_me.flac",
    ]);

    assert_eq!(
        path.as_str(),
        "/org/gnome/UPnP/MediaServer2/Music/Pink_20Floyd\
         /_31973_20_2d_20The_20Dark_20Side_20of_20the_20Moon\
         /_301_5fspeak_5fto_5fme_2eflac"
    );
}

#[test]
/// Non-UTF-8 and control bytes survive the trip.
fn test_raw_bytes() {
    let path = walk(&[b"", b"\x00", b"\xff\xfe", b"tab\there"]);

    assert_eq!(
        path.as_str(),
        "/org/gnome/UPnP/MediaServer2/_/_00/_ff_fe/tab_09here"
    );
}

#[test]
/// Names that differ only in characters that get escaped stay distinct.
fn test_distinct_names() {
    let names: &[&[u8]] = &[b"a b", b"a_b", b"a-b", b"a_20b", b"a", b"_", b""];

    let mut escaped: Vec<String> = names.iter().map(escape_as_identifier).collect();
    escaped.sort();
    escaped.dedup();

    assert_eq!(escaped.len(), names.len());
}

#[test]
fn test_escaped_components_are_identifiers() {
    for name in ["", "0", "_", "x.y", "Ünïcödé", "already_escaped_5f"] {
        let escaped = escape_as_identifier(name);
        assert_eq!(Identifier::try_from(escaped.as_str()).unwrap().as_str(), escaped);
    }
}

#[test]
/// A container exposes only the `MediaObject2` properties.
fn test_container_query() {
    let names: Vec<&str> = MediaType::Container
        .properties()
        .map(Property::name)
        .collect();

    assert_eq!(names, ["Parent", "Path", "Type", "DisplayName"]);
    assert_eq!(media_ident::property_name(1), "Size");
    assert!(media_ident::is_applicable(0, 1));
    assert!(!media_ident::is_applicable(1, 1));
}
