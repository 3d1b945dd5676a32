#![no_main]
use libfuzzer_sys::fuzz_target;
use media_ident::{escape_as_identifier, escaped_len, unescape_identifier};

fuzz_target!(|data: &[u8]| {
    // Let's escape the bytes ...
    let escaped = escape_as_identifier(data);
    assert_eq!(escaped.len(), escaped_len(data));

    // ... decode them again ...
    let decoded = unescape_identifier(&escaped).unwrap();

    // ... and verify that we got the same bytes.
    assert_eq!(decoded, data);

    // Whatever the fuzzer hands us as an escaped identifier must either be
    // rejected or be canonical.
    if let Ok(escaped) = std::str::from_utf8(data) {
        if let Ok(decoded) = unescape_identifier(escaped) {
            assert_eq!(escape_as_identifier(decoded), escaped);
        }
    }
});
