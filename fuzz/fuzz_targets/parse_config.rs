#![no_main]

use libfuzzer_sys::fuzz_target;

/// Fuzz target for the document loader
///
/// Any byte sequence must come back as a `Result`, never a panic. This
/// exercises the YAML parser, the key scan, typed deserialization, and the
/// rule checks in one pass.

fuzz_target!(|data: &[u8]| {
    if let Ok(src) = std::str::from_utf8(data) {
        let _ = recordar::config::config_from_str(src);
    }
});
