#![no_main]

use libfuzzer_sys::fuzz_target;

// Parsing must reject malformed maps with an error, never a panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = skirmish::parse_scenario(text);
    }
});
