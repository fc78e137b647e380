#![no_main]

use libfuzzer_sys::fuzz_target;
use tagc::backend::{EmitConfig, generate_artifacts};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Lexing never fails; parse errors are expected, panics are not
        let _ = generate_artifacts(s, &EmitConfig::default());
    }
});
