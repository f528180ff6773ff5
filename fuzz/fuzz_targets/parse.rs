#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyc::frontend::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse whatever the scanner produced, even a partial token list
        let scanned = lexer::scan(s);
        let _ = parser::parse(&scanned.tokens);
    }
});
