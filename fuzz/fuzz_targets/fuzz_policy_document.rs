//! Fuzz target for policy document and provenance index parsing.
//!
//! Goal: The parsers should **never panic** on any input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_document
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = policytree_document::parse_policy_toml(text);
        let _ = policytree_document::parse_meta_json(text);
    }
});
