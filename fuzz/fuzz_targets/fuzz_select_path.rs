//! Fuzz target for path selection over a parsed document.
//!
//! Any path against any well-formed tree must either select a named node or miss.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_select_path
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    document: String,
    path: String,
}

fuzz_target!(|input: Input| {
    let Ok(policies) = policytree_document::parse_policy_toml(&input.document) else {
        return;
    };
    let before = policies.clone();

    if let Some(selected) = policies.select(&input.path) {
        assert!(!selected.name.is_empty());
        assert!(selected.total_queries() <= policies.iter().map(|p| p.total_queries()).sum());
    }
    for policy in policies.iter() {
        let _ = policy.filter(&input.path);
        let _ = policy.structural_hash();
    }
    assert_eq!(policies, before);
});
