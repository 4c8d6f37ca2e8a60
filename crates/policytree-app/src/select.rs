//! The `list`, `select`, and `hash` use cases.

use crate::load::Loaded;
use policytree_domain::Policy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    /// `name//sub_policy` when provenance names a sub-policy.
    pub display: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashEntry {
    pub name: String,
    pub hash: String,
}

pub fn run_list(loaded: &Loaded) -> Vec<ListEntry> {
    loaded
        .policies
        .iter()
        .map(|p| ListEntry {
            name: p.name.clone(),
            display: p.to_string(),
            version: p.version().to_string(),
        })
        .collect()
}

/// Select a node by path; the first segment names the top-level policy.
///
/// Returns `None` when no policy or check matches.
pub fn run_select(loaded: &Loaded, path: &str) -> Option<Policy> {
    let selected = loaded.policies.select(path);
    match &selected {
        Some(p) => tracing::info!(path, selected = %p.name, checks = p.total_queries(), "selected"),
        None => tracing::info!(path, "nothing matches path"),
    }
    selected
}

/// Content hashes in the configured mode: every top-level policy, or the node at `path`.
///
/// Returns `None` when `path` matches nothing.
pub fn run_hash(loaded: &Loaded, path: Option<&str>) -> Option<Vec<HashEntry>> {
    let mode = loaded.config.hash_mode;
    let entry = |p: &Policy| HashEntry {
        name: p.name.clone(),
        hash: p.content_hash(mode),
    };

    match path {
        Some(path) => run_select(loaded, path).map(|p| vec![entry(&p)]),
        None => Some(loaded.policies.iter().map(entry).collect()),
    }
}
