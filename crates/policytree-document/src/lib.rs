//! Document adapters: turn policy documents into policy trees and attach provenance.
//!
//! This crate is IO-free. Callers read files and pass their contents as strings.
//! Parsing enforces the structural rules the tree model assumes but never checks:
//! unique sibling names and `source` exclusivity.

#![forbid(unsafe_code)]

mod convert;
mod error;
mod meta;
mod schema;

pub use error::DocumentError;
pub use meta::{MetaIndex, attach_meta, parse_meta_json};
pub use schema::{CheckBlock, PolicyBlock, PolicyDocument, ViewBlock};

use policytree_domain::Policies;

/// Parse a TOML policy document into its top-level policies.
///
/// Never panics on any input; malformed or structurally invalid documents yield an error.
pub fn parse_policy_toml(text: &str) -> Result<Policies, DocumentError> {
    let doc: PolicyDocument = toml::from_str(text)?;
    let policies = convert::build_policies(doc)?;
    tracing::debug!(policies = policies.len(), "parsed policy document");
    Ok(policies)
}
