//! Pure policy tree model (no IO).
//!
//! Input: a policy tree constructed elsewhere, with provenance attached afterwards.
//! Output: filtered sub-trees, aggregate counts, and content hashes.

#![forbid(unsafe_code)]

pub mod model;
pub mod options;

mod aggregate;
mod filter;
mod fingerprint;

pub use aggregate::PolicyProperties;
pub use fingerprint::HashMode;
pub use model::{Check, Policies, Policy, View};
pub use options::{EffectiveConfig, RenderOptions};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
