//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{PolicytreeConfigV1, RenderConfig};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `policytree.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PolicytreeConfigV1> {
    let cfg: PolicytreeConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the use cases (file values + overrides).
pub fn resolve_config(
    cfg: PolicytreeConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
