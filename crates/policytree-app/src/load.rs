//! The `load` use case: parse config, build the policy tree, attach provenance.

use anyhow::Context;
use policytree_domain::{EffectiveConfig, Policies};
use policytree_settings::Overrides;

/// Input for the load use case.
#[derive(Clone, Debug, Default)]
pub struct LoadInput<'a> {
    /// Policy document contents (TOML).
    pub document_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Provenance index contents (JSON), when one was produced.
    pub meta_text: Option<&'a str>,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Policies ready for selection, with the configuration that applies to them.
#[derive(Clone, Debug)]
pub struct Loaded {
    pub policies: Policies,
    pub config: EffectiveConfig,
}

pub fn load(input: LoadInput<'_>) -> anyhow::Result<Loaded> {
    // Empty config is allowed, defaults apply.
    let cfg = if input.config_text.trim().is_empty() {
        policytree_settings::PolicytreeConfigV1::default()
    } else {
        policytree_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        policytree_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let mut policies =
        policytree_document::parse_policy_toml(input.document_text).context("load policies")?;

    if let Some(meta_text) = input.meta_text {
        let index = policytree_document::parse_meta_json(meta_text).context("load provenance")?;
        for name in policytree_document::attach_meta(&mut policies, &index) {
            tracing::warn!(policy = %name, "provenance entry matches no loaded policy");
        }
    }

    tracing::info!(
        policies = policies.len(),
        hash_mode = resolved.effective.hash_mode.as_str(),
        "loaded policies"
    );

    Ok(Loaded {
        policies,
        config: resolved.effective,
    })
}
