use crate::model::PolicytreeConfigV1;
use anyhow::Context;
use policytree_domain::{EffectiveConfig, HashMode};
use policytree_types::ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub hash: Option<String>,
    pub depth: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: PolicytreeConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected '{}')",
            ids::SCHEMA_CONFIG_V1
        );
    }

    let mut effective = EffectiveConfig::default();

    if let Some(hash_s) = overrides.hash.as_deref().or(cfg.hash.as_deref()) {
        effective.hash_mode = parse_hash_mode(hash_s).context("invalid hash mode")?;
    }

    if let Some(views) = cfg.render.views {
        effective.render.views = views;
    }
    if let Some(depth) = overrides.depth.or(cfg.render.depth) {
        effective.render.depth = Some(depth as usize);
    }

    Ok(ResolvedConfig { effective })
}

fn parse_hash_mode(v: &str) -> anyhow::Result<HashMode> {
    match v {
        "structural" => Ok(HashMode::Structural),
        "full" => Ok(HashMode::Full),
        other => anyhow::bail!("unknown hash mode: {other} (expected 'structural' or 'full')"),
    }
}
