//! Rendering use cases: domain policy -> renderable model -> text.

use policytree_domain::{EffectiveConfig, Policy};
use policytree_render::{
    RenderSettings, RenderableCheck, RenderableCheckKind, RenderablePolicy, RenderableView,
    render_markdown, render_tree,
};
use policytree_types::QueryType;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Tree,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "tree" => Ok(OutputFormat::Tree),
            other => anyhow::bail!("unknown format: {other} (expected json|markdown|tree)"),
        }
    }
}

pub fn render_policy(
    policy: &Policy,
    config: &EffectiveConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let settings = RenderSettings {
        views: config.render.views,
        depth: config.render.depth,
    };
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(policy)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Markdown => Ok(render_markdown(&to_renderable(policy), &settings)),
        OutputFormat::Tree => Ok(render_tree(&to_renderable(policy), &settings)),
    }
}

pub fn to_renderable(policy: &Policy) -> RenderablePolicy {
    RenderablePolicy {
        display: policy.to_string(),
        title: policy.title.clone(),
        version: policy.version().to_string(),
        source: policy.source.clone(),
        providers: policy
            .config
            .iter()
            .flat_map(|c| c.providers.iter())
            .map(|p| {
                if p.version.is_empty() {
                    p.provider_type.clone()
                } else {
                    format!("{} ({})", p.provider_type, p.version)
                }
            })
            .collect(),
        total_checks: policy.total_queries(),
        checks: policy
            .checks
            .iter()
            .map(|c| RenderableCheck {
                name: c.name.clone(),
                title: c.title.clone(),
                kind: match c.query_type {
                    QueryType::Manual => RenderableCheckKind::Manual,
                    QueryType::Automatic => RenderableCheckKind::Automatic,
                },
                reason: (!c.reason.is_empty()).then(|| c.reason.clone()),
            })
            .collect(),
        views: policy
            .views
            .iter()
            .map(|v| RenderableView {
                name: v.name.clone(),
                title: v.title.clone(),
            })
            .collect(),
        children: policy.policies.iter().map(to_renderable).collect(),
    }
}
