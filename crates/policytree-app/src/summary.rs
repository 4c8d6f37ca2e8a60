//! The `summary` use case: per-policy totals, hashes, and provenance properties.

use crate::load::Loaded;
use crate::render::OutputFormat;
use policytree_domain::PolicyProperties;
use policytree_render::{RenderableSummary, RenderableSummaryRow, render_summary_markdown};
use policytree_types::ids;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PolicySummary {
    pub name: String,
    pub display: String,
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_type: String,
    pub total_queries: usize,
    pub has_checks: bool,
    pub hash: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub schema: String,
    pub hash_mode: String,
    pub policies: Vec<PolicySummary>,
    pub total_queries: usize,
    pub properties: PolicyProperties,
}

pub fn run_summary(loaded: &Loaded) -> SummaryReport {
    let mode = loaded.config.hash_mode;
    let policies: Vec<PolicySummary> = loaded
        .policies
        .iter()
        .map(|p| PolicySummary {
            name: p.name.clone(),
            display: p.to_string(),
            version: p.version().to_string(),
            source_type: p.source_type().to_string(),
            total_queries: p.total_queries(),
            has_checks: p.has_checks(),
            hash: p.content_hash(mode),
        })
        .collect();

    SummaryReport {
        schema: ids::SCHEMA_SUMMARY_V1.to_string(),
        hash_mode: mode.as_str().to_string(),
        total_queries: policies.iter().map(|p| p.total_queries).sum(),
        policies,
        properties: loaded.policies.properties(),
    }
}

pub fn render_summary(report: &SummaryReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(report)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Markdown => Ok(render_summary_markdown(&to_renderable_summary(report))),
        OutputFormat::Tree => anyhow::bail!("summary has no tree rendering (use json or markdown)"),
    }
}

fn to_renderable_summary(report: &SummaryReport) -> RenderableSummary {
    RenderableSummary {
        rows: report
            .policies
            .iter()
            .map(|p| RenderableSummaryRow {
                display: p.display.clone(),
                version: p.version.clone(),
                source_type: p.source_type.clone(),
                total_checks: p.total_queries,
                hash: p.hash.clone(),
            })
            .collect(),
        total_checks: report.total_queries,
        used_custom: report.properties.used_custom,
        hub: report.properties.policies.len(),
    }
}
