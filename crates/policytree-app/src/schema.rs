//! JSON Schemas for the two input files the CLI reads.

use schemars::schema_for;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    /// `policytree.toml`
    Config,
    /// The TOML policy document.
    Document,
}

impl FromStr for SchemaKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "config" => Ok(SchemaKind::Config),
            "document" => Ok(SchemaKind::Document),
            other => anyhow::bail!("unknown schema: {other} (expected config|document)"),
        }
    }
}

/// Pretty JSON Schema text, newline terminated.
pub fn schema_json(kind: SchemaKind) -> anyhow::Result<String> {
    let schema = match kind {
        SchemaKind::Config => schema_for!(policytree_settings::PolicytreeConfigV1),
        SchemaKind::Document => schema_for!(policytree_document::PolicyDocument),
    };
    let mut out = serde_json::to_string_pretty(&schema)?;
    out.push('\n');
    Ok(out)
}
