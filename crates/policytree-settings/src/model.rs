use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `policytree.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PolicytreeConfigV1 {
    /// Optional schema string for tooling (`policytree.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Content hash scope: `structural` (default, sub-policies only) or `full`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// List views next to checks (default true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<bool>,

    /// Deepest sub-policy level to expand when rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}
