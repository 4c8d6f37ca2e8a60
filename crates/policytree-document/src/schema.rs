use policytree_types::{Configuration, QueryType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A policy document: one or more `[[policy]]` blocks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PolicyDocument {
    #[serde(default)]
    pub policy: Vec<PolicyBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PolicyBlock {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub doc: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Configuration>,

    /// Nested policies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policy: Vec<PolicyBlock>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub check: Vec<CheckBlock>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub view: Vec<ViewBlock>,

    /// External policy reference. Excludes every other field except `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CheckBlock {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub doc: String,

    #[serde(default)]
    pub expect_output: bool,

    /// `manual` or `automatic` (default).
    #[serde(default, rename = "type")]
    pub query_type: QueryType,

    pub query: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ViewBlock {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    pub query: String,
}
