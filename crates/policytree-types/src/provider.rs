use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Provider configuration declared by a policy node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    #[serde(default, rename = "provider")]
    pub providers: Vec<Provider>,
}

/// A provider the policy's queries run against, with an optional version constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Provider {
    #[serde(rename = "type")]
    pub provider_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl Configuration {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }
}

impl Provider {
    pub fn new(provider_type: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            provider_type: provider_type.into(),
            version: version.into(),
        }
    }
}
