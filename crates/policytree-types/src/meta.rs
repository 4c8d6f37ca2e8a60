use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Provenance of a policy: where it came from and which version was resolved.
///
/// Attached to a policy after it was loaded, never embedded in a policy document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Meta {
    /// Origin kind, e.g. `hub` for catalog policies. Anything else counts as custom.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub source_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Path of the selected policy inside a multi-policy source.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub_policy: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub directory: String,
}

impl Meta {
    pub fn is_hub(&self) -> bool {
        self.source_type == ids::SOURCE_TYPE_HUB
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_omitted() {
        let meta = Meta {
            source_type: "hub".to_string(),
            version: "v1.2.0".to_string(),
            ..Meta::default()
        };
        let json = serde_json::to_string(&meta).expect("serialize");
        assert_eq!(json, r#"{"type":"hub","version":"v1.2.0"}"#);
    }

    #[test]
    fn deserializes_snake_case_keys() {
        let meta: Meta = serde_json::from_str(
            r#"{"type":"hub","version":"v0.3.1","sub_policy":"cis_v1.2.0","directory":".policies/aws"}"#,
        )
        .expect("deserialize");
        assert!(meta.is_hub());
        assert_eq!(meta.sub_policy, "cis_v1.2.0");
        assert_eq!(meta.directory, ".policies/aws");
    }

    #[test]
    fn local_type_is_not_hub() {
        let meta = Meta {
            source_type: "local".to_string(),
            ..Meta::default()
        };
        assert!(!meta.is_hub());
        assert!(!Meta::default().is_hub());
    }
}
