use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a check is evaluated.
///
/// Manual checks carry a `reason` instead of relying on query output.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Manual,
    #[default]
    Automatic,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Manual => "manual",
            QueryType::Automatic => "automatic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&QueryType::Manual).expect("serialize"),
            "\"manual\""
        );
        let parsed: QueryType = serde_json::from_str("\"automatic\"").expect("deserialize");
        assert_eq!(parsed, QueryType::Automatic);
    }

    #[test]
    fn defaults_to_automatic() {
        assert_eq!(QueryType::default().as_str(), "automatic");
    }
}
