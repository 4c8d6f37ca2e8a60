/// Reasons a policy document or provenance index is rejected.
///
/// Paths are slash-delimited from the top-level policy, the same form accepted by selection.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid policy document: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid provenance index: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{kind} #{index} under `{parent}` has an empty name")]
    EmptyName {
        kind: &'static str,
        parent: String,
        index: usize,
    },

    #[error("{kind} name `{name}` under `{parent}` must not contain '/'")]
    NameWithSeparator {
        kind: &'static str,
        parent: String,
        name: String,
    },

    #[error("duplicate {kind} `{name}` under `{parent}`")]
    DuplicateName {
        kind: &'static str,
        parent: String,
        name: String,
    },

    #[error("policy `{path}` references source `{reference}` and must not declare {field}")]
    SourceWithContent {
        path: String,
        reference: String,
        field: &'static str,
    },

    #[error("check `{path}` has an empty query")]
    EmptyQuery { path: String },
}
