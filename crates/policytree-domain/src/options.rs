use crate::fingerprint::HashMode;

/// Resolved tool configuration consumed by the use cases.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub hash_mode: HashMode,
    pub render: RenderOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// List views next to checks.
    pub views: bool,
    /// Deepest sub-policy level to expand; `None` expands everything.
    pub depth: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            views: true,
            depth: None,
        }
    }
}
