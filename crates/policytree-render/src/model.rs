#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableCheckKind {
    Manual,
    Automatic,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableCheck {
    pub name: String,
    pub title: String,
    pub kind: RenderableCheckKind,
    pub reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableView {
    pub name: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderablePolicy {
    /// Display identity (`name` or `name//sub_policy`).
    pub display: String,
    pub title: String,
    pub version: String,
    pub source: Option<String>,
    /// `type` or `type (version)` per provider.
    pub providers: Vec<String>,
    /// Checks in this node and every descendant.
    pub total_checks: usize,
    pub checks: Vec<RenderableCheck>,
    pub views: Vec<RenderableView>,
    pub children: Vec<RenderablePolicy>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub views: bool,
    /// Deepest sub-policy level to expand; the rendered node itself is level 0.
    pub depth: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            views: true,
            depth: None,
        }
    }
}

impl RenderSettings {
    pub(crate) fn expands(&self, level: usize) -> bool {
        self.depth.is_none_or(|max| level <= max)
    }
}

pub(crate) fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}
