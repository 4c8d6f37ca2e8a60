//! Rendering utilities for terminals and review surfaces (Markdown, plain-text trees).
//!
//! Renderers work on their own model so they stay independent of the tree crate.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod summary;
mod tree;

pub use markdown::render_markdown;
pub use model::{
    RenderSettings, RenderableCheck, RenderableCheckKind, RenderablePolicy, RenderableView,
};
pub use summary::{RenderableSummary, RenderableSummaryRow, render_summary_markdown};
pub use tree::render_tree;
