//! Use case orchestration for policytree.
//!
//! This crate provides the application layer: use cases that coordinate the document,
//! settings, domain, and render layers. It does no file IO; the CLI reads files and passes
//! their contents in.

#![forbid(unsafe_code)]

mod load;
mod render;
mod schema;
mod select;
mod summary;

pub use load::{LoadInput, Loaded, load};
pub use render::{OutputFormat, render_policy, to_renderable};
pub use schema::{SchemaKind, schema_json};
pub use select::{HashEntry, ListEntry, run_hash, run_list, run_select};
pub use summary::{PolicySummary, SummaryReport, render_summary, run_summary};
