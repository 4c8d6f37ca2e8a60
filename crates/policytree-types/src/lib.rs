//! Stable DTOs and identifiers used across the policytree workspace.
//!
//! This crate is intentionally boring:
//! - provenance metadata attached to policies after loading
//! - provider configuration records
//! - query kinds
//! - stable string constants

#![forbid(unsafe_code)]

pub mod ids;
pub mod meta;
pub mod provider;
pub mod query;

pub use meta::Meta;
pub use provider::{Configuration, Provider};
pub use query::QueryType;
