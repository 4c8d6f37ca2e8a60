//! Stable identifiers and sentinel values.

/// `Meta::type` value for policies resolved from the hub catalog.
pub const SOURCE_TYPE_HUB: &str = "hub";

/// Version reported for a policy whose provenance has not been resolved.
pub const DEFAULT_VERSION: &str = "v0.0.0";

/// Separates a policy name from its sub-policy in display identities (`aws//cis`).
pub const SUB_POLICY_SEPARATOR: &str = "//";

/// Separates segments of a selection path (`aws/ec2/no-public-ip`).
pub const PATH_SEPARATOR: char = '/';

// Schemas
pub const SCHEMA_CONFIG_V1: &str = "policytree.config.v1";
pub const SCHEMA_SUMMARY_V1: &str = "policytree.summary.v1";
