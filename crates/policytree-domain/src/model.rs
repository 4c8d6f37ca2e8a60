use policytree_types::{Configuration, Meta, QueryType, ids};
use serde::Serialize;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A node of the policy tree.
///
/// Children are exclusively owned; there are no back references, so a tree can never
/// contain a cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Policy {
    pub name: String,

    /// Short human-readable title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Full documentation, shown wherever the policy is published.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub doc: String,

    /// Provider configuration. Nodes without one inherit the nearest ancestor's
    /// configuration when reached through [`Policy::filter`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Configuration>,

    #[serde(skip_serializing_if = "Policies::is_empty")]
    pub policies: Policies,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<Check>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<View>,

    /// Reference to an external policy (filesystem, hub, git). When set, the node is not
    /// expected to declare any content of its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Identifiers every check and sub-policy carries unless a sub-policy overrides them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<String>,

    /// Provenance attached by the loader after the tree was built.
    ///
    /// Tree operations never read it during construction and never modify it.
    #[serde(skip)]
    pub meta: Option<Meta>,
}

/// A leaf query with pass/fail semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Check {
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub doc: String,

    /// Whether rows returned by the query flag the checked resources.
    pub expect_output: bool,

    #[serde(rename = "type")]
    pub query_type: QueryType,

    pub query: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,
}

/// A named query kept for display and reporting; it never passes or fails.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct View {
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    pub query: String,
}

/// An ordered list of sibling policies.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Policies(Vec<Policy>);

impl Policies {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, policy: Policy) {
        self.0.push(policy);
    }
}

impl Deref for Policies {
    type Target = [Policy];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Policies {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Policy>> for Policies {
    fn from(value: Vec<Policy>) -> Self {
        Self(value)
    }
}

impl FromIterator<Policy> for Policies {
    fn from_iter<I: IntoIterator<Item = Policy>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Policies {
    type Item = Policy;
    type IntoIter = std::vec::IntoIter<Policy>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Policies {
    type Item = &'a Policy;
    type IntoIter = std::slice::Iter<'a, Policy>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Policy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Resolved version, or `v0.0.0` when provenance is not attached.
    pub fn version(&self) -> &str {
        match &self.meta {
            Some(meta) => &meta.version,
            None => ids::DEFAULT_VERSION,
        }
    }

    pub fn sub_policy(&self) -> &str {
        self.meta.as_ref().map(|m| m.sub_policy.as_str()).unwrap_or("")
    }

    pub fn source_type(&self) -> &str {
        self.meta.as_ref().map(|m| m.source_type.as_str()).unwrap_or("")
    }
}

/// Canonical display identity: `name//sub_policy`, or just `name`.
impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sub_policy = self.sub_policy();
        if sub_policy.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}{}{}", self.name, ids::SUB_POLICY_SEPARATOR, sub_policy)
        }
    }
}
