//! Path-based selection over a policy tree.
//!
//! Paths are slash-delimited and never include the receiver's own name:
//! `ec2/no-public-ip` selects check `no-public-ip` of child policy `ec2`.

use crate::model::{Policies, Policy};
use policytree_types::ids::PATH_SEPARATOR;

impl Policy {
    /// Select the sub-tree or single check addressed by `path`.
    ///
    /// - An empty path returns the receiver unchanged.
    /// - A child policy matching the first segment is filtered with the rest of the path.
    ///   A result without configuration inherits the configuration of each ancestor it
    ///   passes on the way back up, so the nearest configured ancestor wins.
    /// - Otherwise a check matching the first segment yields a shell: a copy of the
    ///   receiver holding only that check and no sub-policies.
    /// - Anything else yields an unnamed policy (see [`Policy::is_unmatched`]). It is
    ///   `Policy::default()` at the level of the miss and, like any other result, picks up
    ///   ancestor configuration on the way back up.
    ///
    /// Matching is exact and case-sensitive; the first sibling with the name wins.
    pub fn filter(&self, path: &str) -> Policy {
        if path.is_empty() {
            return self.clone();
        }
        let (head, rest) = path.split_once(PATH_SEPARATOR).unwrap_or((path, ""));

        if let Some(child) = self.policies.iter().find(|p| p.name == head) {
            tracing::trace!(policy = %self.name, child = head, rest, "descending into sub-policy");
            let mut filtered = child.filter(rest);
            if filtered.config.is_none() {
                filtered.config = self.config.clone();
            }
            return filtered;
        }

        if let Some(check) = self.checks.iter().find(|c| c.name == head) {
            tracing::trace!(policy = %self.name, check = head, "selected check");
            return Policy {
                name: self.name.clone(),
                title: self.title.clone(),
                doc: self.doc.clone(),
                config: self.config.clone(),
                policies: Policies::new(),
                checks: vec![check.clone()],
                views: self.views.clone(),
                source: self.source.clone(),
                identifiers: self.identifiers.clone(),
                meta: self.meta.clone(),
            };
        }

        tracing::trace!(policy = %self.name, segment = head, "no policy or check matches");
        Policy::default()
    }

    /// Like [`Policy::filter`], but reports a miss as `None`.
    pub fn select(&self, path: &str) -> Option<Policy> {
        let filtered = self.filter(path);
        (!filtered.is_unmatched()).then_some(filtered)
    }

    /// Whether this value is the sentinel returned by [`Policy::filter`] for a miss.
    ///
    /// Well-formed policies always have a non-empty name.
    pub fn is_unmatched(&self) -> bool {
        self.name.is_empty()
    }
}

impl Policies {
    /// Select from a list of top-level policies.
    ///
    /// The first path segment names the top-level policy; the remainder is passed to
    /// [`Policy::filter`].
    pub fn select(&self, path: &str) -> Option<Policy> {
        let (head, rest) = path.split_once(PATH_SEPARATOR).unwrap_or((path, ""));
        self.iter().find(|p| p.name == head)?.select(rest)
    }
}
