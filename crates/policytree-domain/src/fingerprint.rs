//! Content hashes for policy nodes.
//!
//! The digest input is a canonical byte encoding: every field is written as a one-byte tag,
//! a big-endian `u64` length or count, then its bytes. Provenance (`meta`) is never hashed.

use crate::model::{Check, Policies, Policy, View};
use policytree_types::Configuration;
use sha2::{Digest, Sha256};

/// Which fields of a node contribute to its content hash.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashMode {
    /// Sub-policies only. The node's own name, checks, views, and configuration are
    /// ignored, so two nodes with identical sub-policy lists share a hash.
    #[default]
    Structural,
    /// Every field of the node and its descendants except provenance.
    Full,
}

impl HashMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashMode::Structural => "structural",
            HashMode::Full => "full",
        }
    }
}

impl Policy {
    /// Lowercase hex SHA-256 of the node's sub-policies.
    pub fn sha256_hash(&self) -> String {
        self.structural_hash()
    }

    pub fn structural_hash(&self) -> String {
        let mut enc = Canonical::new();
        enc.policies(&self.policies);
        enc.finish()
    }

    pub fn full_hash(&self) -> String {
        let mut enc = Canonical::new();
        enc.policy(self);
        enc.finish()
    }

    pub fn content_hash(&self, mode: HashMode) -> String {
        match mode {
            HashMode::Structural => self.structural_hash(),
            HashMode::Full => self.full_hash(),
        }
    }
}

struct Canonical {
    hasher: Sha256,
}

impl Canonical {
    fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }

    fn finish(self) -> String {
        hex::encode(self.hasher.finalize())
    }

    fn count(&mut self, tag: u8, n: usize) {
        self.hasher.update([tag]);
        self.hasher.update((n as u64).to_be_bytes());
    }

    fn str(&mut self, tag: u8, s: &str) {
        self.count(tag, s.len());
        self.hasher.update(s.as_bytes());
    }

    fn flag(&mut self, tag: u8, v: bool) {
        self.hasher.update([tag, u8::from(v)]);
    }

    fn policies(&mut self, policies: &Policies) {
        self.count(b'P', policies.len());
        for p in policies {
            self.policy(p);
        }
    }

    fn policy(&mut self, p: &Policy) {
        self.str(b'n', &p.name);
        self.str(b't', &p.title);
        self.str(b'd', &p.doc);
        self.config(p.config.as_ref());
        self.policies(&p.policies);

        self.count(b'K', p.checks.len());
        for c in &p.checks {
            self.check(c);
        }
        self.count(b'V', p.views.len());
        for v in &p.views {
            self.view(v);
        }

        self.flag(b's', p.source.is_some());
        if let Some(source) = &p.source {
            self.str(b'S', source);
        }
        self.count(b'I', p.identifiers.len());
        for id in &p.identifiers {
            self.str(b'i', id);
        }
    }

    fn config(&mut self, config: Option<&Configuration>) {
        self.flag(b'c', config.is_some());
        let Some(config) = config else {
            return;
        };
        self.count(b'C', config.providers.len());
        for provider in &config.providers {
            self.str(b'T', &provider.provider_type);
            self.str(b'v', &provider.version);
        }
    }

    fn check(&mut self, c: &Check) {
        self.str(b'n', &c.name);
        self.str(b't', &c.title);
        self.str(b'd', &c.doc);
        self.flag(b'e', c.expect_output);
        self.str(b'y', c.query_type.as_str());
        self.str(b'q', &c.query);
        self.str(b'r', &c.reason);
    }

    fn view(&mut self, v: &View) {
        self.str(b'n', &v.name);
        self.str(b't', &v.title);
        self.str(b'q', &v.query);
    }
}
