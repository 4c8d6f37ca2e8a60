//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Filter identity, shell selection, and configuration inheritance
//! - Aggregate counts over arbitrary depths
//! - Hash determinism and scope

use crate::model::{Check, Policies, Policy, View};
use crate::test_support::view;
use policytree_types::{Configuration, Provider, QueryType};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies for generating arbitrary trees
// ============================================================================

/// Policy names start with `p` and check names with `c`, so the two never collide
/// and every generated path is unambiguous.
fn arb_policy_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("p[a-z0-9_-]{0,8}").unwrap()
}

fn arb_check_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("c[a-z0-9_-]{0,8}").unwrap()
}

fn arb_query_type() -> impl Strategy<Value = QueryType> {
    prop_oneof![Just(QueryType::Manual), Just(QueryType::Automatic)]
}

fn arb_check() -> impl Strategy<Value = Check> {
    (arb_check_name(), arb_query_type(), any::<bool>(), "[a-z ]{0,24}").prop_map(
        |(name, query_type, expect_output, query)| Check {
            name,
            query_type,
            expect_output,
            query,
            ..Check::default()
        },
    )
}

fn arb_views() -> impl Strategy<Value = Vec<View>> {
    prop::collection::vec("v[a-z]{0,6}", 0..2)
        .prop_map(|names| names.iter().map(|n| view(n)).collect())
}

fn arb_config() -> impl Strategy<Value = Option<Configuration>> {
    prop::option::weighted(
        0.3,
        ("[a-z]{1,6}", "[0-9.]{0,5}").prop_map(|(t, v)| Configuration::new(vec![Provider::new(t, v)])),
    )
}

fn arb_node() -> impl Strategy<Value = Policy> {
    (
        arb_policy_name(),
        prop::collection::vec(arb_check(), 0..4),
        arb_views(),
        arb_config(),
    )
        .prop_map(|(name, checks, views, config)| Policy {
            name,
            checks: unique_checks(checks),
            views,
            config,
            ..Policy::default()
        })
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    arb_node().prop_recursive(3, 32, 4, |inner| {
        (arb_node(), prop::collection::vec(inner, 0..4)).prop_map(|(mut node, children)| {
            node.policies = unique_policies(children);
            node
        })
    })
}

fn unique_checks(checks: Vec<Check>) -> Vec<Check> {
    let mut seen = BTreeSet::new();
    checks
        .into_iter()
        .filter(|c| seen.insert(c.name.clone()))
        .collect()
}

fn unique_policies(policies: Vec<Policy>) -> Policies {
    let mut seen = BTreeSet::new();
    policies
        .into_iter()
        .filter(|p| seen.insert(p.name.clone()))
        .collect()
}

// ============================================================================
// Tree walks used as oracles
// ============================================================================

struct CheckSite {
    path: String,
    owner: String,
    check: Check,
}

struct PolicySite {
    path: String,
    name: String,
    effective_config: Option<Configuration>,
    /// Nearest configured strict ancestor.
    inherited_config: Option<Configuration>,
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

fn walk(
    p: &Policy,
    prefix: &str,
    inherited: Option<&Configuration>,
    checks: &mut Vec<CheckSite>,
    policies: &mut Vec<PolicySite>,
) {
    for c in &p.checks {
        checks.push(CheckSite {
            path: join(prefix, &c.name),
            owner: p.name.clone(),
            check: c.clone(),
        });
    }
    for child in &p.policies {
        let path = join(prefix, &child.name);
        let from_parent = p.config.as_ref().or(inherited);
        let effective = child.config.as_ref().or(from_parent);
        policies.push(PolicySite {
            path: path.clone(),
            name: child.name.clone(),
            effective_config: effective.cloned(),
            inherited_config: from_parent.cloned(),
        });
        walk(child, &path, effective, checks, policies);
    }
}

fn count_checks(p: &Policy) -> usize {
    let mut total = 0;
    let mut stack = vec![p];
    while let Some(node) = stack.pop() {
        total += node.checks.len();
        stack.extend(node.policies.iter());
    }
    total
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn empty_filter_is_identity(p in arb_policy()) {
        prop_assert_eq!(p.filter(""), p);
    }

    #[test]
    fn every_check_selects_a_shell_of_its_owner(p in arb_policy()) {
        let mut checks = Vec::new();
        let mut policies = Vec::new();
        walk(&p, "", None, &mut checks, &mut policies);

        for site in checks {
            let shell = p.filter(&site.path);
            prop_assert_eq!(&shell.name, &site.owner);
            prop_assert_eq!(shell.checks.len(), 1);
            prop_assert_eq!(&shell.checks[0], &site.check);
            prop_assert!(shell.policies.is_empty());
        }
    }

    #[test]
    fn selected_policies_inherit_nearest_configuration(p in arb_policy()) {
        let mut checks = Vec::new();
        let mut policies = Vec::new();
        walk(&p, "", None, &mut checks, &mut policies);

        for site in policies {
            let selected = p.filter(&site.path);
            prop_assert_eq!(&selected.name, &site.name);
            prop_assert_eq!(&selected.config, &site.effective_config);
        }
    }

    #[test]
    fn filter_never_mutates(p in arb_policy(), path in "[pc][a-z0-9/_-]{0,20}") {
        let before = p.clone();
        let _ = p.filter(&path);
        prop_assert_eq!(p, before);
    }

    #[test]
    fn unknown_segment_yields_zero_value(p in arb_policy(), missing in "x[a-z]{0,8}") {
        prop_assert_eq!(p.filter(&missing), Policy::default());
    }

    #[test]
    fn misses_below_a_policy_inherit_ancestor_configuration(
        p in arb_policy(),
        missing in "x[a-z]{0,8}",
    ) {
        let mut checks = Vec::new();
        let mut policies = Vec::new();
        walk(&p, "", None, &mut checks, &mut policies);

        for site in policies {
            let miss = p.filter(&format!("{}/{missing}", site.path));
            prop_assert!(miss.is_unmatched());
            prop_assert_eq!(&miss.config, &site.inherited_config);
            let missing_path = format!("{}/{missing}", site.path);
            prop_assert!(p.select(&missing_path).is_none());
        }
    }

    #[test]
    fn total_queries_counts_every_check(p in arb_policy()) {
        prop_assert_eq!(p.total_queries(), count_checks(&p));
        prop_assert_eq!(p.has_checks(), count_checks(&p) > 0);
    }

    #[test]
    fn structural_hash_ignores_root_checks(p in arb_policy(), extra in arb_check()) {
        let mut q = p.clone();
        q.checks.push(extra);
        prop_assert_eq!(p.sha256_hash(), q.sha256_hash());
        prop_assert_ne!(p.full_hash(), q.full_hash());
    }

    #[test]
    fn hash_is_stable_across_clones(p in arb_policy()) {
        let q = p.clone();
        prop_assert_eq!(p.sha256_hash(), q.sha256_hash());
        prop_assert_eq!(p.full_hash(), q.full_hash());
    }

    #[test]
    fn properties_count_custom_policies(list in prop::collection::vec(arb_node(), 0..6)) {
        let len = list.len();
        let pp: Policies = list.into();
        let props = pp.properties();
        prop_assert_eq!(props.used_custom, len);
        prop_assert!(props.policies.is_empty());
        prop_assert_eq!(pp.all().len(), len);
    }
}
