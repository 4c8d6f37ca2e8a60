use crate::model::{Policies, Policy};
use policytree_types::Meta;
use serde::Serialize;

/// Provenance summary over a list of top-level policies, used for usage reporting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PolicyProperties {
    /// Policies without provenance or not sourced from the hub.
    pub used_custom: usize,
    /// Provenance of hub-sourced policies, in input order. Custom policies are not listed.
    pub policies: Vec<Meta>,
}

impl Policy {
    /// Whether this node or any descendant has at least one check.
    pub fn has_checks(&self) -> bool {
        !self.checks.is_empty() || self.policies.iter().any(Policy::has_checks)
    }

    /// Number of checks in this node and all of its descendants.
    pub fn total_queries(&self) -> usize {
        self.checks.len()
            + self
                .policies
                .iter()
                .map(Policy::total_queries)
                .sum::<usize>()
    }
}

impl Policies {
    /// Names of the policies, in order.
    pub fn all(&self) -> Vec<String> {
        self.iter().map(|p| p.name.clone()).collect()
    }

    pub fn properties(&self) -> PolicyProperties {
        let mut props = PolicyProperties::default();
        for p in self {
            match &p.meta {
                Some(meta) if meta.is_hub() => props.policies.push(meta.clone()),
                _ => props.used_custom += 1,
            }
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, policy};

    fn meta(source_type: &str, version: &str) -> Meta {
        Meta {
            source_type: source_type.to_string(),
            version: version.to_string(),
            ..Meta::default()
        }
    }

    #[test]
    fn total_queries_counts_every_depth() {
        let grandchild = policy("gc", vec![], vec![]);
        let child = policy(
            "child",
            vec![grandchild],
            vec![check("c1"), check("c2"), check("c3")],
        );
        let root = policy("root", vec![child], vec![check("r1"), check("r2")]);
        assert_eq!(root.total_queries(), 5);
    }

    #[test]
    fn total_queries_of_empty_policy_is_zero() {
        assert_eq!(Policy::new("empty").total_queries(), 0);
    }

    #[test]
    fn has_checks_false_for_empty_sub_policies() {
        let root = policy(
            "root",
            vec![
                policy("a", vec![policy("aa", vec![], vec![])], vec![]),
                policy("b", vec![], vec![]),
            ],
            vec![],
        );
        assert!(!root.has_checks());
    }

    #[test]
    fn has_checks_finds_deep_leaf() {
        let root = policy(
            "root",
            vec![
                policy("a", vec![], vec![]),
                policy("b", vec![policy("bb", vec![], vec![check("leaf")])], vec![]),
            ],
            vec![],
        );
        assert!(root.has_checks());
        assert!(policy("flat", vec![], vec![check("x")]).has_checks());
    }

    #[test]
    fn all_preserves_order() {
        let pp: Policies = vec![Policy::new("z"), Policy::new("a"), Policy::new("m")].into();
        assert_eq!(pp.all(), vec!["z", "a", "m"]);
        assert!(Policies::new().all().is_empty());
    }

    #[test]
    fn properties_without_meta_are_all_custom() {
        let pp: Policies = vec![Policy::new("a"), Policy::new("b"), Policy::new("c")].into();
        let props = pp.properties();
        assert_eq!(props.used_custom, 3);
        assert!(props.policies.is_empty());
    }

    #[test]
    fn properties_lists_hub_meta_in_order() {
        let mut hub_a = Policy::new("aws");
        hub_a.meta = Some(meta("hub", "v1.0.0"));
        let mut local = Policy::new("mine");
        local.meta = Some(meta("local", "v9.9.9"));
        let mut hub_b = Policy::new("gcp");
        hub_b.meta = Some(meta("hub", "v0.2.0"));
        let bare = Policy::new("bare");

        let pp: Policies = vec![hub_a, local, hub_b, bare].into();
        let props = pp.properties();
        assert_eq!(props.used_custom, 2);
        let versions: Vec<&str> = props.policies.iter().map(|m| m.version.as_str()).collect();
        assert_eq!(versions, vec!["v1.0.0", "v0.2.0"]);
    }

    #[test]
    fn properties_serialize_as_report_map() {
        let mut hub = Policy::new("aws");
        hub.meta = Some(meta("hub", "v1.0.0"));
        let pp: Policies = vec![hub, Policy::new("mine")].into();
        let json = serde_json::to_value(pp.properties()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "used_custom": 1,
                "policies": [{"type": "hub", "version": "v1.0.0"}]
            })
        );
    }
}
