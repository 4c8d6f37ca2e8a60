use crate::model::{Check, Policy, View};
use policytree_types::{Configuration, Provider, QueryType};

pub fn policy(name: &str, policies: Vec<Policy>, checks: Vec<Check>) -> Policy {
    Policy {
        name: name.to_string(),
        policies: policies.into(),
        checks,
        ..Policy::default()
    }
}

pub fn check(name: &str) -> Check {
    Check {
        name: name.to_string(),
        title: format!("{name} title"),
        query_type: QueryType::Automatic,
        query: format!("select * from resources where rule = '{name}'"),
        ..Check::default()
    }
}

pub fn view(name: &str) -> View {
    View {
        name: name.to_string(),
        title: String::new(),
        query: format!("select * from {name}"),
    }
}

pub fn configuration(provider: &str, version: &str) -> Configuration {
    Configuration::new(vec![Provider::new(provider, version)])
}
