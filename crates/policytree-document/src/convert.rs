use crate::error::DocumentError;
use crate::schema::{CheckBlock, PolicyBlock, PolicyDocument, ViewBlock};
use policytree_domain::{Check, Policies, Policy, View};
use policytree_types::ids::PATH_SEPARATOR;
use std::collections::BTreeSet;

const ROOT: &str = "<document>";

pub fn build_policies(doc: PolicyDocument) -> Result<Policies, DocumentError> {
    build_children(ROOT, None, doc.policy)
}

fn build_children(
    parent: &str,
    prefix: Option<&str>,
    blocks: Vec<PolicyBlock>,
) -> Result<Policies, DocumentError> {
    let names = blocks.iter().map(|b| b.name.as_str());
    ensure_unique_names("policy", parent, names)?;

    blocks
        .into_iter()
        .map(|block| {
            let path = match prefix {
                Some(prefix) => format!("{prefix}{PATH_SEPARATOR}{}", block.name),
                None => block.name.clone(),
            };
            build_policy(&path, block)
        })
        .collect()
}

fn build_policy(path: &str, block: PolicyBlock) -> Result<Policy, DocumentError> {
    if let Some(reference) = block.source.as_deref() {
        ensure_source_only(path, reference, &block)?;
    }

    ensure_unique_names("check", path, block.check.iter().map(|c| c.name.as_str()))?;
    ensure_unique_names("view", path, block.view.iter().map(|v| v.name.as_str()))?;

    let checks = block
        .check
        .into_iter()
        .map(|c| build_check(path, c))
        .collect::<Result<Vec<_>, _>>()?;
    let views = block.view.into_iter().map(build_view).collect();
    let policies = build_children(path, Some(path), block.policy)?;

    Ok(Policy {
        name: block.name,
        title: block.title,
        doc: block.doc,
        config: block.configuration,
        policies,
        checks,
        views,
        source: block.source,
        identifiers: block.identifiers,
        meta: None,
    })
}

fn build_check(parent: &str, block: CheckBlock) -> Result<Check, DocumentError> {
    if block.query.trim().is_empty() {
        return Err(DocumentError::EmptyQuery {
            path: format!("{parent}{PATH_SEPARATOR}{}", block.name),
        });
    }
    Ok(Check {
        name: block.name,
        title: block.title,
        doc: block.doc,
        expect_output: block.expect_output,
        query_type: block.query_type,
        query: block.query,
        reason: block.reason,
    })
}

fn build_view(block: ViewBlock) -> View {
    View {
        name: block.name,
        title: block.title,
        query: block.query,
    }
}

fn ensure_unique_names<'a>(
    kind: &'static str,
    parent: &str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), DocumentError> {
    let mut seen = BTreeSet::new();
    for (index, name) in names.enumerate() {
        if name.is_empty() {
            return Err(DocumentError::EmptyName {
                kind,
                parent: parent.to_string(),
                index,
            });
        }
        if name.contains(PATH_SEPARATOR) {
            return Err(DocumentError::NameWithSeparator {
                kind,
                parent: parent.to_string(),
                name: name.to_string(),
            });
        }
        if !seen.insert(name) {
            return Err(DocumentError::DuplicateName {
                kind,
                parent: parent.to_string(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn ensure_source_only(
    path: &str,
    reference: &str,
    block: &PolicyBlock,
) -> Result<(), DocumentError> {
    let declared = [
        ("title", !block.title.is_empty()),
        ("doc", !block.doc.is_empty()),
        ("configuration", block.configuration.is_some()),
        ("policy blocks", !block.policy.is_empty()),
        ("check blocks", !block.check.is_empty()),
        ("view blocks", !block.view.is_empty()),
        ("identifiers", !block.identifiers.is_empty()),
    ];
    match declared.iter().find(|(_, set)| *set) {
        Some((field, _)) => Err(DocumentError::SourceWithContent {
            path: path.to_string(),
            reference: reference.to_string(),
            field: *field,
        }),
        None => Ok(()),
    }
}
