use crate::error::DocumentError;
use policytree_domain::Policies;
use policytree_types::Meta;
use std::collections::BTreeMap;

/// Provenance records keyed by top-level policy name, as produced by whatever resolved the
/// policies (hub download, local checkout).
pub type MetaIndex = BTreeMap<String, Meta>;

pub fn parse_meta_json(text: &str) -> Result<MetaIndex, DocumentError> {
    let index: MetaIndex = serde_json::from_str(text)?;
    Ok(index)
}

/// Attach provenance to the top-level policies named in `index`.
///
/// Returns the index entries that matched no policy, in key order.
pub fn attach_meta(policies: &mut Policies, index: &MetaIndex) -> Vec<String> {
    for policy in policies.iter_mut() {
        if let Some(meta) = index.get(&policy.name) {
            tracing::debug!(policy = %policy.name, source_type = %meta.source_type, "attached provenance");
            policy.meta = Some(meta.clone());
        }
    }

    index
        .keys()
        .filter(|name| !policies.iter().any(|p| &p.name == *name))
        .cloned()
        .collect()
}
