//! Hierarchy builder: materializes the flat agency set into a lineage forest.

use std::collections::{HashMap, HashSet};

use tracing::instrument;

use crate::domain::agency::{Agency, AgencyIndex};
use crate::domain::lineage::classify_with_index;
use crate::domain::node::LineageNode;

/// Build the forest of lineage trees from the full agency set.
///
/// Every input agency lands in exactly one node. An agency with no parent,
/// an unresolvable parent id, or a self-referencing parent becomes a root;
/// members of a parent cycle, reachable from no root, are promoted to roots
/// in input order so no record is dropped. Sibling order and root order
/// follow input order. Empty child lists normalize to `None`.
#[instrument(level = "debug", skip(agencies), fields(count = agencies.len()))]
pub fn build_lineage_tree(agencies: &[Agency]) -> Vec<LineageNode> {
    let index = AgencyIndex::lenient(agencies);

    // Children lists in input order. A parent reference only counts when it
    // resolves within the set and is not the agency itself.
    let mut children_of: HashMap<&str, Vec<&Agency>> = HashMap::new();
    let mut natural_roots: Vec<&Agency> = Vec::new();
    for agency in agencies {
        match agency.parent_agency.as_deref() {
            Some(parent_id) if parent_id != agency.id && index.get(parent_id).is_some() => {
                children_of.entry(parent_id).or_default().push(agency);
            }
            _ => natural_roots.push(agency),
        }
    }

    let mut placed: HashSet<&str> = HashSet::new();
    let mut forest: Vec<LineageNode> = Vec::new();

    for root in natural_roots {
        if let Some(node) = materialize(root, &index, &children_of, &mut placed) {
            forest.push(node);
        }
    }

    // Cycle members hang off each other and off no root; promote them in
    // input order so the forest still contains every agency exactly once.
    for agency in agencies {
        if !placed.contains(agency.id.as_str()) {
            if let Some(node) = materialize(agency, &index, &children_of, &mut placed) {
                forest.push(node);
            }
        }
    }

    forest
}

/// Depth-first construction of one owned subtree. The placed set guards
/// against revisiting ids, so malformed parent chains terminate.
fn materialize<'a>(
    agency: &'a Agency,
    index: &AgencyIndex<'a>,
    children_of: &HashMap<&'a str, Vec<&'a Agency>>,
    placed: &mut HashSet<&'a str>,
) -> Option<LineageNode> {
    if !placed.insert(agency.id.as_str()) {
        return None;
    }

    let children: Vec<LineageNode> = children_of
        .get(agency.id.as_str())
        .map(|kids| {
            kids.iter()
                .copied()
                .filter_map(|child| materialize(child, index, children_of, placed))
                .collect()
        })
        .unwrap_or_default();

    Some(LineageNode {
        agency: agency.clone(),
        lineage_type: classify_with_index(agency, index),
        children: if children.is_empty() {
            None
        } else {
            Some(children)
        },
    })
}
