//! Owned hierarchy nodes handed to rendering layers.

use serde::Serialize;

use crate::domain::agency::Agency;
use crate::domain::lineage::LineageTag;

/// One agency in the lineage forest.
///
/// Children are `None` for leaves rather than an empty vec, so hierarchy
/// renderers that distinguish "leaf" from "inner node with no current
/// children" see the right shape and exported JSON omits the field. Each
/// node exclusively owns its subtree; the parent is only recoverable via
/// `agency.parent_agency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageNode {
    #[serde(flatten)]
    pub agency: Agency,
    pub lineage_type: LineageTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<LineageNode>>,
}

impl LineageNode {
    /// Child nodes in input order; empty for leaves.
    pub fn children(&self) -> &[LineageNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Height of the subtree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in this subtree, including self.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(|child| child.count()).sum::<usize>()
    }

    /// Names of all leaf agencies under (and including) this node.
    pub fn leaf_names(&self) -> Vec<&str> {
        if self.children().is_empty() {
            vec![self.agency.name.as_str()]
        } else {
            let mut leaves = Vec::new();
            for child in self.children() {
                leaves.extend(child.leaf_names());
            }
            leaves
        }
    }
}
