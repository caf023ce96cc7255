//! keifu: voice actor agency genealogy.
//!
//! Classifies agencies into named historical lineages by walking their
//! split/spin-off ancestry, and assembles the flat records into a forest of
//! owned tree nodes for hierarchical rendering. Dangling and cyclic parent
//! references degrade gracefully (implicit roots, bounded traversal) instead
//! of failing, so every dataset renders something for every agency.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod store;
pub mod util;

pub use domain::{
    build_lineage_tree, classify_lineage, lineage_color, Agency, AgencyIndex, AgencyStatus,
    LineageColor, LineageNode, LineageTag,
};
