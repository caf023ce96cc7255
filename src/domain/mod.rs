//! Domain layer: lineage classification and hierarchy construction.
//!
//! Pure computation over immutable agency snapshots; no I/O, no CLI.

pub mod agency;
pub mod builder;
pub mod color;
pub mod error;
pub mod lineage;
pub mod node;

pub use agency::{Agency, AgencyIndex, AgencyStatus};
pub use builder::build_lineage_tree;
pub use color::{lineage_color, LineageColor};
pub use error::DomainError;
pub use lineage::{classify_lineage, classify_with_index, LineageTag};
pub use node::LineageNode;
