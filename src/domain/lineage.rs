//! Lineage classification: which historical family an agency descends from.
//!
//! Each named lineage is recognized by anchor ids on the ancestor chain. The
//! Haikyo co-op subdivides into three offshoot lineages, so its sub-anchors
//! are checked before the broader root match (most-specific-first).

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::agency::{Agency, AgencyIndex};
use crate::domain::error::DomainError;

/// Root of the Haikyo family (the historical actors' co-op).
pub const ANCHOR_HAIKYO: &str = "haikyo";
/// Haikyo offshoot anchor: Arts Vision branch.
pub const ANCHOR_ARTS_VISION: &str = "arts-vision";
/// Haikyo offshoot anchor: Office Osawa branch.
pub const ANCHOR_OFFICE_OSAWA: &str = "office-osawa";
/// Haikyo offshoot anchor: Sigma Seven branch.
pub const ANCHOR_SIGMA_SEVEN: &str = "sigma-seven";
/// Root anchor of the Aoni Production family.
pub const ANCHOR_AONI: &str = "aoni-production";
/// Root anchor of the Ken Production family.
pub const ANCHOR_KEN: &str = "ken-production";

/// Named historical lineage of an agency. Closed set; always recomputed from
/// the ancestor chain, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineageTag {
    HaikyoArts,
    HaikyoOsawa,
    HaikyoSigma,
    Aoni,
    Ken,
    Independent,
}

impl LineageTag {
    /// Every tag, in palette display order.
    pub const ALL: [LineageTag; 6] = [
        LineageTag::HaikyoArts,
        LineageTag::HaikyoOsawa,
        LineageTag::HaikyoSigma,
        LineageTag::Aoni,
        LineageTag::Ken,
        LineageTag::Independent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LineageTag::HaikyoArts => "haikyo-arts",
            LineageTag::HaikyoOsawa => "haikyo-osawa",
            LineageTag::HaikyoSigma => "haikyo-sigma",
            LineageTag::Aoni => "aoni",
            LineageTag::Ken => "ken",
            LineageTag::Independent => "independent",
        }
    }
}

impl fmt::Display for LineageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineageTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "haikyo-arts" => Ok(LineageTag::HaikyoArts),
            "haikyo-osawa" => Ok(LineageTag::HaikyoOsawa),
            "haikyo-sigma" => Ok(LineageTag::HaikyoSigma),
            "aoni" => Ok(LineageTag::Aoni),
            "ken" => Ok(LineageTag::Ken),
            "independent" => Ok(LineageTag::Independent),
            other => Err(DomainError::UnknownLineage(other.to_string())),
        }
    }
}

/// Classify one agency by walking its ancestor chain.
///
/// Pure function of its inputs; never fails. A dangling parent reference
/// ends the walk early, but the dangling id already collected on the partial
/// chain still counts as an anchor. A visited-id set bounds the walk so
/// self-references and parent cycles terminate.
pub fn classify_lineage(agency: &Agency, agencies: &[Agency]) -> LineageTag {
    classify_with_index(agency, &AgencyIndex::lenient(agencies))
}

/// Classify against a prebuilt index. The hierarchy builder uses this so the
/// dataset is indexed once per build rather than once per node.
pub fn classify_with_index<'a>(agency: &'a Agency, index: &AgencyIndex<'a>) -> LineageTag {
    let ancestors = ancestor_chain(agency, index);
    let root = ancestors.last().copied().unwrap_or(agency.id.as_str());
    let in_chain = |anchor: &'static str| root == anchor || ancestors.contains(&anchor);

    if in_chain(ANCHOR_HAIKYO) {
        if ancestors.contains(&ANCHOR_ARTS_VISION) {
            return LineageTag::HaikyoArts;
        }
        if ancestors.contains(&ANCHOR_OFFICE_OSAWA) {
            return LineageTag::HaikyoOsawa;
        }
        if ancestors.contains(&ANCHOR_SIGMA_SEVEN) {
            return LineageTag::HaikyoSigma;
        }
        // Haikyo-rooted but no offshoot anchor on the chain (including the
        // co-op itself): falls through to independent.
    }

    if in_chain(ANCHOR_AONI) {
        return LineageTag::Aoni;
    }
    if in_chain(ANCHOR_KEN) {
        return LineageTag::Ken;
    }

    LineageTag::Independent
}

/// Referenced parent ids from nearest to furthest, resolved or not.
///
/// The visited set is seeded with the target id; the walk aborts the moment
/// an id would repeat, leaving the last id reached as the effective root.
fn ancestor_chain<'a>(agency: &'a Agency, index: &AgencyIndex<'a>) -> Vec<&'a str> {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(agency.id.as_str());

    let mut ancestors = Vec::new();
    let mut current = agency;
    while let Some(parent_id) = current.parent_agency.as_deref() {
        if !visited.insert(parent_id) {
            break;
        }
        ancestors.push(parent_id);
        match index.get(parent_id) {
            Some(parent) => current = parent,
            None => break,
        }
    }
    ancestors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_round_trip() {
        for tag in LineageTag::ALL {
            assert_eq!(tag.as_str().parse::<LineageTag>().unwrap(), tag);
        }
    }

    #[test]
    fn unknown_tag_name_is_rejected() {
        assert!("haikyo".parse::<LineageTag>().is_err());
    }
}
