//! Agency records: the flat input entities of the lineage engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Operational status of an agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgencyStatus {
    Active,
    Dissolved,
    Merged,
}

/// A talent-management agency record.
///
/// `parent_agency` is present iff the agency was formed by split or spin-off
/// from another agency. The reference may dangle; everything downstream must
/// tolerate ids that resolve to nothing. Field names serialize in camelCase
/// so existing JSON datasets load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dissolved: Option<String>,
    pub status: AgencyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_agency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_into: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Id-keyed lookup over an agency dataset.
#[derive(Debug)]
pub struct AgencyIndex<'a> {
    by_id: HashMap<&'a str, &'a Agency>,
}

impl<'a> AgencyIndex<'a> {
    /// Strict index; rejects datasets with colliding ids.
    pub fn new(agencies: &'a [Agency]) -> Result<Self, DomainError> {
        let mut by_id = HashMap::with_capacity(agencies.len());
        for agency in agencies {
            if by_id.insert(agency.id.as_str(), agency).is_some() {
                return Err(DomainError::DuplicateId(agency.id.clone()));
            }
        }
        Ok(Self { by_id })
    }

    /// Lenient index for classification and tree building: the first record
    /// with a given id wins, later collisions are ignored.
    pub fn lenient(agencies: &'a [Agency]) -> Self {
        let mut by_id = HashMap::with_capacity(agencies.len());
        for agency in agencies {
            by_id.entry(agency.id.as_str()).or_insert(agency);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Agency> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
