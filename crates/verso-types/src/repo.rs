use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TypeError;

/// The kind of external entity a repository tracks.
///
/// One repository version-controls exactly one entity. The set is closed:
/// unknown tags are rejected at the serde boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// A legal contract document.
    Contract,
    /// A reusable contract template.
    Template,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contract => write!(f, "contract"),
            Self::Template => write!(f, "template"),
        }
    }
}

impl FromStr for EntityType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contract" => Ok(Self::Contract),
            "template" => Ok(Self::Template),
            other => Err(TypeError::UnknownEntityType(other.to_string())),
        }
    }
}

/// Opaque repository identifier (UUID v7: time-ordered, collision-free).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoId(Uuid);

impl RepoId {
    /// Mint a fresh repository id.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse from string form.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| TypeError::InvalidRepoId(e.to_string()))
    }
}

impl Default for RepoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RepoId({})", self.0)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RepoId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A version-controlled entity: one repository per tracked contract or
/// template, created once and never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Opaque repository identifier.
    pub id: RepoId,
    /// Kind of the tracked entity.
    pub entity_type: EntityType,
    /// Identifier of the external entity this repository versions.
    pub entity_id: String,
    /// Name of the default branch, `"main"` on creation.
    pub default_branch: String,
}

impl Repository {
    /// Create a repository record with a fresh id and `"main"` as the
    /// default branch.
    pub fn new(entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self {
            id: RepoId::new(),
            entity_type,
            entity_id: entity_id.into(),
            default_branch: "main".to_string(),
        }
    }
}
