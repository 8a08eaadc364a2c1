use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown working copy status: {0}")]
pub struct UnknownChangeKind(pub String);

/// Status category of a single working copy path, as reported by `svn status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Conflicted,
    Deleted,
    External,
    Ignored,
    Incomplete,
    Merged,
    Missing,
    Modified,
    None,
    Normal,
    Obstructed,
    Replaced,
    Unversioned,
}

impl ChangeKind {
    /// The `item` attribute value used by `svn status --xml`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Conflicted => "conflicted",
            Self::Deleted => "deleted",
            Self::External => "external",
            Self::Ignored => "ignored",
            Self::Incomplete => "incomplete",
            Self::Merged => "merged",
            Self::Missing => "missing",
            Self::Modified => "modified",
            Self::None => "none",
            Self::Normal => "normal",
            Self::Obstructed => "obstructed",
            Self::Replaced => "replaced",
            Self::Unversioned => "unversioned",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeKind {
    type Err = UnknownChangeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "added" => Ok(Self::Added),
            "conflicted" => Ok(Self::Conflicted),
            "deleted" => Ok(Self::Deleted),
            "external" => Ok(Self::External),
            "ignored" => Ok(Self::Ignored),
            "incomplete" => Ok(Self::Incomplete),
            "merged" => Ok(Self::Merged),
            "missing" => Ok(Self::Missing),
            "modified" => Ok(Self::Modified),
            "none" => Ok(Self::None),
            "normal" => Ok(Self::Normal),
            "obstructed" => Ok(Self::Obstructed),
            "replaced" => Ok(Self::Replaced),
            "unversioned" => Ok(Self::Unversioned),
            other => Err(UnknownChangeKind(other.to_string())),
        }
    }
}

/// A fixed set of change kinds used to filter a status snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeMask(&'static [ChangeKind]);

impl ChangeMask {
    /// Everything worth showing to a user
    pub const INTERESTING: ChangeMask = ChangeMask(&[
        ChangeKind::Added,
        ChangeKind::Conflicted,
        ChangeKind::Deleted,
        ChangeKind::Incomplete,
        ChangeKind::Merged,
        ChangeKind::Missing,
        ChangeKind::Modified,
        ChangeKind::Obstructed,
        ChangeKind::Replaced,
    ]);

    /// Content changes that can be staged into a commit
    pub const COMMITTABLE: ChangeMask = ChangeMask(&[
        ChangeKind::Added,
        ChangeKind::Deleted,
        ChangeKind::Merged,
        ChangeKind::Modified,
        ChangeKind::Replaced,
    ]);

    pub fn contains(&self, kind: ChangeKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn kinds(&self) -> &'static [ChangeKind] {
        self.0
    }
}
