use crate::domain::value_objects::change_kind::{ChangeKind, ChangeMask};
use serde::{Deserialize, Serialize};

/// A pending modification of one working copy path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Path relative to the working copy root
    pub path: String,
    pub kind: ChangeKind,
}

impl Change {
    pub fn new(path: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Keeps the changes whose kind is part of `mask`, preserving order
pub fn filter_changes(changes: Vec<Change>, mask: ChangeMask) -> Vec<Change> {
    changes
        .into_iter()
        .filter(|change| mask.contains(change.kind))
        .collect()
}
