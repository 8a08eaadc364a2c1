use crate::domain::value_objects::branch_path::{BranchPath, LayoutError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use url::Url;

/// Metadata reported by `svn info` for a working copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingCopyInfo {
    /// Full URL the working copy is switched to
    pub url: String,
    /// Root URL of the hosting repository
    pub repository_root: String,
    /// Working copy revision
    pub revision: u64,
}

impl WorkingCopyInfo {
    pub fn new(url: impl Into<String>, repository_root: impl Into<String>, revision: u64) -> Self {
        Self {
            url: url.into(),
            repository_root: repository_root.into(),
            revision,
        }
    }
}

/// A working copy of the fleet, keyed by its local path.
///
/// URL and revision are only ever replaced together through
/// [`Repository::update_info`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    local_path: String,
    info: WorkingCopyInfo,
}

impl Repository {
    pub fn new(local_path: impl Into<String>, info: WorkingCopyInfo) -> Self {
        Self {
            local_path: local_path.into(),
            info,
        }
    }

    /// Path as written in the fleet configuration
    pub fn local_path(&self) -> &str {
        &self.local_path
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.local_path)
    }

    pub fn url(&self) -> &str {
        &self.info.url
    }

    pub fn repository_root(&self) -> &str {
        &self.info.repository_root
    }

    pub fn revision(&self) -> u64 {
        self.info.revision
    }

    pub fn info(&self) -> &WorkingCopyInfo {
        &self.info
    }

    /// Replaces the cached metadata after a mutating operation
    pub fn update_info(&mut self, info: WorkingCopyInfo) {
        self.info = info;
    }

    /// Logical location the working copy is switched to
    pub fn current_path(&self) -> Result<BranchPath, LayoutError> {
        self.parse_location().map(|(_, layout)| layout)
    }

    /// Last segment of [`Repository::current_path`]
    pub fn current_branch(&self) -> Result<String, LayoutError> {
        self.current_path().map(|layout| layout.name().to_string())
    }

    /// URL of the project directory holding `trunk`, `branches` and `tags`
    pub fn base_url(&self) -> Result<Url, LayoutError> {
        self.parse_location().map(|(base, _)| base)
    }

    fn parse_location(&self) -> Result<(Url, BranchPath), LayoutError> {
        BranchPath::parse_url_within(&self.info.url, &self.info.repository_root)
    }

    pub fn branch_url(&self, branch: &BranchPath) -> Result<Url, LayoutError> {
        branch.url_in(&self.base_url()?)
    }

    /// URL of the `branches` directory itself
    pub fn branches_url(&self) -> Result<Url, LayoutError> {
        let mut url = self.base_url()?;
        url.path_segments_mut()
            .map_err(|_| LayoutError::InvalidUrl {
                url: self.info.url.clone(),
                message: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push("branches");
        Ok(url)
    }

    /// Suffix match used by the single-repository filter
    pub fn matches_filter(&self, filter: &str) -> bool {
        self.local_path.ends_with(filter)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.local_path)
    }
}
