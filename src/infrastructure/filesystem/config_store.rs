use crate::domain::value_objects::revision_set::{RevisionSet, RevisionSetIssue};
use std::path::Path;
use thiserror::Error;
use tokio::fs as async_fs;

/// Configuration store related errors
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("Configuration file not found at path: {0}")]
    ConfigFileNotFound(String),

    #[error("Configuration file read failed: {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reads the plain-text files a fleet is described by
pub struct ConfigStore;

impl ConfigStore {
    /// Repository paths listed in a fleet configuration, in file order.
    ///
    /// Surrounding whitespace is trimmed; blank lines and `#` comments are
    /// skipped.
    pub async fn read_repository_list(path: &Path) -> Result<Vec<String>, ConfigStoreError> {
        let content = Self::read(path).await?;
        Ok(parse_repository_list(&content))
    }

    /// Reads a revision-set file. Malformed lines come back next to the
    /// parsed set for the caller to report.
    pub async fn read_revision_set(
        path: &Path,
    ) -> Result<(RevisionSet, Vec<RevisionSetIssue>), ConfigStoreError> {
        let content = Self::read(path).await?;
        let (set, issues) = RevisionSet::parse(&content);
        tracing::debug!(
            file = %path.display(),
            entries = set.len(),
            issues = issues.len(),
            "revision set loaded"
        );
        Ok((set, issues))
    }

    async fn read(path: &Path) -> Result<String, ConfigStoreError> {
        if !async_fs::try_exists(path).await.unwrap_or(false) {
            return Err(ConfigStoreError::ConfigFileNotFound(
                path.display().to_string(),
            ));
        }
        async_fs::read_to_string(path)
            .await
            .map_err(|source| ConfigStoreError::ReadFailed {
                path: path.display().to_string(),
                source,
            })
    }
}

/// Splits configuration text into repository paths
pub fn parse_repository_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
