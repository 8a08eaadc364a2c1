use crate::domain::entities::{change::Change, log_entry::LogEntry, repository::WorkingCopyInfo};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Boundary to the Subversion client.
///
/// Every method maps onto one `svn` invocation. Read-only queries return
/// parsed records, mutations return `()` or the lines `svn` printed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SvnClient: Send + Sync {
    /// `svn info` of a working copy
    async fn info(&self, path: &Path) -> Result<WorkingCopyInfo, ScmError>;

    /// `svn status` of a working copy, paths relative to its root
    async fn status(&self, path: &Path) -> Result<Vec<Change>, ScmError>;

    /// `svn list`, entries without their trailing `/`
    async fn list(&self, url: &str) -> Result<Vec<String>, ScmError>;

    /// `svn log` of a URL, newest first unless the query reverses the range
    async fn log(&self, url: &str, query: &LogQuery) -> Result<Vec<LogEntry>, ScmError>;

    /// Server-side `svn copy`
    async fn copy(&self, source: &str, target: &str, message: &str) -> Result<(), ScmError>;

    /// Server-side `svn rm`
    async fn remove(&self, url: &str, message: &str) -> Result<(), ScmError>;

    /// Server-side `svn rename`
    async fn rename(&self, source: &str, target: &str, message: &str) -> Result<(), ScmError>;

    /// `svn switch` of a working copy onto another URL
    async fn switch(&self, url: &str, path: &Path) -> Result<(), ScmError>;

    /// `svn update`, to HEAD unless a revision is given
    async fn update(&self, path: &Path, revision: Option<u64>) -> Result<(), ScmError>;

    /// `svn commit` of exactly `targets` (relative to `path`)
    async fn commit(&self, path: &Path, targets: &[String], message: &str)
        -> Result<(), ScmError>;

    /// `svn diff`, one element per output line
    async fn diff(&self, target: &DiffTarget) -> Result<Vec<String>, ScmError>;

    /// `svn merge --non-interactive` into a working copy
    async fn merge(
        &self,
        source_url: &str,
        path: &Path,
        options: &MergeOptions,
    ) -> Result<Vec<String>, ScmError>;

    /// `svn revert --recursive`
    async fn revert(&self, path: &Path) -> Result<(), ScmError>;
}

/// Options for history queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    /// `--limit`
    pub limit: Option<u32>,
    /// `--search`
    pub search: Option<String>,
    /// `-r`, e.g. `0:HEAD`
    pub revision_range: Option<String>,
    /// `--stop-on-copy`
    pub stop_on_copy: bool,
}

impl LogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search;
        self
    }

    pub fn with_revision_range(mut self, range: impl Into<String>) -> Self {
        self.revision_range = Some(range.into());
        self
    }

    pub fn with_stop_on_copy(mut self, stop_on_copy: bool) -> Self {
        self.stop_on_copy = stop_on_copy;
        self
    }
}

/// Options for merges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// `--dry-run`
    pub dry_run: bool,
    /// `-r`, passed through verbatim
    pub revision_range: Option<String>,
}

/// What `svn diff` compares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffTarget {
    /// Local modifications of a working copy
    WorkingCopy(PathBuf),
    /// `--old <old> --new <new>`
    Urls { old: String, new: String },
}

/// Errors that can occur while talking to `svn`
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("Command `{command}` failed with exit code {exit_code}: {stderr}")]
    RemoteCommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("SCM executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("Could not parse output of `{command}`: {message}")]
    ParseError { command: String, message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ScmError {
    /// Create a remote command failure carrying the diagnostic text verbatim
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::RemoteCommandFailed {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }

    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }

    pub fn parse_error(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            command: command.into(),
            message: message.into(),
        }
    }
}
