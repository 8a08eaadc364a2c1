use super::scm_interface::{DiffTarget, LogQuery, MergeOptions, ScmError, SvnClient};
use super::svn_output;
use crate::domain::entities::{change::Change, log_entry::LogEntry, repository::WorkingCopyInfo};
use crate::infrastructure::process::{CommandExecutor, CommandOutput};
use async_trait::async_trait;
use std::path::Path;

/// Default name of the Subversion command line client
pub const DEFAULT_SVN_EXECUTABLE: &str = "svn";

/// [`SvnClient`] backed by the `svn` command line client
pub struct SvnScm {
    svn_executable: String,
}

impl Default for SvnScm {
    fn default() -> Self {
        Self {
            svn_executable: DEFAULT_SVN_EXECUTABLE.to_string(),
        }
    }
}

impl SvnScm {
    /// Create a new SVN SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new SVN SCM instance with custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            svn_executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.svn_executable
    }

    fn describe(&self, args: &[String]) -> String {
        format!("{} {}", self.svn_executable, args.join(" "))
    }

    /// Execute an SVN command in the given directory
    async fn execute_svn_command(
        &self,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> Result<CommandOutput, ScmError> {
        tracing::debug!(command = %self.describe(args), dir = ?working_dir, "running svn");

        CommandExecutor::execute(&self.svn_executable, args, working_dir)
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound && working_dir.map_or(true, Path::exists) {
                    ScmError::executable_not_found(&self.svn_executable)
                } else {
                    ScmError::from(e)
                }
            })
    }

    /// Execute an SVN command and turn a non-zero exit into
    /// [`ScmError::RemoteCommandFailed`]
    async fn execute_svn_command_checked(
        &self,
        args: Vec<String>,
        working_dir: Option<&Path>,
    ) -> Result<CommandOutput, ScmError> {
        let args = non_interactive(args);
        let output = self.execute_svn_command(&args, working_dir).await?;

        if !output.success() {
            return Err(ScmError::command_failed(
                self.describe(&args),
                output.exit_code,
                output.stderr.trim_end(),
            ));
        }

        Ok(output)
    }

    fn parse_failure(&self, subcommand: &str, message: String) -> ScmError {
        ScmError::parse_error(format!("{} {}", self.svn_executable, subcommand), message)
    }
}

/// Inserts `--non-interactive` right after the subcommand, ahead of any `--`
fn non_interactive(mut args: Vec<String>) -> Vec<String> {
    let at = args.len().min(1);
    args.insert(at, "--non-interactive".to_string());
    args
}

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

#[async_trait]
impl SvnClient for SvnScm {
    async fn info(&self, path: &Path) -> Result<WorkingCopyInfo, ScmError> {
        let output = self
            .execute_svn_command_checked(args(&["info", "--xml"]), Some(path))
            .await?;
        svn_output::parse_info(&output.stdout).map_err(|e| self.parse_failure("info", e))
    }

    async fn status(&self, path: &Path) -> Result<Vec<Change>, ScmError> {
        let output = self
            .execute_svn_command_checked(args(&["status", "--xml"]), Some(path))
            .await?;
        svn_output::parse_status(&output.stdout).map_err(|e| self.parse_failure("status", e))
    }

    async fn list(&self, url: &str) -> Result<Vec<String>, ScmError> {
        let output = self
            .execute_svn_command_checked(args(&["list", url]), None)
            .await?;
        Ok(svn_output::parse_list(&output.stdout))
    }

    async fn log(&self, url: &str, query: &LogQuery) -> Result<Vec<LogEntry>, ScmError> {
        let mut cmd = args(&["log", "--xml"]);
        if let Some(limit) = query.limit {
            cmd.push("--limit".to_string());
            cmd.push(limit.to_string());
        }
        if let Some(search) = &query.search {
            cmd.push("--search".to_string());
            cmd.push(search.clone());
        }
        if let Some(range) = &query.revision_range {
            cmd.push("-r".to_string());
            cmd.push(range.clone());
        }
        if query.stop_on_copy {
            cmd.push("--stop-on-copy".to_string());
        }
        cmd.push(url.to_string());

        let output = self.execute_svn_command_checked(cmd, None).await?;
        svn_output::parse_log(&output.stdout).map_err(|e| self.parse_failure("log", e))
    }

    async fn copy(&self, source: &str, target: &str, message: &str) -> Result<(), ScmError> {
        self.execute_svn_command_checked(args(&["copy", source, target, "-m", message]), None)
            .await
            .map(|_| ())
    }

    async fn remove(&self, url: &str, message: &str) -> Result<(), ScmError> {
        self.execute_svn_command_checked(args(&["rm", url, "-m", message]), None)
            .await
            .map(|_| ())
    }

    async fn rename(&self, source: &str, target: &str, message: &str) -> Result<(), ScmError> {
        self.execute_svn_command_checked(args(&["rename", source, target, "-m", message]), None)
            .await
            .map(|_| ())
    }

    async fn switch(&self, url: &str, path: &Path) -> Result<(), ScmError> {
        self.execute_svn_command_checked(args(&["switch", url, "."]), Some(path))
            .await
            .map(|_| ())
    }

    async fn update(&self, path: &Path, revision: Option<u64>) -> Result<(), ScmError> {
        let mut cmd = args(&["update"]);
        if let Some(revision) = revision {
            cmd.push("-r".to_string());
            cmd.push(revision.to_string());
        }
        self.execute_svn_command_checked(cmd, Some(path))
            .await
            .map(|_| ())
    }

    async fn commit(
        &self,
        path: &Path,
        targets: &[String],
        message: &str,
    ) -> Result<(), ScmError> {
        let mut cmd = args(&["commit", "-m", message, "--"]);
        cmd.extend(targets.iter().cloned());
        self.execute_svn_command_checked(cmd, Some(path))
            .await
            .map(|_| ())
    }

    async fn diff(&self, target: &DiffTarget) -> Result<Vec<String>, ScmError> {
        let output = match target {
            DiffTarget::WorkingCopy(path) => {
                self.execute_svn_command_checked(args(&["diff"]), Some(path))
                    .await?
            }
            DiffTarget::Urls { old, new } => {
                self.execute_svn_command_checked(args(&["diff", "--old", old, "--new", new]), None)
                    .await?
            }
        };
        Ok(output.stdout_lines())
    }

    async fn merge(
        &self,
        source_url: &str,
        path: &Path,
        options: &MergeOptions,
    ) -> Result<Vec<String>, ScmError> {
        let mut cmd = args(&["merge"]);
        if options.dry_run {
            cmd.push("--dry-run".to_string());
        }
        if let Some(range) = &options.revision_range {
            cmd.push("-r".to_string());
            cmd.push(range.clone());
        }
        cmd.push(source_url.to_string());
        cmd.push(".".to_string());

        let output = self.execute_svn_command_checked(cmd, Some(path)).await?;
        Ok(output.stdout_lines())
    }

    async fn revert(&self, path: &Path) -> Result<(), ScmError> {
        self.execute_svn_command_checked(args(&["revert", "--recursive", "."]), Some(path))
            .await
            .map(|_| ())
    }
}
