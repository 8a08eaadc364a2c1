use crate::application::services::working_copy::WorkingCopyService;
use crate::common::error::FleetError;
use crate::common::output::{Console, Tone};
use crate::common::result::FleetResult;
use crate::domain::entities::repository::Repository;
use crate::infrastructure::filesystem::config_store::ConfigStore;
use crate::infrastructure::scm::scm_interface::{ScmError, SvnClient};
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Result of applying one operation to one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operation ran
    Done,
    /// Nothing needed doing; the message goes to standard output
    Unchanged(String),
    /// A precondition did not hold; the reason goes to the diagnostic stream
    Skipped(String),
}

impl Outcome {
    pub fn unchanged(message: impl Into<String>) -> Self {
        Self::Unchanged(message.into())
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped(reason.into())
    }
}

/// Everything an operation may touch besides the repository itself
pub struct OperationContext<'a> {
    pub client: &'a dyn SvnClient,
    pub console: &'a mut Console,
}

impl<'a> OperationContext<'a> {
    pub fn new(client: &'a dyn SvnClient, console: &'a mut Console) -> Self {
        Self { client, console }
    }

    pub fn working_copies(&self) -> WorkingCopyService<'a> {
        WorkingCopyService::new(self.client)
    }

    /// `'<path>'` with the path painted as a repository
    pub fn label(&self, repository: &Repository) -> String {
        format!(
            "'{}'",
            self.console.paint(repository.local_path(), Tone::Repository)
        )
    }

    /// [`OperationContext::label`] for the diagnostic stream
    pub fn err_label(&self, repository: &Repository) -> String {
        format!(
            "'{}'",
            self.console.paint_err(repository.local_path(), Tone::Repository)
        )
    }
}

/// One fleet command, applied to each selected repository in turn
#[async_trait]
pub trait RepositoryOperation: Send + Sync {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome>;
}

/// Outcome counts of one fleet run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FleetReport {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl FleetReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for FleetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ok, {} skipped, {} failed",
            self.succeeded, self.skipped, self.failed
        )
    }
}

/// The ordered set of working copies a command acts on
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    repositories: Vec<Repository>,
}

impl Fleet {
    pub fn new(repositories: Vec<Repository>) -> Self {
        Self { repositories }
    }

    /// Opens every working copy listed in a configuration file.
    ///
    /// The first entry that cannot be opened aborts the load.
    pub async fn load(client: &dyn SvnClient, config: &Path) -> FleetResult<Self> {
        let paths = ConfigStore::read_repository_list(config).await?;
        let service = WorkingCopyService::new(client);

        let mut repositories = Vec::with_capacity(paths.len());
        for path in &paths {
            repositories.push(service.open(path).await?);
        }

        tracing::debug!(config = %config.display(), count = repositories.len(), "fleet loaded");
        Ok(Self::new(repositories))
    }

    /// Keeps the repositories whose path ends with `filter`.
    ///
    /// Several repositories may share the suffix, all of them stay selected.
    pub fn select(&mut self, filter: &str) -> FleetResult<()> {
        self.repositories.retain(|repo| repo.matches_filter(filter));

        match self.repositories.len() {
            0 => Err(FleetError::config_error(
                format!("Unknown repository: {}", filter),
                None,
            )),
            1 => Ok(()),
            count => {
                tracing::info!(filter, count, "repository filter matched several entries");
                Ok(())
            }
        }
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Applies `operation` to every repository in order.
    ///
    /// Skips and repository failures are reported and counted; they never
    /// stop the loop. Only a fatal error, such as a broken output stream,
    /// ends the run early.
    pub async fn run(
        &mut self,
        operation: &dyn RepositoryOperation,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<FleetReport> {
        let mut report = FleetReport::default();

        for repository in self.repositories.iter_mut() {
            let outcome = operation.apply(repository, ctx).await;
            ctx.console.finish_line()?;

            match outcome {
                Ok(Outcome::Done) => report.succeeded += 1,
                Ok(Outcome::Unchanged(message)) => {
                    let label = ctx.label(repository);
                    ctx.console.line(&format!("{} {}", label, message))?;
                    report.succeeded += 1;
                }
                Ok(Outcome::Skipped(reason)) => {
                    let label = ctx.err_label(repository);
                    let reason = ctx.console.paint_err(&reason, Tone::Warning);
                    ctx.console.warn(&format!("{} {}", label, reason))?;
                    report.skipped += 1;
                }
                Err(error) if error.is_fatal() => return Err(error),
                Err(error) => {
                    tracing::debug!(repository = %repository, error = ?error, "operation failed");
                    report_failure(ctx, repository, &error)?;
                    report.failed += 1;
                }
            }
        }

        ctx.console.flush()?;
        Ok(report)
    }
}

fn report_failure(
    ctx: &mut OperationContext<'_>,
    repository: &Repository,
    error: &FleetError,
) -> std::io::Result<()> {
    let label = ctx.err_label(repository);

    match error {
        FleetError::Scm(ScmError::RemoteCommandFailed {
            exit_code, stderr, ..
        }) => {
            let heading = ctx
                .console
                .paint_err(&format!("failed ({}):", exit_code), Tone::Failure);
            ctx.console.warn(&format!("{} {}", label, heading))?;
            for line in stderr.lines() {
                ctx.console.warn(&format!("  {}", line))?;
            }
        }
        other => {
            let heading = ctx.console.paint_err("failed:", Tone::Failure);
            ctx.console.warn(&format!("{} {}", label, heading))?;
            ctx.console.warn(&format!("  {}", other))?;
        }
    }

    Ok(())
}
