//! Working copy changes: status, commit, update, diff and revert.

use super::fleet::{OperationContext, Outcome, RepositoryOperation};
use crate::common::output::Tone;
use crate::common::result::FleetResult;
use crate::domain::entities::change::{filter_changes, Change};
use crate::domain::entities::repository::Repository;
use crate::domain::value_objects::branch_path::BranchPath;
use crate::domain::value_objects::change_kind::ChangeMask;
use crate::domain::value_objects::revision_set::RevisionSet;
use crate::infrastructure::scm::scm_interface::{DiffTarget, SvnClient};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Status query of a working copy, filtered by `mask`
pub async fn pending_changes(
    client: &dyn SvnClient,
    repository: &Repository,
    mask: ChangeMask,
) -> FleetResult<Vec<Change>> {
    let changes = client.status(repository.path()).await?;
    Ok(filter_changes(changes, mask))
}

/// How `status` renders its results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFormat {
    #[default]
    Text,
    /// One JSON document for the whole fleet, written after the run
    Json,
}

/// Status of one working copy as serialized by `status --output json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryStatus {
    pub path: String,
    pub url: String,
    pub revision: u64,
    pub location: BranchPath,
    pub changes: Vec<Change>,
}

/// `status`: revision, location and interesting changes
#[derive(Debug, Default)]
pub struct ShowStatus {
    format: StatusFormat,
    collected: Mutex<Vec<RepositoryStatus>>,
}

impl ShowStatus {
    pub fn new(format: StatusFormat) -> Self {
        Self {
            format,
            collected: Mutex::new(Vec::new()),
        }
    }

    /// Statuses gathered so far, in fleet order
    pub fn collected(&self) -> Vec<RepositoryStatus> {
        self.collected
            .lock()
            .map(|statuses| statuses.clone())
            .unwrap_or_default()
    }

    pub fn render_json(&self) -> FleetResult<String> {
        Ok(serde_json::to_string_pretty(&self.collected())?)
    }

    fn print(&self, status: &RepositoryStatus, ctx: &mut OperationContext<'_>) -> FleetResult<()> {
        let mut heading = format!(
            "{} {}",
            ctx.console
                .paint(&format!("{:<50}", status.path), Tone::Repository),
            ctx.console
                .paint(&format!("#{:>6}", status.revision), Tone::Revision)
        );
        if !status.location.is_trunk() {
            heading.push_str(&ctx.console.paint(
                &format!(" @ {}", status.location.relative_path()),
                Tone::Branch,
            ));
        }
        ctx.console.line(&heading)?;

        for change in &status.changes {
            let kind = ctx.console.paint(
                &format!("{:<15}", change.kind.as_str()),
                Tone::Change(change.kind),
            );
            ctx.console.line(&format!(" - {} {}", kind, change.path))?;
        }
        Ok(())
    }
}

#[async_trait]
impl RepositoryOperation for ShowStatus {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let location = repository.current_path()?;
        let changes = pending_changes(ctx.client, repository, ChangeMask::INTERESTING).await?;

        let status = RepositoryStatus {
            path: repository.local_path().to_string(),
            url: repository.url().to_string(),
            revision: repository.revision(),
            location,
            changes,
        };

        if self.format == StatusFormat::Text {
            self.print(&status, ctx)?;
        }
        if let Ok(mut collected) = self.collected.lock() {
            collected.push(status);
        }
        Ok(Outcome::Done)
    }
}

/// `commit`: commits every committable change with one message
#[derive(Debug, Clone)]
pub struct CommitChanges {
    pub message: String,
}

impl CommitChanges {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl RepositoryOperation for CommitChanges {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let changes = pending_changes(ctx.client, repository, ChangeMask::COMMITTABLE).await?;
        if changes.is_empty() {
            return Ok(Outcome::unchanged("no pending changes, skipping."));
        }

        let targets: Vec<String> = changes.into_iter().map(|change| change.path).collect();
        let label = ctx.label(repository);
        ctx.console
            .write(&format!("{} committing {} changes... ", label, targets.len()))?;

        ctx.client
            .commit(repository.path(), &targets, &self.message)
            .await?;
        ctx.client.update(repository.path(), None).await?;
        ctx.working_copies().refresh(repository).await?;

        let revision = ctx
            .console
            .paint(&format!("#{}", repository.revision()), Tone::Revision);
        ctx.console.line(&format!("at revision {}", revision))?;
        Ok(Outcome::Done)
    }
}

/// `update`: to HEAD, or to the revision pinned by a revision set
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkingCopy {
    pub revisions: RevisionSet,
}

impl UpdateWorkingCopy {
    pub fn new(revisions: RevisionSet) -> Self {
        Self { revisions }
    }
}

#[async_trait]
impl RepositoryOperation for UpdateWorkingCopy {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let pinned = self.revisions.get(repository.local_path());
        let label = ctx.label(repository);
        ctx.console.write(&format!("{} updating... ", label))?;

        ctx.client.update(repository.path(), pinned).await?;
        ctx.working_copies().refresh(repository).await?;

        let revision = ctx
            .console
            .paint(&format!("#{}", repository.revision()), Tone::Revision);
        ctx.console.line(&format!("at revision {}", revision))?;
        Ok(Outcome::Done)
    }
}

/// `diff`: local modifications of each working copy
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffWorkingCopy;

#[async_trait]
impl RepositoryOperation for DiffWorkingCopy {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let target = DiffTarget::WorkingCopy(repository.path().to_path_buf());
        for line in ctx.client.diff(&target).await? {
            ctx.console.line(&line)?;
        }
        Ok(Outcome::Done)
    }
}

/// `revert`: drops every local modification
#[derive(Debug, Clone, Copy, Default)]
pub struct RevertChanges;

#[async_trait]
impl RepositoryOperation for RevertChanges {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let label = ctx.label(repository);
        ctx.console.write(&format!("{} reverting changes... ", label))?;
        ctx.client.revert(repository.path()).await?;
        ctx.console.line("done")?;
        Ok(Outcome::Done)
    }
}
