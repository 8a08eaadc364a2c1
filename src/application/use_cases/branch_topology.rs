//! Branch operations over the `trunk` / `branches` / `tags` layout.
//!
//! Every operation checks its preconditions locally or with read-only queries
//! first, so a skipped repository never sees a mutating `svn` call.

use super::fleet::{OperationContext, Outcome, RepositoryOperation};
use crate::common::error::FleetError;
use crate::common::output::Tone;
use crate::common::result::{FleetResult, OptionExt};
use crate::domain::entities::repository::Repository;
use crate::domain::value_objects::branch_path::BranchPath;
use crate::infrastructure::scm::scm_interface::{DiffTarget, LogQuery, MergeOptions};
use async_trait::async_trait;

fn missing(branch: &BranchPath) -> Outcome {
    Outcome::skipped(format!(
        "branch '{}' does not exist, skipping",
        branch.short_name()
    ))
}

/// `branch list`: names under `<base>/branches`
#[derive(Debug, Clone, Default)]
pub struct ListBranches;

#[async_trait]
impl RepositoryOperation for ListBranches {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let url = repository.branches_url()?;
        let branches = ctx.client.list(url.as_str()).await?;

        let heading = ctx.console.paint(repository.local_path(), Tone::Repository);
        ctx.console.line(&format!("{}:", heading))?;
        for branch in branches {
            let branch = ctx.console.paint(&branch, Tone::Branch);
            ctx.console.line(&format!("  {}", branch))?;
        }
        Ok(Outcome::Done)
    }
}

/// `branch origin`: the revision a branch was copied at
#[derive(Debug, Clone, Default)]
pub struct FindOrigin {
    /// Defaults to the current location of each working copy
    pub branch: Option<BranchPath>,
}

impl FindOrigin {
    pub fn new(branch: Option<BranchPath>) -> Self {
        Self { branch }
    }
}

#[async_trait]
impl RepositoryOperation for FindOrigin {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let branch = match &self.branch {
            Some(branch) => {
                if !ctx.working_copies().branch_exists(repository, branch).await {
                    return Ok(missing(branch));
                }
                branch.clone()
            }
            None => repository.current_path()?,
        };

        let url = repository.branch_url(&branch)?;
        let query = LogQuery::new()
            .with_stop_on_copy(true)
            .with_limit(1)
            .with_revision_range("0:HEAD");
        let history = ctx.client.log(url.as_str(), &query).await?;
        let origin = history.first().map(|entry| entry.revision).ok_or_repository_error(
            format!("no history found for '{}'", branch.short_name()),
            repository.local_path(),
        )?;

        let name = ctx.console.paint(
            &format!("{:<35}", repository.local_path()),
            Tone::Repository,
        );
        let revision = ctx.console.paint(&format!("#{}", origin), Tone::Revision);
        ctx.console.line(&format!(
            "{} '{}' origin rev {}",
            name,
            ctx.console.paint(&branch.short_name(), Tone::Branch),
            revision
        ))?;
        Ok(Outcome::Done)
    }
}

/// `branch create`: server-side copy of trunk or another branch
#[derive(Debug, Clone)]
pub struct CreateBranch {
    pub name: String,
    /// Defaults to trunk
    pub source: Option<String>,
}

impl CreateBranch {
    pub fn new(name: impl Into<String>, source: Option<String>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    fn source_path(&self) -> BranchPath {
        self.source
            .as_deref()
            .map(BranchPath::from_name)
            .unwrap_or(BranchPath::Trunk)
    }

    fn commit_message(&self, source: &BranchPath) -> String {
        match source {
            BranchPath::Trunk => format!("Creating branch '{}' from trunk.", self.name),
            other => format!(
                "Creating branch '{}' from branch '{}'.",
                self.name,
                other.short_name()
            ),
        }
    }
}

#[async_trait]
impl RepositoryOperation for CreateBranch {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let source = self.source_path();
        let target = BranchPath::from_name(&self.name);
        let service = ctx.working_copies();

        if !service.branch_exists(repository, &source).await {
            return Ok(Outcome::skipped(format!(
                "source branch '{}' does not exist, skipping",
                source.short_name()
            )));
        }
        if service.branch_exists(repository, &target).await {
            return Ok(Outcome::unchanged(format!(
                "branch '{}' exists",
                target.short_name()
            )));
        }

        let source_label = match &source {
            BranchPath::Trunk => "trunk".to_string(),
            other => format!("branch '{}'", other.short_name()),
        };
        let label = ctx.label(repository);
        ctx.console.line(&format!(
            "{} creating branch '{}' from {}",
            label,
            ctx.console.paint(&self.name, Tone::Branch),
            source_label
        ))?;

        let source_url = repository.branch_url(&source)?;
        let target_url = repository.branch_url(&target)?;
        ctx.client
            .copy(
                source_url.as_str(),
                target_url.as_str(),
                &self.commit_message(&source),
            )
            .await?;
        Ok(Outcome::Done)
    }
}

/// `branch checkout`: switches the working copy onto another branch
#[derive(Debug, Clone)]
pub struct CheckoutBranch {
    pub name: String,
}

impl CheckoutBranch {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl RepositoryOperation for CheckoutBranch {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let target = BranchPath::from_name(&self.name);

        if repository.current_path()? == target {
            return Ok(Outcome::skipped(format!(
                "already on branch '{}'",
                target.short_name()
            )));
        }
        if !ctx.working_copies().branch_exists(repository, &target).await {
            return Ok(missing(&target));
        }

        let label = ctx.label(repository);
        ctx.console.line(&format!(
            "{} checking out branch '{}'",
            label,
            ctx.console.paint(&target.short_name(), Tone::Branch)
        ))?;

        let url = repository.branch_url(&target)?;
        ctx.client.switch(url.as_str(), repository.path()).await?;
        ctx.working_copies().refresh(repository).await?;
        Ok(Outcome::Done)
    }
}

/// `branch delete`: removes a branch or archives it as `<name>.closed`
#[derive(Debug, Clone)]
pub struct DeleteBranch {
    pub name: String,
    pub archive: bool,
}

impl DeleteBranch {
    pub fn new(name: impl Into<String>, archive: bool) -> Self {
        Self {
            name: name.into(),
            archive,
        }
    }
}

#[async_trait]
impl RepositoryOperation for DeleteBranch {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let branch = BranchPath::from_name(&self.name);

        if branch.is_trunk() {
            return Ok(Outcome::skipped("trunk cannot be deleted"));
        }
        if repository.current_path()? == branch {
            return Ok(Outcome::skipped(format!(
                "is currently on branch '{}', cannot delete",
                branch.short_name()
            )));
        }
        if !ctx.working_copies().branch_exists(repository, &branch).await {
            return Ok(missing(&branch));
        }

        let url = repository.branch_url(&branch)?;
        let label = ctx.label(repository);
        let painted = ctx.console.paint(&self.name, Tone::Branch);

        match branch.archived().filter(|_| self.archive) {
            Some(archived) => {
                ctx.console
                    .line(&format!("{} archiving branch '{}'", label, painted))?;
                let archive_url = repository.branch_url(&archived)?;
                ctx.client
                    .rename(
                        url.as_str(),
                        archive_url.as_str(),
                        &format!("Archiving branch '{}'", self.name),
                    )
                    .await?;
            }
            None => {
                ctx.console
                    .line(&format!("{} deleting branch '{}'", label, painted))?;
                ctx.client
                    .remove(url.as_str(), &format!("Deleting branch '{}'", self.name))
                    .await?;
            }
        }
        Ok(Outcome::Done)
    }
}

/// `branch diff`: textual difference between two branches
#[derive(Debug, Clone)]
pub struct DiffBranches {
    pub old: BranchPath,
    /// Defaults to the current location of each working copy
    pub new: Option<BranchPath>,
}

impl DiffBranches {
    pub fn new(old: BranchPath, new: Option<BranchPath>) -> Self {
        Self { old, new }
    }
}

#[async_trait]
impl RepositoryOperation for DiffBranches {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let new = match &self.new {
            Some(new) => new.clone(),
            None => repository.current_path()?,
        };

        if new == self.old {
            return Ok(Outcome::skipped(format!(
                "can not diff '{}' against '{}'",
                new.short_name(),
                self.old.short_name()
            )));
        }

        let service = ctx.working_copies();
        if !service.branch_exists(repository, &self.old).await {
            return Ok(missing(&self.old));
        }
        if self.new.is_some() && !service.branch_exists(repository, &new).await {
            return Ok(missing(&new));
        }

        let target = DiffTarget::Urls {
            old: repository.branch_url(&self.old)?.to_string(),
            new: repository.branch_url(&new)?.to_string(),
        };
        for line in ctx.client.diff(&target).await? {
            ctx.console.line(&line)?;
        }
        Ok(Outcome::Done)
    }
}

/// `branch merge`: merges another branch into the working copy
#[derive(Debug, Clone)]
pub struct MergeBranch {
    pub name: String,
    pub dry_run: bool,
    pub revision_range: Option<String>,
}

impl MergeBranch {
    pub fn new(name: impl Into<String>, dry_run: bool, revision_range: Option<String>) -> Self {
        Self {
            name: name.into(),
            dry_run,
            revision_range,
        }
    }
}

#[async_trait]
impl RepositoryOperation for MergeBranch {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let source = BranchPath::from_name(&self.name);
        let current = repository.current_path()?;

        if source == current {
            return Ok(Outcome::skipped(format!(
                "can not merge branch '{}' with itself",
                source.short_name()
            )));
        }
        if !ctx.working_copies().branch_exists(repository, &source).await {
            return Ok(missing(&source));
        }

        let label = ctx.label(repository);
        ctx.console.line(&format!(
            "{} merging changes from '{}' into '{}'",
            label,
            ctx.console.paint(&source.short_name(), Tone::Branch),
            ctx.console.paint(&current.short_name(), Tone::Branch)
        ))?;

        let url = repository.branch_url(&source)?;
        let options = MergeOptions {
            dry_run: self.dry_run,
            revision_range: self.revision_range.clone(),
        };
        let lines = ctx
            .client
            .merge(url.as_str(), repository.path(), &options)
            .await
            .map_err(FleetError::from)?;
        for line in lines {
            ctx.console.line(&format!("  {}", line))?;
        }
        Ok(Outcome::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::output::{Console, PlainStyle};
    use crate::domain::entities::log_entry::LogEntry;
    use crate::domain::entities::repository::WorkingCopyInfo;
    use crate::infrastructure::scm::scm_interface::{MockSvnClient, ScmError};
    use pretty_assertions::assert_eq;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    const BASE: &str = "https://svn.example.com/repos/Lib";

    fn repo_on(location: &str) -> Repository {
        Repository::new(
            "Lib",
            WorkingCopyInfo::new(
                format!("{}/{}", BASE, location),
                "https://svn.example.com/repos",
                10,
            ),
        )
    }

    fn console(out: &Buffer) -> Console {
        Console::new(
            Box::new(out.clone()),
            Box::new(Buffer::default()),
            Box::new(PlainStyle),
        )
    }

    /// Only `branches/<existing>` can be listed
    fn client_with_branches(existing: &'static [&'static str]) -> MockSvnClient {
        let mut client = MockSvnClient::new();
        client.expect_list().returning(move |url| {
            if existing
                .iter()
                .any(|name| url == format!("{}/branches/{}", BASE, name))
            {
                Ok(vec![])
            } else {
                Err(ScmError::command_failed("svn list", 1, "E200009: path not found"))
            }
        });
        client
    }

    async fn apply(
        operation: &dyn RepositoryOperation,
        repository: &mut Repository,
        client: &MockSvnClient,
        out: &Buffer,
    ) -> FleetResult<Outcome> {
        let mut console = console(out);
        let mut ctx = OperationContext::new(client, &mut console);
        operation.apply(repository, &mut ctx).await
    }

    #[tokio::test]
    async fn test_create_from_trunk() {
        let mut client = client_with_branches(&[]);
        client
            .expect_copy()
            .withf(|source, target, message| {
                source == format!("{}/trunk", BASE)
                    && target == format!("{}/branches/feature", BASE)
                    && message == "Creating branch 'feature' from trunk."
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let outcome = apply(&CreateBranch::new("feature", None), &mut repo, &client, &out)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Done);
        assert_eq!(out.contents(), "'Lib' creating branch 'feature' from trunk\n");
    }

    #[tokio::test]
    async fn test_create_existing_branch_is_noop() {
        let mut client = client_with_branches(&["feature"]);
        client.expect_copy().times(0);

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let outcome = apply(&CreateBranch::new("feature", None), &mut repo, &client, &out)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::unchanged("branch 'feature' exists"));
    }

    #[tokio::test]
    async fn test_create_from_missing_source() {
        let mut client = client_with_branches(&[]);
        client.expect_copy().times(0);

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let operation = CreateBranch::new("feature", Some("release".to_string()));
        let outcome = apply(&operation, &mut repo, &client, &out).await.unwrap();

        assert!(matches!(outcome, Outcome::Skipped(_)));
    }

    #[tokio::test]
    async fn test_create_from_branch_message() {
        let mut client = client_with_branches(&["release"]);
        client
            .expect_copy()
            .withf(|_, _, message| message == "Creating branch 'hotfix' from branch 'release'.")
            .times(1)
            .returning(|_, _, _| Ok(()));

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let operation = CreateBranch::new("hotfix", Some("release".to_string()));
        assert_eq!(
            apply(&operation, &mut repo, &client, &out).await.unwrap(),
            Outcome::Done
        );
    }

    #[tokio::test]
    async fn test_checkout_missing_branch_skips() {
        let mut client = client_with_branches(&[]);
        client.expect_switch().times(0);

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let outcome = apply(&CheckoutBranch::new("ghost"), &mut repo, &client, &out)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::skipped("branch 'ghost' does not exist, skipping")
        );
    }

    #[tokio::test]
    async fn test_checkout_current_branch_skips() {
        let mut client = MockSvnClient::new();
        client.expect_list().times(0);
        client.expect_switch().times(0);

        let out = Buffer::default();
        let mut repo = repo_on("branches/feature");
        let outcome = apply(&CheckoutBranch::new("feature"), &mut repo, &client, &out)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::skipped("already on branch 'feature'"));
    }

    #[tokio::test]
    async fn test_checkout_switches_and_refreshes() {
        let mut client = client_with_branches(&["feature"]);
        client
            .expect_switch()
            .withf(|url, _| url == format!("{}/branches/feature", BASE))
            .times(1)
            .returning(|_, _| Ok(()));
        client.expect_info().times(1).returning(|_| {
            Ok(WorkingCopyInfo::new(
                format!("{}/branches/feature", BASE),
                "https://svn.example.com/repos",
                11,
            ))
        });

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        apply(&CheckoutBranch::new("feature"), &mut repo, &client, &out)
            .await
            .unwrap();

        assert_eq!(repo.current_path(), Ok(BranchPath::from_name("feature")));
        assert_eq!(repo.revision(), 11);
    }

    #[tokio::test]
    async fn test_checkout_trunk_is_not_queried() {
        let mut client = MockSvnClient::new();
        client.expect_list().times(0);
        client.expect_switch().times(1).returning(|_, _| Ok(()));
        client.expect_info().returning(|_| {
            Ok(WorkingCopyInfo::new(
                format!("{}/trunk", BASE),
                "https://svn.example.com/repos",
                12,
            ))
        });

        let out = Buffer::default();
        let mut repo = repo_on("branches/feature");
        let outcome = apply(&CheckoutBranch::new("trunk"), &mut repo, &client, &out)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Done);
    }

    #[tokio::test]
    async fn test_delete_missing_branch_skips() {
        let mut client = client_with_branches(&[]);
        client.expect_remove().times(0);
        client.expect_rename().times(0);

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let outcome = apply(&DeleteBranch::new("ghost", false), &mut repo, &client, &out)
            .await
            .unwrap();
        assert!(matches!(outcome, Outcome::Skipped(_)));
    }

    #[tokio::test]
    async fn test_delete_current_branch_is_refused() {
        let mut client = MockSvnClient::new();
        client.expect_remove().times(0);

        let out = Buffer::default();
        let mut repo = repo_on("branches/feature");
        let outcome = apply(&DeleteBranch::new("feature", false), &mut repo, &client, &out)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::skipped("is currently on branch 'feature', cannot delete")
        );
    }

    #[tokio::test]
    async fn test_delete_trunk_is_refused() {
        let mut client = MockSvnClient::new();
        client.expect_remove().times(0);

        let out = Buffer::default();
        let mut repo = repo_on("branches/feature");
        let outcome = apply(&DeleteBranch::new("trunk", false), &mut repo, &client, &out)
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::skipped("trunk cannot be deleted"));
    }

    #[tokio::test]
    async fn test_delete_removes_branch() {
        let mut client = client_with_branches(&["old"]);
        client
            .expect_remove()
            .withf(|url, message| {
                url == format!("{}/branches/old", BASE) && message == "Deleting branch 'old'"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        apply(&DeleteBranch::new("old", false), &mut repo, &client, &out)
            .await
            .unwrap();
        assert_eq!(out.contents(), "'Lib' deleting branch 'old'\n");
    }

    #[tokio::test]
    async fn test_delete_archives_branch() {
        let mut client = client_with_branches(&["old"]);
        client.expect_remove().times(0);
        client
            .expect_rename()
            .withf(|source, target, message| {
                source == format!("{}/branches/old", BASE)
                    && target == format!("{}/branches/old.closed", BASE)
                    && message == "Archiving branch 'old'"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        apply(&DeleteBranch::new("old", true), &mut repo, &client, &out)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_diff_against_itself_makes_no_calls() {
        let mut client = MockSvnClient::new();
        client.expect_list().times(0);
        client.expect_diff().times(0);

        let out = Buffer::default();
        let mut repo = repo_on("branches/feature");
        let operation = DiffBranches::new(BranchPath::from_name("feature"), None);
        let outcome = apply(&operation, &mut repo, &client, &out).await.unwrap();
        assert_eq!(
            outcome,
            Outcome::skipped("can not diff 'feature' against 'feature'")
        );
    }

    #[tokio::test]
    async fn test_diff_missing_operand_skips() {
        let mut client = client_with_branches(&[]);
        client.expect_diff().times(0);

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let operation = DiffBranches::new(BranchPath::Trunk, Some(BranchPath::from_name("ghost")));
        let outcome = apply(&operation, &mut repo, &client, &out).await.unwrap();
        assert_eq!(
            outcome,
            Outcome::skipped("branch 'ghost' does not exist, skipping")
        );
    }

    #[tokio::test]
    async fn test_diff_streams_lines() {
        let mut client = MockSvnClient::new();
        client
            .expect_diff()
            .withf(|target| {
                *target
                    == DiffTarget::Urls {
                        old: format!("{}/trunk", BASE),
                        new: format!("{}/branches/feature", BASE),
                    }
            })
            .returning(|_| Ok(vec!["Index: a.txt".to_string(), "+line".to_string()]));

        let out = Buffer::default();
        let mut repo = repo_on("branches/feature");
        let operation = DiffBranches::new(BranchPath::Trunk, None);
        apply(&operation, &mut repo, &client, &out).await.unwrap();
        assert_eq!(out.contents(), "Index: a.txt\n+line\n");
    }

    #[tokio::test]
    async fn test_merge_into_itself_makes_no_calls() {
        let mut client = MockSvnClient::new();
        client.expect_list().times(0);
        client.expect_merge().times(0);

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let outcome = apply(&MergeBranch::new("trunk", false, None), &mut repo, &client, &out)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::skipped("can not merge branch 'trunk' with itself")
        );
    }

    #[tokio::test]
    async fn test_merge_missing_branch_skips() {
        let mut client = client_with_branches(&[]);
        client.expect_merge().times(0);

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let outcome = apply(&MergeBranch::new("ghost", true, None), &mut repo, &client, &out)
            .await
            .unwrap();
        assert!(matches!(outcome, Outcome::Skipped(_)));
    }

    #[tokio::test]
    async fn test_merge_prints_indented_output() {
        let mut client = client_with_branches(&["feature"]);
        client
            .expect_merge()
            .withf(|url, _, options| {
                url == format!("{}/branches/feature", BASE)
                    && options.dry_run
                    && options.revision_range.as_deref() == Some("5:9")
            })
            .times(1)
            .returning(|_, _, _| Ok(vec!["--- Merging r6 through r9:".to_string(), "U    a.txt".to_string()]));

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let operation = MergeBranch::new("feature", true, Some("5:9".to_string()));
        apply(&operation, &mut repo, &client, &out).await.unwrap();
        assert_eq!(
            out.contents(),
            "'Lib' merging changes from 'feature' into 'trunk'\n  --- Merging r6 through r9:\n  U    a.txt\n"
        );
    }

    #[tokio::test]
    async fn test_find_origin() {
        let mut client = client_with_branches(&["feature"]);
        client
            .expect_log()
            .withf(|url, query| {
                url == format!("{}/branches/feature", BASE)
                    && query.stop_on_copy
                    && query.limit == Some(1)
                    && query.revision_range.as_deref() == Some("0:HEAD")
            })
            .returning(|_, _| Ok(vec![LogEntry::new(7)]));

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let operation = FindOrigin::new(Some(BranchPath::from_name("feature")));
        apply(&operation, &mut repo, &client, &out).await.unwrap();
        assert_eq!(
            out.contents(),
            format!("{:<35} 'feature' origin rev #7\n", "Lib")
        );
    }

    #[tokio::test]
    async fn test_find_origin_without_history_fails() {
        let mut client = MockSvnClient::new();
        client.expect_log().returning(|_, _| Ok(vec![]));

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        let result = apply(&FindOrigin::new(None), &mut repo, &client, &out).await;
        assert!(matches!(result, Err(FleetError::RepositoryError { .. })));
    }

    #[tokio::test]
    async fn test_list_branches() {
        let mut client = MockSvnClient::new();
        client
            .expect_list()
            .withf(|url| url == format!("{}/branches", BASE))
            .returning(|_| Ok(vec!["feature".to_string(), "release-1.0".to_string()]));

        let out = Buffer::default();
        let mut repo = repo_on("trunk");
        apply(&ListBranches, &mut repo, &client, &out).await.unwrap();
        assert_eq!(out.contents(), "Lib:\n  feature\n  release-1.0\n");
    }
}
