use crate::common::error::FleetError;
use crate::common::result::{FleetResult, ResultExt};
use crate::domain::entities::repository::Repository;
use crate::domain::value_objects::branch_path::BranchPath;
use crate::infrastructure::scm::scm_interface::SvnClient;
use std::path::Path;

/// Opens working copies and keeps their cached metadata current
pub struct WorkingCopyService<'a> {
    client: &'a dyn SvnClient,
}

impl<'a> WorkingCopyService<'a> {
    pub fn new(client: &'a dyn SvnClient) -> Self {
        Self { client }
    }

    /// Resolves a configured path into a [`Repository`].
    ///
    /// Fails when the path is missing on disk or `svn info` cannot describe
    /// it.
    pub async fn open(&self, local_path: &str) -> FleetResult<Repository> {
        let path = Path::new(local_path);
        if !path.exists() {
            return Err(FleetError::repository_error(
                format!("'{}' does not exist on disk", local_path),
                Some(local_path.to_string()),
            ));
        }

        let info = self
            .client
            .info(path)
            .await
            .with_repository(format!("cannot open '{}'", local_path), local_path)?;

        let repository = Repository::new(local_path, info);
        tracing::debug!(
            repository = %repository,
            url = repository.url(),
            revision = repository.revision(),
            "opened working copy"
        );
        Ok(repository)
    }

    /// Re-reads URL and revision after a mutating operation
    pub async fn refresh(&self, repository: &mut Repository) -> FleetResult<()> {
        let info = self.client.info(repository.path()).await?;
        repository.update_info(info);
        Ok(())
    }

    /// Whether a branch or tag exists on the server.
    ///
    /// Any listing failure counts as absence. Trunk is assumed to exist and
    /// never queried.
    pub async fn branch_exists(&self, repository: &Repository, branch: &BranchPath) -> bool {
        if branch.is_trunk() {
            return true;
        }
        let url = match repository.branch_url(branch) {
            Ok(url) => url,
            Err(_) => return false,
        };
        match self.client.list(url.as_str()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(repository = %repository, branch = %branch, error = %e, "branch lookup failed");
                false
            }
        }
    }
}
