use anyhow::Result;
use std::path::PathBuf;

use super::session::Session;
use crate::application::use_cases::change_report::{
    CommitChanges, DiffWorkingCopy, RevertChanges, UpdateWorkingCopy,
};
use crate::application::use_cases::fleet::FleetReport;
use crate::domain::value_objects::revision_set::RevisionSet;
use crate::infrastructure::filesystem::config_store::ConfigStore;

/// Handler for the commit command
pub struct CommitCommand {
    pub message: String,
}

impl CommitCommand {
    pub fn new(message: String) -> Self {
        Self { message }
    }

    pub async fn execute(&self, session: &mut Session) -> Result<FleetReport> {
        Ok(session.run(&CommitChanges::new(&self.message)).await?)
    }
}

/// Handler for the update command
pub struct UpdateCommand {
    pub rev_set: Option<PathBuf>,
}

impl UpdateCommand {
    pub fn new(rev_set: Option<PathBuf>) -> Self {
        Self { rev_set }
    }

    pub async fn execute(&self, session: &mut Session) -> Result<FleetReport> {
        let revisions = match &self.rev_set {
            Some(path) => {
                let (revisions, issues) = ConfigStore::read_revision_set(path).await?;
                for issue in issues {
                    session.console().warn(&issue.to_string())?;
                }
                revisions
            }
            None => RevisionSet::new(),
        };

        Ok(session.run(&UpdateWorkingCopy::new(revisions)).await?)
    }
}

/// Handler for the diff command
pub struct DiffCommand;

impl DiffCommand {
    pub async fn execute(&self, session: &mut Session) -> Result<FleetReport> {
        Ok(session.run(&DiffWorkingCopy).await?)
    }
}

/// Handler for the revert command
pub struct RevertCommand;

impl RevertCommand {
    pub async fn execute(&self, session: &mut Session) -> Result<FleetReport> {
        Ok(session.run(&RevertChanges).await?)
    }
}
