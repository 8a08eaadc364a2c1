use crate::application::use_cases::fleet::{Fleet, FleetReport, OperationContext, RepositoryOperation};
use crate::common::output::Console;
use crate::common::result::FleetResult;
use crate::infrastructure::scm::scm_interface::SvnClient;
use std::path::PathBuf;

/// What every command handler needs: the svn client, the console and where
/// the fleet is described
pub struct Session {
    client: Box<dyn SvnClient>,
    console: Console,
    config: PathBuf,
    filter: Option<String>,
}

impl Session {
    pub fn new(
        client: Box<dyn SvnClient>,
        console: Console,
        config: impl Into<PathBuf>,
        filter: Option<String>,
    ) -> Self {
        Self {
            client,
            console,
            config: config.into(),
            filter,
        }
    }

    pub fn console(&mut self) -> &mut Console {
        &mut self.console
    }

    /// Opens every configured working copy and applies the `--repo` filter
    pub async fn load_fleet(&self) -> FleetResult<Fleet> {
        let mut fleet = Fleet::load(self.client.as_ref(), &self.config).await?;
        if let Some(filter) = &self.filter {
            fleet.select(filter)?;
        }
        Ok(fleet)
    }

    /// Loads the fleet and applies `operation` to it
    pub async fn run(&mut self, operation: &dyn RepositoryOperation) -> FleetResult<FleetReport> {
        let mut fleet = self.load_fleet().await?;
        let mut ctx = OperationContext::new(self.client.as_ref(), &mut self.console);
        fleet.run(operation, &mut ctx).await
    }

    /// Like [`Session::run`], writing to the console built by `open` instead.
    ///
    /// `open` is only called once the fleet has loaded.
    pub async fn run_into<F>(
        &mut self,
        operation: &dyn RepositoryOperation,
        open: F,
    ) -> FleetResult<FleetReport>
    where
        F: FnOnce() -> FleetResult<Console>,
    {
        let mut fleet = self.load_fleet().await?;
        let mut console = open()?;
        let mut ctx = OperationContext::new(self.client.as_ref(), &mut console);
        fleet.run(operation, &mut ctx).await
    }
}
