use anyhow::Result;

use super::session::Session;
use crate::application::use_cases::fleet::FleetReport;
use crate::application::use_cases::log_report::{parse_offset, ShowLog};

/// Handler for the log command
pub struct LogCommand {
    pub search: Option<String>,
    pub limit: u32,
    pub rev_set: bool,
    pub offset: String,
}

impl LogCommand {
    pub fn new(search: Option<String>, limit: u32, rev_set: bool, offset: String) -> Self {
        Self {
            search,
            limit,
            rev_set,
            offset,
        }
    }

    pub async fn execute(&self, session: &mut Session) -> Result<FleetReport> {
        // Rejected before any working copy is opened
        let offset = parse_offset(&self.offset)?;

        let mut operation = ShowLog::new(self.limit, self.search.clone());
        if self.rev_set {
            operation = operation.with_rev_set(offset);
        }
        Ok(session.run(&operation).await?)
    }
}
