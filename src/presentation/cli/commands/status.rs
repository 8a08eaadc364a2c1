use anyhow::Result;
use clap::ValueEnum;

use super::session::Session;
use crate::application::use_cases::change_report::{ShowStatus, StatusFormat};
use crate::application::use_cases::fleet::FleetReport;

/// Output format options for status command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Handler for the status command
pub struct StatusCommand {
    pub output: OutputFormat,
}

impl StatusCommand {
    pub fn new(output: OutputFormat) -> Self {
        Self { output }
    }

    pub async fn execute(&self, session: &mut Session) -> Result<FleetReport> {
        let format = match self.output {
            OutputFormat::Text => StatusFormat::Text,
            OutputFormat::Json => StatusFormat::Json,
        };
        let operation = ShowStatus::new(format);
        let report = session.run(&operation).await?;

        if self.output == OutputFormat::Json {
            let json = operation.render_json()?;
            session.console().line(&json)?;
        }
        Ok(report)
    }
}
