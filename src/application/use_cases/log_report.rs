//! History of each project and revision-set extraction.

use super::fleet::{OperationContext, Outcome, RepositoryOperation};
use crate::common::error::FleetError;
use crate::common::output::Tone;
use crate::common::result::{FleetResult, ResultExt};
use crate::domain::entities::log_entry::LogEntry;
use crate::domain::entities::repository::Repository;
use crate::infrastructure::scm::scm_interface::LogQuery;
use async_trait::async_trait;

pub const DEFAULT_LOG_LIMIT: u32 = 10;

/// Parses the signed revision offset of `log --rev-set`
pub fn parse_offset(value: &str) -> FleetResult<i64> {
    value.trim().parse::<i64>().map_fleet_err(|_| {
        FleetError::validation_error(
            "offset",
            "must be an integral number",
            Some(value.to_string()),
        )
    })
}

/// `log`: recent history of the project (every line of development)
#[derive(Debug, Clone)]
pub struct ShowLog {
    pub limit: u32,
    pub search: Option<String>,
    /// Print `<path> @ <revision>` lines instead of history
    pub rev_set: bool,
    pub offset: i64,
}

impl Default for ShowLog {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LOG_LIMIT,
            search: None,
            rev_set: false,
            offset: 0,
        }
    }
}

impl ShowLog {
    pub fn new(limit: u32, search: Option<String>) -> Self {
        Self {
            limit,
            search,
            ..Self::default()
        }
    }

    pub fn with_rev_set(mut self, offset: i64) -> Self {
        self.rev_set = true;
        self.offset = offset;
        self
    }

    fn print_rev_set(
        &self,
        repository: &Repository,
        entries: &[LogEntry],
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let newest = match entries.first() {
            Some(entry) => entry.revision,
            None => return Ok(Outcome::skipped("no revisions found, skipping")),
        };

        let revision = i64::try_from(newest).unwrap_or(i64::MAX).saturating_add(self.offset);
        if revision < 0 {
            return Ok(Outcome::skipped(format!(
                "revision #{} with offset {} is negative, skipping",
                newest, self.offset
            )));
        }

        let path = ctx.console.paint(repository.local_path(), Tone::Repository);
        ctx.console.line(&format!("{} @ {}", path, revision))?;
        Ok(Outcome::Done)
    }

    fn print_history(
        &self,
        repository: &Repository,
        entries: &[LogEntry],
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let mut heading = ctx.console.paint(repository.local_path(), Tone::Repository);
        let location = repository.current_path()?;
        if !location.is_trunk() {
            heading.push_str(&ctx.console.paint(
                &format!(" @ {}", location.relative_path()),
                Tone::Branch,
            ));
        }
        if let Some(search) = &self.search {
            heading.push_str(&format!(
                " filtered by '{}'",
                ctx.console.paint(search, Tone::Highlight)
            ));
        }
        ctx.console.line(&heading)?;

        if entries.is_empty() && self.search.is_some() {
            ctx.console.line("  no matching revisions")?;
        }

        for entry in entries {
            let line = render_entry(entry, ctx);
            ctx.console.line(&line)?;
        }
        Ok(Outcome::Done)
    }
}

/// `#<revision> <date> <author> <first line>`
fn render_entry(entry: &LogEntry, ctx: &OperationContext<'_>) -> String {
    let date = entry
        .date
        .map(|date| date.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".repeat(19));
    let author = entry.author.as_deref().unwrap_or("(no author)");

    format!(
        "  {} {} {}  {}",
        ctx.console
            .paint(&format!("#{:>6}", entry.revision), Tone::Revision),
        ctx.console.paint(&date, Tone::Date),
        ctx.console.paint(&format!("{:<20}", author), Tone::Author),
        entry.summary
    )
}

#[async_trait]
impl RepositoryOperation for ShowLog {
    async fn apply(
        &self,
        repository: &mut Repository,
        ctx: &mut OperationContext<'_>,
    ) -> FleetResult<Outcome> {
        let url = repository.base_url()?;
        let query = LogQuery::new()
            .with_limit(self.limit)
            .with_search(self.search.clone());
        let entries = ctx.client.log(url.as_str(), &query).await?;

        if self.rev_set {
            self.print_rev_set(repository, &entries, ctx)
        } else {
            self.print_history(repository, &entries, ctx)
        }
    }
}
