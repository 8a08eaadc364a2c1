pub mod commands;

use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use console::Term;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use crate::application::use_cases::fleet::FleetReport;
use crate::application::use_cases::log_report::DEFAULT_LOG_LIMIT;
use crate::common::output::{Console, Tone};
use crate::infrastructure::scm::svn_scm::{SvnScm, DEFAULT_SVN_EXECUTABLE};
use crate::presentation::ui::style::select_style;
use commands::{
    BranchCommand, CommitCommand, DiffCommand, LogCommand, OutputFormat, RevertCommand, Session,
    StatusCommand, UpdateCommand,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
);

/// svnfleet - Manage a fleet of Subversion working copies as one unit
#[derive(Debug, Parser)]
#[command(name = "svnfleet")]
#[command(about = "Manage a fleet of Subversion working copies as one unit")]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Act on the repositories whose path ends with this value only
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Disable colored output
    #[arg(long, env = "SVNFLEET_NO_COLOR", value_parser = BoolishValueParser::new())]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Subversion command line client to run
    #[arg(long, env = "SVNFLEET_SVN", default_value = DEFAULT_SVN_EXECUTABLE)]
    pub svn: String,

    /// File listing the working copies to act on, one path per line
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show revision, branch and pending changes
    Status {
        /// Output format (text, json)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Commit every pending change
    Commit {
        /// Commit message
        #[arg(short, long)]
        message: String,
    },

    /// Update the working copies
    #[command(visible_alias = "up")]
    Update {
        /// Revision set file pinning repositories to explicit revisions
        /// (e.g. 'Libraries/MyRepo @ 133742', hint: use 'log --rev-set')
        #[arg(long)]
        rev_set: Option<PathBuf>,
    },

    /// Show recent history
    Log {
        /// Filter commits by author or words in the commit message
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum number of commits per repository
        #[arg(short, long, default_value_t = DEFAULT_LOG_LIMIT)]
        limit: u32,

        /// Print a revision set built from the newest commit found
        #[arg(long)]
        rev_set: bool,

        /// Offset applied to revisions of a generated revision set
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        offset: String,
    },

    /// Show local modifications
    Diff,

    /// Revert every local modification
    Revert,

    /// Branch operations
    Branch {
        #[command(subcommand)]
        action: BranchCommand,
    },
}

/// Installs the tracing subscriber; `RUST_LOG` overrides the level chosen here
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(self) -> Result<()> {
        let no_color = self.cli.no_color;
        let console = Console::stdio(select_style(no_color, &Term::stdout()))
            .with_err_style(select_style(no_color, &Term::stderr()));
        let client = SvnScm::with_executable(&self.cli.svn);
        let mut session = Session::new(
            Box::new(client),
            console,
            &self.cli.config,
            self.cli.repo.clone(),
        );

        match self.handle_command(&mut session).await {
            Ok(report) => {
                if self.cli.verbose {
                    session.console().warn(&report.to_string())?;
                }
                Ok(())
            }
            Err(e) => {
                let label = session.console().paint_err("Error:", Tone::Failure);
                session.console().warn(&format!("{} {}", label, e))?;
                exit(1);
            }
        }
    }

    async fn handle_command(&self, session: &mut Session) -> Result<FleetReport> {
        match &self.cli.command {
            Commands::Status { output } => StatusCommand::new(*output).execute(session).await,
            Commands::Commit { message } => {
                CommitCommand::new(message.clone()).execute(session).await
            }
            Commands::Update { rev_set } => {
                UpdateCommand::new(rev_set.clone()).execute(session).await
            }
            Commands::Log {
                search,
                limit,
                rev_set,
                offset,
            } => {
                LogCommand::new(search.clone(), *limit, *rev_set, offset.clone())
                    .execute(session)
                    .await
            }
            Commands::Diff => DiffCommand.execute(session).await,
            Commands::Revert => RevertCommand.execute(session).await,
            Commands::Branch { action } => action.execute(session).await,
        }
    }
}
