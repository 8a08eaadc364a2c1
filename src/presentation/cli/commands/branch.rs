use anyhow::Result;
use clap::Subcommand;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use super::session::Session;
use crate::application::use_cases::branch_topology::{
    CheckoutBranch, CreateBranch, DeleteBranch, DiffBranches, FindOrigin, ListBranches,
    MergeBranch,
};
use crate::application::use_cases::fleet::FleetReport;
use crate::common::output::{Console, PlainStyle};
use crate::common::result::ResultExt;
use crate::domain::value_objects::branch_path::{BranchPath, TRUNK};

/// Branch operations
#[derive(Debug, Clone, Subcommand)]
pub enum BranchCommand {
    /// List the branches of each repository
    List,

    /// Locate the branch point of a branch
    Origin {
        /// Branch to find the origin for (default: current working branch)
        name: Option<String>,
    },

    /// Create a branch on the server
    Create {
        /// Name of the branch to create
        name: String,

        /// Create the new branch from this branch instead of trunk
        #[arg(short, long)]
        branch: Option<String>,
    },

    /// Compare two branches
    Diff {
        /// Branch to compare against
        #[arg(short, long, default_value = TRUNK)]
        old: String,

        /// Branch to compare (default: current working branch)
        #[arg(short, long)]
        new: Option<String>,

        /// File to write the diff output to (default: stdout)
        #[arg(short, long)]
        filename: Option<PathBuf>,
    },

    /// Delete a branch
    Delete {
        /// Name of the branch to delete
        name: String,

        /// Archive the branch to <name>.closed instead of deleting it
        #[arg(short, long)]
        archive: bool,
    },

    /// Switch the working copies onto a branch
    Checkout {
        /// Name of the branch to check out
        name: String,
    },

    /// Merge a branch into the checked out branch
    Merge {
        /// Name of the branch to merge
        name: String,

        /// Try the merge without making changes
        #[arg(short, long)]
        dry_run: bool,

        /// Merge over an explicit revision range
        #[arg(short, long)]
        revision: Option<String>,
    },
}

impl BranchCommand {
    pub async fn execute(&self, session: &mut Session) -> Result<FleetReport> {
        let report = match self {
            Self::List => session.run(&ListBranches).await?,
            Self::Origin { name } => {
                let branch = name.as_deref().map(BranchPath::from_name);
                session.run(&FindOrigin::new(branch)).await?
            }
            Self::Create { name, branch } => {
                session
                    .run(&CreateBranch::new(name, branch.clone()))
                    .await?
            }
            Self::Diff { old, new, filename } => {
                let operation = DiffBranches::new(
                    BranchPath::from_name(old),
                    new.as_deref().map(BranchPath::from_name),
                );
                match filename {
                    Some(path) => {
                        session
                            .run_into(&operation, || {
                                let file = File::create(path).with_filesystem_error(
                                    "Failed to create diff output",
                                    Some(path.clone()),
                                )?;
                                Ok(Console::new(
                                    Box::new(BufWriter::new(file)),
                                    Box::new(io::stderr()),
                                    Box::new(PlainStyle),
                                ))
                            })
                            .await?
                    }
                    None => session.run(&operation).await?,
                }
            }
            Self::Delete { name, archive } => {
                session.run(&DeleteBranch::new(name, *archive)).await?
            }
            Self::Checkout { name } => session.run(&CheckoutBranch::new(name)).await?,
            Self::Merge {
                name,
                dry_run,
                revision,
            } => {
                session
                    .run(&MergeBranch::new(name, *dry_run, revision.clone()))
                    .await?
            }
        };
        Ok(report)
    }
}
