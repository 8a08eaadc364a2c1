//! # svnfleet - Subversion fleet manager
//!
//! `svnfleet` manages a list of Subversion working copies as a single unit.
//! Branch operations and everyday commands are applied to every working copy
//! in turn, and one failing repository never stops the others.
//!
//! ## Features
//!
//! - **Branch topology**: create, delete or archive, check out, diff and merge
//!   branches of the `trunk` / `branches` / `tags` layout, and find the
//!   revision a branch was created at
//! - **Fleet commands**: status, commit, update, log, diff and revert across
//!   all working copies
//! - **Revision sets**: pin every repository to an explicit revision, generated
//!   from history with `log --rev-set`
//!
//! ## Quick Start
//!
//! 1. List the working copies in a configuration file (`fleet.txt`):
//!
//! ```text
//! # libraries
//! Libraries/Core
//! Libraries/Net
//! Apps/Viewer
//! ```
//!
//! 2. Check their state:
//!
//! ```bash
//! svnfleet fleet.txt status
//! ```
//!
//! 3. Branch all of them at once:
//!
//! ```bash
//! svnfleet fleet.txt branch create release-2.0
//! svnfleet fleet.txt branch checkout release-2.0
//! ```
//!
//! ## Architecture
//!
//! The crate is organized using clean architecture principles:
//!
//! - [`domain`]: Working copy state, the branch layout and revision sets
//! - [`application`]: The fleet runner and the operations it applies
//! - [`infrastructure`]: The `svn` client adapter and configuration files
//! - [`presentation`]: CLI interface and terminal colours
//! - [`common`]: Error handling and console output
//!
//! ## Error Handling
//!
//! - [`common::error::FleetError`]: Main error type with detailed context
//! - [`common::result::FleetResult`]: Type alias for `Result<T, FleetError>`
//!
//! ## Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//! use svnfleet::application::use_cases::change_report::{ShowStatus, StatusFormat};
//! use svnfleet::application::use_cases::fleet::{Fleet, OperationContext};
//! use svnfleet::common::output::{Console, PlainStyle};
//! use svnfleet::infrastructure::scm::SvnScm;
//!
//! # async fn example() -> svnfleet::Result<()> {
//! let client = SvnScm::new();
//! let mut fleet = Fleet::load(&client, Path::new("fleet.txt")).await?;
//!
//! let mut console = Console::stdio(Box::new(PlainStyle));
//! let mut ctx = OperationContext::new(&client, &mut console);
//! let report = fleet.run(&ShowStatus::new(StatusFormat::Text), &mut ctx).await?;
//!
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::FleetError;
pub use crate::common::result::FleetResult as Result;
