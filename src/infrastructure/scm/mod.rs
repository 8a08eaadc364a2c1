/// Subversion client boundary
///
/// The [`SvnClient`] trait is what the application layer talks to, [`SvnScm`]
/// drives the real `svn` executable.

pub mod scm_interface;
pub mod svn_output;
pub mod svn_scm;

pub use scm_interface::{DiffTarget, LogQuery, MergeOptions, ScmError, SvnClient};
pub use svn_scm::SvnScm;
