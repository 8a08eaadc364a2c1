/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - SCM operations (the `svn` command line client)
/// - File system operations (fleet configuration, revision sets)
/// - Process execution
pub mod filesystem;
pub mod process;
pub mod scm;

// Re-export commonly used types
pub use filesystem::{ConfigStore, ConfigStoreError};
pub use process::{CommandExecutor, CommandOutput};
pub use scm::{DiffTarget, LogQuery, MergeOptions, ScmError, SvnClient, SvnScm};
