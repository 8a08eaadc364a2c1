pub mod branch;
pub mod changes;
pub mod log;
pub mod session;
pub mod status;

pub use branch::BranchCommand;
pub use changes::{CommitCommand, DiffCommand, RevertCommand, UpdateCommand};
pub use log::LogCommand;
pub use session::Session;
pub use status::{OutputFormat, StatusCommand};
