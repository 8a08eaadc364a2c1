pub mod change;
pub mod log_entry;
pub mod repository;

pub use change::{filter_changes, Change};
pub use log_entry::LogEntry;
pub use repository::{Repository, WorkingCopyInfo};
