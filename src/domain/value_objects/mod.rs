pub mod branch_path;
pub mod change_kind;
pub mod revision_set;

pub use branch_path::{BranchPath, LayoutError, ARCHIVE_SUFFIX, TRUNK};
pub use change_kind::{ChangeKind, ChangeMask, UnknownChangeKind};
pub use revision_set::{RevisionSet, RevisionSetIssue};
