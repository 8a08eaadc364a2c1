/// Application layer
///
/// Fleet orchestration and the operations applied to each working copy.
pub mod services;
pub mod use_cases;

pub use services::WorkingCopyService;
pub use use_cases::{Fleet, FleetReport, OperationContext, Outcome, RepositoryOperation};
