pub mod branch_topology;
pub mod change_report;
pub mod fleet;
pub mod log_report;

pub use fleet::{Fleet, FleetReport, OperationContext, Outcome, RepositoryOperation};
