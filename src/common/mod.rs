//! Shared error handling and output plumbing.

pub mod error;
pub mod output;
pub mod result;

pub use error::FleetError;
pub use output::{Console, OutputStyle, PlainStyle, Tone};
pub use result::FleetResult;
