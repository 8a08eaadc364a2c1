//! Domain layer: the working copy model and the trunk/branches/tags layout.
//!
//! Nothing in here talks to `svn`; values are produced by the infrastructure
//! layer and consumed by the application use cases.

pub mod entities;
pub mod value_objects;
