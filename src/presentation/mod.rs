/// Presentation layer: command line surface and terminal styling
pub mod cli;
pub mod ui;
