/*
[INPUT]:  Public API exports for the p2pb2b command line crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod command;
pub mod config;

pub use command::Command;
pub use config::CliConfig;
