//! High-level operations that correspond to CLI commands
//!
//! These hold the business logic of a snakedoc run, separated from CLI
//! concerns like argument parsing and printing.

pub mod run;

pub use run::run_operation;
