//! Command-line interface module
//!
//! Handles the binary's own flags and the command dispatch built on `ArgCursor`

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
