//! Error handling module
//!
//! Defines the structural cursor error, the content parse error and the
//! dispatcher's error type with exit codes

pub mod types;

pub use types::*;
