//! Command-line interface
//!
//! Argument parsing and command handlers for the `modeldocs` binary.

pub mod args;
pub mod commands;
