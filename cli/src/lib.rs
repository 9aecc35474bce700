//! The `tempo` binary: a command-line consumer of the `libtempo`
//! time-progress engine.
//!
//! This crate only handles argument parsing, logging and text output.
//! Every semantic decision (status, percentages, duration phrases)
//! lives in the library.
pub mod cli;
pub mod command;
