//! Command-line interface for the `wdg` binary.

pub mod commands;
