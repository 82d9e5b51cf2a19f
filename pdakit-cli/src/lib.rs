//! Library half of the `pdakit` command-line tool.
//!
//! Argument parsing lives in `main.rs`; everything it dispatches to is here so
//! it can be tested without spawning a process.

pub mod seed;
pub mod commands;

pub use seed::parse_seed;
pub use commands::Report;
