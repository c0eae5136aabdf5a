//! Tooling & Integration Layer
//!
//! The `commitly` command line and its terminal/JSON rendering.

pub mod cli;
pub mod render;

pub use cli::{Cli, CliContext, Commands, TerminalEditor};
