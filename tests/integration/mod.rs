//! Integration tests for the Commitly repository file browser

mod cli_commands;
mod properties;
mod support;
mod tree_structure;
