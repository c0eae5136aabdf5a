//! Commitly: repository file browser core
//!
//! Turns the flat file listing of a hosted repository into a navigable,
//! deterministically ordered tree, tracks which directories are open, and
//! hands selected files to an editor. The [`browser`] module ties these to
//! the remote content service.

pub mod browser;
pub mod config;
pub mod error;
pub mod expansion;
pub mod format;
pub mod logging;
pub mod selection;
pub mod service;
pub mod session;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;
