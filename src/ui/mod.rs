//! Terminal front-end.
//!
//! Stands in for the browser widget: prints the transcript, the typing
//! indicator and the info panel, and reads guest input from stdin.
//!
//! # Structure
//!
//! - [`terminal`]: [`TerminalView`] and the interactive REPL

pub mod terminal;

pub use terminal::{ReplCommand, TerminalView, run_repl};
