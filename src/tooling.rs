//! Tooling Layer
//!
//! The CLI front end: argument parsing, the interactive menu loop, and the
//! scripted command runner. Everything here is a thin shell over
//! [`crate::session::Session`]; no tree semantics live in this layer.

pub mod cli;

pub use cli::{run, Cli};
