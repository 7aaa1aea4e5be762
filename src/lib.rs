//! Arbor: Interactive In-Memory Filesystem Tree
//!
//! A single-process, in-memory simulation of a hierarchical filesystem:
//! directories and text files held in an arena-style tree store, driven by a
//! menu-based session loop, with recursive search and a favorites registry.

pub mod config;
pub mod error;
pub mod favorites;
pub mod format;
pub mod logging;
pub mod session;
pub mod tooling;
pub mod tree;
pub mod types;
