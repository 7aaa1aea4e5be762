//! Core types for the arbor tree engine.

/// DirId: Handle for a directory node in the tree store.
///
/// Ids are never reused within a single tree; a deleted directory's id simply
/// stops resolving.
pub type DirId = u64;
