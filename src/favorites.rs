//! Favorites Registry
//!
//! A set of absolute file-path strings bookmarked by the user. Entries are
//! plain strings: they are removed when the session deletes a file in the
//! current directory by that exact path, but a rename or a cascade deletion in
//! another directory can leave an entry stale. That inconsistency is the
//! documented behavior, not something this module corrects.

use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct Favorites {
    paths: BTreeSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Favorites {
            paths: BTreeSet::new(),
        }
    }

    /// Register an absolute path. Idempotent: returns false when the path was
    /// already present.
    pub fn mark(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    /// Drop an exact path. Returns whether anything was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        self.paths.remove(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// All registered paths, in set order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Count of entries underneath a directory path. Used only to warn about
    /// entries stranded by a cascade deletion.
    pub fn count_under(&self, dir_path: &str) -> usize {
        let prefix = format!("{}/", dir_path);
        self.paths.iter().filter(|p| p.starts_with(&prefix)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_idempotent() {
        let mut favorites = Favorites::new();
        assert!(favorites.mark("/root/a"));
        assert!(!favorites.mark("/root/a"));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_remove_exact_path_only() {
        let mut favorites = Favorites::new();
        favorites.mark("/root/docs/a");
        assert!(!favorites.remove("/root/docs"));
        assert!(favorites.remove("/root/docs/a"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_iteration_is_ordered() {
        let mut favorites = Favorites::new();
        favorites.mark("/root/b");
        favorites.mark("/root/a");
        let paths: Vec<&str> = favorites.iter().collect();
        assert_eq!(paths, vec!["/root/a", "/root/b"]);
    }

    #[test]
    fn test_count_under_matches_subtree_prefix() {
        let mut favorites = Favorites::new();
        favorites.mark("/root/docs/a");
        favorites.mark("/root/docs/notes/b");
        favorites.mark("/root/other");
        assert_eq!(favorites.count_under("/root/docs"), 2);
        assert_eq!(favorites.count_under("/root/doc"), 0);
    }
}
