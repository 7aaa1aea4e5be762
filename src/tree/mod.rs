//! Tree Engine
//!
//! Arena-style store for the directory hierarchy. Directories live in a map
//! keyed by `DirId`; parent references are plain ids, never owning, so
//! destruction proceeds strictly top-down from whichever node is deleted.
//!
//! Lookup-based operations (find, rename, copy) act on the first match in
//! insertion order. Deletion acts on every match. Sibling name uniqueness is
//! not enforced anywhere; the permissive behavior is intentional.

pub mod node;

use crate::error::EngineError;
use crate::types::DirId;
use node::{DirectoryNode, FileNode};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Listing of a single directory, for display.
#[derive(Debug, Clone, Serialize)]
pub struct DirListing {
    pub path: String,
    pub files: Vec<FileEntry>,
    pub dirs: Vec<String>,
}

/// One file row in a listing. `path` is the stored (point-in-time) path field,
/// not a recomputed location.
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    pub content: String,
}

/// The directory tree store.
pub struct Tree {
    dirs: HashMap<DirId, DirectoryNode>,
    root: DirId,
    next_id: DirId,
}

impl Tree {
    /// Create a tree holding only a root directory with the given name.
    pub fn new(root_name: impl Into<String>) -> Self {
        let mut dirs = HashMap::new();
        dirs.insert(0, DirectoryNode::new(root_name, None));
        Tree {
            dirs,
            root: 0,
            next_id: 1,
        }
    }

    pub fn root(&self) -> DirId {
        self.root
    }

    fn dir(&self, id: DirId) -> Result<&DirectoryNode, EngineError> {
        self.dirs.get(&id).ok_or(EngineError::StaleDirId(id))
    }

    fn dir_mut(&mut self, id: DirId) -> Result<&mut DirectoryNode, EngineError> {
        self.dirs.get_mut(&id).ok_or(EngineError::StaleDirId(id))
    }

    pub fn name_of(&self, id: DirId) -> Result<&str, EngineError> {
        Ok(&self.dir(id)?.name)
    }

    pub fn parent_of(&self, id: DirId) -> Result<Option<DirId>, EngineError> {
        Ok(self.dir(id)?.parent)
    }

    /// Absolute path, recomputed on demand by walking parent references.
    /// The root yields `/<root name>`.
    pub fn path_of(&self, id: DirId) -> Result<String, EngineError> {
        let dir = self.dir(id)?;
        match dir.parent {
            Some(parent) => Ok(format!("{}/{}", self.path_of(parent)?, dir.name)),
            None => Ok(format!("/{}", dir.name)),
        }
    }

    /// Append a new text file. No uniqueness check: a duplicate name shadows
    /// the original for lookups while both occupy storage. The stored file
    /// path is the owning directory's path at this moment.
    pub fn create_file(
        &mut self,
        dir: DirId,
        name: &str,
        content: &str,
    ) -> Result<(), EngineError> {
        let dir_path = self.path_of(dir)?;
        self.dir_mut(dir)?
            .files
            .push(FileNode::new(name, dir_path, content));
        debug!(dir, name, "file created");
        Ok(())
    }

    /// Append a new subdirectory and return its id. No uniqueness check.
    pub fn create_dir(&mut self, dir: DirId, name: &str) -> Result<DirId, EngineError> {
        // Reserve the id only after the parent is known to be live.
        self.dir(dir)?;
        let id = self.next_id;
        self.next_id += 1;
        self.dirs.insert(id, DirectoryNode::new(name, Some(dir)));
        self.dir_mut(dir)?.children.push(id);
        debug!(dir, id, name, "directory created");
        Ok(id)
    }

    pub fn find_file(&self, dir: DirId, name: &str) -> Result<Option<&FileNode>, EngineError> {
        Ok(self.dir(dir)?.find_file(name))
    }

    /// First subdirectory of `dir` with the given name, in insertion order.
    pub fn find_subdir(&self, dir: DirId, name: &str) -> Result<Option<DirId>, EngineError> {
        for &child in &self.dir(dir)?.children {
            if self.dir(child)?.name == name {
                return Ok(Some(child));
            }
        }
        Ok(None)
    }

    /// Rename the first file matching `old`. The file's stored `path` field is
    /// left untouched; it records where the file was created, not where it is.
    pub fn rename_file(&mut self, dir: DirId, old: &str, new: &str) -> Result<(), EngineError> {
        match self.dir_mut(dir)?.find_file_mut(old) {
            Some(file) => {
                file.name = new.to_string();
                debug!(dir, old, new, "file renamed");
                Ok(())
            }
            None => Err(EngineError::FileNotFound(old.to_string())),
        }
    }

    /// Remove every file in `dir` matching `name`. Returns how many were
    /// destroyed; zero matches is a not-found outcome with no mutation.
    pub fn delete_file(&mut self, dir: DirId, name: &str) -> Result<usize, EngineError> {
        let files = &mut self.dir_mut(dir)?.files;
        let before = files.len();
        files.retain(|f| f.name != name);
        let removed = before - files.len();
        if removed == 0 {
            return Err(EngineError::FileNotFound(name.to_string()));
        }
        debug!(dir, name, removed, "files deleted");
        Ok(removed)
    }

    /// Remove every subdirectory of `dir` matching `name`, cascading through
    /// each subtree. Returns how many direct children were destroyed.
    pub fn delete_dir(&mut self, dir: DirId, name: &str) -> Result<usize, EngineError> {
        let mut doomed = Vec::new();
        for &child in &self.dir(dir)?.children {
            if self.dir(child)?.name == name {
                doomed.push(child);
            }
        }
        if doomed.is_empty() {
            return Err(EngineError::DirectoryNotFound(name.to_string()));
        }
        self.dir_mut(dir)?.children.retain(|c| !doomed.contains(c));
        for id in &doomed {
            self.drop_subtree(*id);
        }
        debug!(dir, name, removed = doomed.len(), "directories deleted");
        Ok(doomed.len())
    }

    fn drop_subtree(&mut self, id: DirId) {
        if let Some(dir) = self.dirs.remove(&id) {
            for child in dir.children {
                self.drop_subtree(child);
            }
        }
    }

    /// Copy a file of `src` into a direct subdirectory of `src`.
    ///
    /// The destination must be an existing child of the source directory, not
    /// an arbitrary path. The copy takes the destination's current path; the
    /// original is untouched.
    pub fn copy_file(
        &mut self,
        src: DirId,
        file_name: &str,
        dest_name: &str,
    ) -> Result<(), EngineError> {
        let file = self
            .dir(src)?
            .find_file(file_name)
            .ok_or_else(|| EngineError::FileNotFound(file_name.to_string()))?;
        let kind = file.kind.clone();
        let dest = self
            .find_subdir(src, dest_name)?
            .ok_or_else(|| EngineError::DirectoryNotFound(dest_name.to_string()))?;
        if !kind.is_copyable() {
            return Err(EngineError::CannotCopy(file_name.to_string()));
        }
        let dest_path = self.path_of(dest)?;
        self.dir_mut(dest)?.files.push(FileNode {
            name: file_name.to_string(),
            path: dest_path,
            kind,
        });
        debug!(src, dest, file_name, "file copied");
        Ok(())
    }

    /// Recursive substring search over file names, from `start` downward.
    ///
    /// Depth-first, files before subdirectories at each level, children in
    /// stored order. Paths are derived from the traversal, so they reflect
    /// current locations even when a file's stored `path` field is stale.
    pub fn search(&self, start: DirId, pattern: &str) -> Result<Vec<String>, EngineError> {
        let mut results = Vec::new();
        let prefix = self.path_of(start)?;
        self.search_into(start, &prefix, pattern, &mut results)?;
        Ok(results)
    }

    fn search_into(
        &self,
        dir: DirId,
        prefix: &str,
        pattern: &str,
        out: &mut Vec<String>,
    ) -> Result<(), EngineError> {
        let node = self.dir(dir)?;
        for file in &node.files {
            if file.name.contains(pattern) {
                out.push(format!("{}/{}", prefix, file.name));
            }
        }
        for &child in &node.children {
            let child_prefix = format!("{}/{}", prefix, self.dir(child)?.name);
            self.search_into(child, &child_prefix, pattern, out)?;
        }
        Ok(())
    }

    /// Snapshot of a directory's contents for display.
    pub fn list(&self, dir: DirId) -> Result<DirListing, EngineError> {
        let path = self.path_of(dir)?;
        let node = self.dir(dir)?;
        let files = node
            .files
            .iter()
            .map(|f| FileEntry {
                name: f.name.clone(),
                path: f.path.clone(),
                content: f.content().to_string(),
            })
            .collect();
        let dirs = node
            .children
            .iter()
            .map(|&c| Ok(self.dir(c)?.name.clone()))
            .collect::<Result<Vec<_>, EngineError>>()?;
        Ok(DirListing { path, files, dirs })
    }

    /// Number of live directories, root included.
    pub fn dir_count(&self) -> usize {
        self.dirs.len()
    }
}
