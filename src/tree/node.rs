//! Filesystem node types

use crate::types::DirId;

/// Content variants for files.
///
/// Only plain text exists today. The copy operation checks `is_copyable`
/// explicitly so a future non-copyable kind is refused rather than cloned
/// blindly.
#[derive(Debug, Clone)]
pub enum FileKind {
    Text { content: String },
}

impl FileKind {
    pub fn is_copyable(&self) -> bool {
        match self {
            FileKind::Text { .. } => true,
        }
    }
}

/// File node representation
///
/// `path` is the absolute path of the owning directory at creation time. It is
/// deliberately never recomputed: renaming the file leaves it stale, which
/// matches the documented point-in-time semantics of the field.
#[derive(Debug, Clone)]
pub struct FileNode {
    pub name: String,
    pub path: String,
    pub kind: FileKind,
}

impl FileNode {
    pub fn new(name: impl Into<String>, path: impl Into<String>, content: impl Into<String>) -> Self {
        FileNode {
            name: name.into(),
            path: path.into(),
            kind: FileKind::Text {
                content: content.into(),
            },
        }
    }

    /// Text content, when the kind carries any.
    pub fn content(&self) -> &str {
        match &self.kind {
            FileKind::Text { content } => content,
        }
    }
}

/// Directory node representation
///
/// `parent` is a non-owning back reference used for path computation and
/// upward navigation. Ownership runs strictly downward: files are held inline,
/// subdirectories by id into the tree store, both in insertion order.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    pub name: String,
    pub parent: Option<DirId>,
    pub files: Vec<FileNode>,
    pub children: Vec<DirId>,
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>, parent: Option<DirId>) -> Self {
        DirectoryNode {
            name: name.into(),
            parent,
            files: Vec::new(),
            children: Vec::new(),
        }
    }

    /// First file with the given name, in insertion order. Duplicate names are
    /// permitted by creation; lookups act on the first match only.
    pub fn find_file(&self, name: &str) -> Option<&FileNode> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn find_file_mut(&mut self, name: &str) -> Option<&mut FileNode> {
        self.files.iter_mut().find(|f| f.name == name)
    }
}
