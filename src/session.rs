//! Session Controller
//!
//! Holds the cursor into the tree plus the favorites registry, and dispatches
//! one command at a time against the tree engine. Every outcome is a printable
//! string or a domain error; the interactive and scripted front ends both go
//! through [`Session::dispatch`].

use crate::error::EngineError;
use crate::favorites::Favorites;
use crate::format;
use crate::tree::Tree;
use crate::types::DirId;
use tracing::{info, warn};

/// One resolved menu operation, arguments included.
///
/// The numeric mapping mirrors the menu: 1 create file through 13 list
/// favorites, 0 exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateFile { name: String, content: String },
    CreateDir { name: String },
    RenameFile { old: String, new: String },
    Display,
    Enter { name: String, create_missing: bool },
    DeleteFile { name: String },
    DeleteDir { name: String },
    Parent,
    CreateAndEnter { name: String },
    CopyFile { file: String, dest: String },
    Search { pattern: String },
    MarkFavorite { name: String },
    ListFavorites,
    Exit,
}

impl Command {
    /// Parse one script line: a menu choice followed by `;`-separated
    /// arguments, e.g. `1;a.txt;hello world`. Blank lines and `#` comments are
    /// rejected here; the script runner skips them before parsing.
    pub fn parse_script_line(line: &str) -> Result<Command, EngineError> {
        let fields: Vec<&str> = line.split(';').map(str::trim).collect();
        let choice = fields.first().copied().unwrap_or("");
        let arg = |index: usize, what: &str| -> Result<String, EngineError> {
            fields
                .get(index)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .ok_or_else(|| {
                    EngineError::InvalidChoice(format!("{}: missing {}", choice, what))
                })
        };
        match choice {
            "1" => Ok(Command::CreateFile {
                name: arg(1, "file name")?,
                content: fields.get(2).copied().unwrap_or("").to_string(),
            }),
            "2" => Ok(Command::CreateDir { name: arg(1, "directory name")? }),
            "3" => Ok(Command::RenameFile {
                old: arg(1, "old name")?,
                new: arg(2, "new name")?,
            }),
            "4" => Ok(Command::Display),
            // Scripts have no one to answer the create-if-missing prompt, so
            // the offer is treated as accepted.
            "5" => Ok(Command::Enter {
                name: arg(1, "directory name")?,
                create_missing: true,
            }),
            "6" => Ok(Command::DeleteFile { name: arg(1, "file name")? }),
            "7" => Ok(Command::DeleteDir { name: arg(1, "directory name")? }),
            "8" => Ok(Command::Parent),
            "9" => Ok(Command::CreateAndEnter { name: arg(1, "directory name")? }),
            "10" => Ok(Command::CopyFile {
                file: arg(1, "file name")?,
                dest: arg(2, "destination directory")?,
            }),
            "11" => Ok(Command::Search { pattern: arg(1, "substring")? }),
            "12" => Ok(Command::MarkFavorite { name: arg(1, "file name")? }),
            "13" => Ok(Command::ListFavorites),
            "0" => Ok(Command::Exit),
            other => Err(EngineError::InvalidChoice(other.to_string())),
        }
    }
}

/// Session state: the tree, the current-directory cursor, and the favorites
/// registry, threaded explicitly rather than held as globals.
pub struct Session {
    tree: Tree,
    cursor: DirId,
    favorites: Favorites,
    listing_json: bool,
}

impl Session {
    pub fn new(root_name: &str) -> Self {
        let tree = Tree::new(root_name);
        let cursor = tree.root();
        Session {
            tree,
            cursor,
            favorites: Favorites::new(),
            listing_json: false,
        }
    }

    pub fn from_config(config: &crate::config::AppConfig) -> Self {
        let mut session = Session::new(&config.root_name);
        session.listing_json = config.listing_format == "json";
        session
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn cursor(&self) -> DirId {
        self.cursor
    }

    /// Absolute path of the current directory.
    pub fn cwd_path(&self) -> String {
        // The cursor only ever moves to live directories, and deletion only
        // targets children of the cursor.
        self.tree
            .path_of(self.cursor)
            .unwrap_or_else(|_| String::from("/"))
    }

    /// Whether the cursor directory has a subdirectory with this name.
    /// The interactive loop uses this to decide on the create-if-missing offer.
    pub fn subdir_exists(&self, name: &str) -> Result<bool, EngineError> {
        Ok(self.tree.find_subdir(self.cursor, name)?.is_some())
    }

    /// Execute one command against the current directory.
    pub fn dispatch(&mut self, command: &Command) -> Result<String, EngineError> {
        match command {
            Command::CreateFile { name, content } => {
                self.tree.create_file(self.cursor, name, content)?;
                info!(%name, "file created");
                Ok("File created.".to_string())
            }
            Command::CreateDir { name } => {
                self.tree.create_dir(self.cursor, name)?;
                info!(%name, "directory created");
                Ok("Directory created.".to_string())
            }
            Command::RenameFile { old, new } => {
                self.tree.rename_file(self.cursor, old, new)?;
                // The favorites registry still holds the old path, if any; the
                // rename gap is documented behavior.
                let old_path = format!("{}/{}", self.cwd_path(), old);
                if self.favorites.contains(&old_path) {
                    warn!(%old, %new, "renamed file leaves a stale favorite entry");
                }
                Ok("Renamed.".to_string())
            }
            Command::Display => {
                let listing = self.tree.list(self.cursor)?;
                if self.listing_json {
                    Ok(format::format_listing_json(&listing))
                } else {
                    Ok(format::format_listing_text(&listing))
                }
            }
            Command::Enter { name, create_missing } => {
                match self.tree.find_subdir(self.cursor, name)? {
                    Some(id) => {
                        self.cursor = id;
                        Ok(format!("Current Directory: {}", self.cwd_path()))
                    }
                    None if *create_missing => self.dispatch(&Command::CreateAndEnter {
                        name: name.clone(),
                    }),
                    None => Err(EngineError::DirectoryNotFound(name.clone())),
                }
            }
            Command::DeleteFile { name } => {
                let removed = self.tree.delete_file(self.cursor, name)?;
                // Exact-path cleanup for the current directory only; favorites
                // pointing at same-named files elsewhere are left alone.
                let path = format!("{}/{}", self.cwd_path(), name);
                self.favorites.remove(&path);
                info!(%name, removed, "file deleted");
                Ok("Deleted.".to_string())
            }
            Command::DeleteDir { name } => {
                let doomed_path = format!("{}/{}", self.cwd_path(), name);
                let removed = self.tree.delete_dir(self.cursor, name)?;
                let stranded = self.favorites.count_under(&doomed_path);
                if stranded > 0 {
                    warn!(
                        %name,
                        stranded, "cascade deletion stranded favorite entries"
                    );
                }
                info!(%name, removed, "directory deleted");
                Ok("Deleted.".to_string())
            }
            Command::Parent => match self.tree.parent_of(self.cursor)? {
                Some(parent) => {
                    self.cursor = parent;
                    Ok(format!("Current Directory: {}", self.cwd_path()))
                }
                None => Ok("Already at root.".to_string()),
            },
            Command::CreateAndEnter { name } => {
                let id = self.tree.create_dir(self.cursor, name)?;
                self.cursor = id;
                info!(%name, "directory created and entered");
                Ok(format!("Current Directory: {}", self.cwd_path()))
            }
            Command::CopyFile { file, dest } => {
                self.tree.copy_file(self.cursor, file, dest)?;
                info!(%file, %dest, "file copied");
                Ok("Copied.".to_string())
            }
            Command::Search { pattern } => {
                let hits = self.tree.search(self.cursor, pattern)?;
                Ok(format::format_search_results(&hits))
            }
            Command::MarkFavorite { name } => {
                if self.tree.find_file(self.cursor, name)?.is_none() {
                    return Err(EngineError::FileNotFound(name.clone()));
                }
                let path = format!("{}/{}", self.cwd_path(), name);
                self.favorites.mark(path);
                Ok("Marked favorite.".to_string())
            }
            Command::ListFavorites => {
                let paths: Vec<&str> = self.favorites.iter().collect();
                Ok(format::format_favorites(&paths))
            }
            Command::Exit => Ok("Exiting...".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch_ok(session: &mut Session, command: Command) -> String {
        session.dispatch(&command).unwrap()
    }

    #[test]
    fn test_create_navigate_search_scenario() {
        let mut session = Session::new("root");
        dispatch_ok(&mut session, Command::CreateDir { name: "docs".into() });
        dispatch_ok(
            &mut session,
            Command::Enter { name: "docs".into(), create_missing: false },
        );
        dispatch_ok(
            &mut session,
            Command::CreateFile { name: "a.txt".into(), content: "hello".into() },
        );
        dispatch_ok(&mut session, Command::Parent);
        let hits = session.tree().search(session.cursor(), "a").unwrap();
        assert_eq!(hits, vec!["/root/docs/a.txt"]);
    }

    #[test]
    fn test_favorite_removed_by_current_directory_delete() {
        let mut session = Session::new("root");
        dispatch_ok(
            &mut session,
            Command::CreateFile { name: "x".into(), content: "".into() },
        );
        dispatch_ok(&mut session, Command::MarkFavorite { name: "x".into() });
        assert!(session.favorites().contains("/root/x"));
        dispatch_ok(&mut session, Command::DeleteFile { name: "x".into() });
        assert!(session.favorites().is_empty());
    }

    #[test]
    fn test_nested_delete_leaves_stale_favorite() {
        let mut session = Session::new("root");
        dispatch_ok(&mut session, Command::CreateAndEnter { name: "docs".into() });
        dispatch_ok(
            &mut session,
            Command::CreateFile { name: "keep".into(), content: "".into() },
        );
        dispatch_ok(&mut session, Command::MarkFavorite { name: "keep".into() });
        dispatch_ok(&mut session, Command::Parent);
        dispatch_ok(&mut session, Command::DeleteDir { name: "docs".into() });
        // The favorites registry was keyed by value; the cascade never
        // touched it. Current behavior, not a bug to fix here.
        assert!(session.favorites().contains("/root/docs/keep"));
    }

    #[test]
    fn test_copy_into_subdirectory_scenario() {
        let mut session = Session::new("root");
        dispatch_ok(&mut session, Command::CreateDir { name: "sub".into() });
        dispatch_ok(
            &mut session,
            Command::CreateFile { name: "f".into(), content: "payload".into() },
        );
        dispatch_ok(
            &mut session,
            Command::CopyFile { file: "f".into(), dest: "sub".into() },
        );
        let tree = session.tree();
        let sub = tree.find_subdir(tree.root(), "sub").unwrap().unwrap();
        assert_eq!(tree.find_file(sub, "f").unwrap().unwrap().content(), "payload");
        assert!(tree.find_file(tree.root(), "f").unwrap().is_some());
    }

    #[test]
    fn test_parent_at_root_is_informational() {
        let mut session = Session::new("root");
        let before = session.cursor();
        let msg = dispatch_ok(&mut session, Command::Parent);
        assert_eq!(msg, "Already at root.");
        assert_eq!(session.cursor(), before);
    }

    #[test]
    fn test_enter_without_create_reports_not_found() {
        let mut session = Session::new("root");
        let err = session
            .dispatch(&Command::Enter { name: "ghost".into(), create_missing: false })
            .unwrap_err();
        assert_eq!(err, EngineError::DirectoryNotFound("ghost".into()));
        assert_eq!(session.cursor(), session.tree().root());
    }

    #[test]
    fn test_enter_with_create_missing_enters_new_directory() {
        let mut session = Session::new("root");
        dispatch_ok(
            &mut session,
            Command::Enter { name: "fresh".into(), create_missing: true },
        );
        assert_eq!(session.cwd_path(), "/root/fresh");
    }

    #[test]
    fn test_mark_favorite_requires_existing_file() {
        let mut session = Session::new("root");
        let err = session
            .dispatch(&Command::MarkFavorite { name: "ghost".into() })
            .unwrap_err();
        assert_eq!(err, EngineError::FileNotFound("ghost".into()));
    }

    #[test]
    fn test_parse_script_line_matrix() {
        assert_eq!(
            Command::parse_script_line("1;a.txt;hello world").unwrap(),
            Command::CreateFile { name: "a.txt".into(), content: "hello world".into() }
        );
        assert_eq!(
            Command::parse_script_line("3;old;new").unwrap(),
            Command::RenameFile { old: "old".into(), new: "new".into() }
        );
        assert_eq!(Command::parse_script_line("8").unwrap(), Command::Parent);
        assert_eq!(Command::parse_script_line("0").unwrap(), Command::Exit);
        assert!(matches!(
            Command::parse_script_line("42"),
            Err(EngineError::InvalidChoice(_))
        ));
        assert!(matches!(
            Command::parse_script_line("2"),
            Err(EngineError::InvalidChoice(_))
        ));
    }

    #[test]
    fn test_create_file_allows_empty_content() {
        assert_eq!(
            Command::parse_script_line("1;empty.txt").unwrap(),
            Command::CreateFile { name: "empty.txt".into(), content: "".into() }
        );
    }
}
