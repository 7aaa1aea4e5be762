//! CLI Tooling
//!
//! Argument parsing plus the two front ends: the interactive dialoguer menu
//! and the non-interactive script runner. Both resolve user input into
//! [`Command`] values and hand them to the session.

use crate::config::{AppConfig, ConfigLoader};
use crate::error::{AppError, EngineError};
use crate::logging;
use crate::session::{Command, Session};
use clap::Parser;
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;
use tracing::info;

/// Arbor CLI - Interactive in-memory filesystem tree
#[derive(Parser)]
#[command(name = "arbor")]
#[command(about = "Interactive in-memory filesystem tree with favorites")]
pub struct Cli {
    /// Run commands from a script file instead of the interactive menu.
    /// One command per line: `choice[;arg[;arg]]`, `#` starts a comment.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Fold CLI logging flags into the loaded config.
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if self.no_color {
            config.logging.color = false;
        }
    }
}

/// Menu entries, in choice order 1..=13; exit is offered last.
const MENU_ITEMS: &[&str] = &[
    "Create file",
    "Create directory",
    "Rename file",
    "Display current directory contents",
    "Navigate into subdirectory",
    "Delete file",
    "Delete directory",
    "Go to parent directory",
    "Create new directory and move into it",
    "Copy file into a subdirectory",
    "Search files by substring",
    "Mark a file as favorite",
    "List favorite paths",
    "Exit",
];

/// Entry point for the binary: load config, set up logging, run the chosen
/// front end.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    if cli.no_color {
        owo_colors::set_override(false);
    }
    logging::init_logging(Some(&config.logging))?;

    let mut session = Session::from_config(&config);
    info!(root = %config.root_name, "session started");

    let outcome = match &cli.script {
        Some(path) => run_script(&mut session, path),
        None => run_interactive(&mut session, &config),
    };
    info!("session ended");
    outcome
}

/// Execute a script file: parse each line, dispatch, print the outcome.
/// Domain errors are reported and execution continues; `0` stops the run.
fn run_script(session: &mut Session, path: &std::path::Path) -> Result<(), AppError> {
    let content = std::fs::read_to_string(path)?;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Command::parse_script_line(line) {
            Ok(Command::Exit) => {
                println!("Exiting...");
                break;
            }
            Ok(command) => match session.dispatch(&command) {
                Ok(output) => println!("{}", output),
                Err(e) => println!("{}", e),
            },
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

/// The interactive menu loop.
fn run_interactive(session: &mut Session, config: &AppConfig) -> Result<(), AppError> {
    loop {
        println!("\n=== Current Directory: {} ===", session.cwd_path());
        let choice = Select::new()
            .with_prompt("Choice")
            .items(MENU_ITEMS)
            .default(0)
            .interact()
            .map_err(input_error)?;

        let command = match resolve_command(session, config, choice)? {
            Some(command) => command,
            // Confirmation declined or nothing to do; back to the menu.
            None => continue,
        };
        if command == Command::Exit {
            println!("Exiting...");
            return Ok(());
        }
        match session.dispatch(&command) {
            Ok(output) => println!("{}", output),
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt for the arguments of the selected menu entry and build the command.
/// Returns `None` when a confirmation was declined.
fn resolve_command(
    session: &Session,
    config: &AppConfig,
    choice: usize,
) -> Result<Option<Command>, AppError> {
    let command = match choice {
        0 => Command::CreateFile {
            name: prompt("File name")?,
            content: prompt_allow_empty("Content")?,
        },
        1 => Command::CreateDir {
            name: prompt("Directory name")?,
        },
        2 => Command::RenameFile {
            old: prompt("Old name")?,
            new: prompt("New name")?,
        },
        3 => Command::Display,
        4 => {
            let name = prompt("Directory name")?;
            if session.subdir_exists(&name)? {
                Command::Enter {
                    name,
                    create_missing: false,
                }
            } else {
                if !confirm(config, &format!("'{}' not found. Create?", name))? {
                    return Ok(None);
                }
                Command::CreateAndEnter { name }
            }
        }
        5 => {
            let name = prompt("File name")?;
            if !confirm(config, &format!("Delete file '{}'?", name))? {
                return Ok(None);
            }
            Command::DeleteFile { name }
        }
        6 => {
            let name = prompt("Directory name")?;
            if !confirm(config, &format!("Delete directory '{}'?", name))? {
                return Ok(None);
            }
            Command::DeleteDir { name }
        }
        7 => Command::Parent,
        8 => Command::CreateAndEnter {
            name: prompt("New directory name")?,
        },
        9 => Command::CopyFile {
            file: prompt("File name")?,
            dest: prompt("Target directory")?,
        },
        10 => Command::Search {
            pattern: prompt("Substring")?,
        },
        11 => Command::MarkFavorite {
            name: prompt("File name")?,
        },
        12 => Command::ListFavorites,
        13 => Command::Exit,
        // Select only offers the items above.
        other => return Err(AppError::Engine(EngineError::InvalidChoice(other.to_string()))),
    };
    Ok(Some(command))
}

fn prompt(label: &str) -> Result<String, AppError> {
    Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(input_error)
}

fn prompt_allow_empty(label: &str) -> Result<String, AppError> {
    Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)
}

/// Ask for confirmation, unless the config turns confirmations off.
fn confirm(config: &AppConfig, question: &str) -> Result<bool, AppError> {
    if !config.confirm_destructive {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(question)
        .interact()
        .map_err(input_error)
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::Input(format!("Failed to get user input: {}", e))
}
