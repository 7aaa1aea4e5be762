//! Arbor CLI Binary
//!
//! Interactive menu over the in-memory filesystem tree. The whole tree lives
//! and dies with the process; nothing is persisted.

use arbor::tooling::cli::{run, Cli};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
