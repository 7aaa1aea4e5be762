//! Format directory listings, search results, and favorites as text.

use crate::tree::DirListing;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::{OwoColorize, Stream, Style};

/// Format a section heading with bold/underline. Respects NO_COLOR, TTY
/// detection, and the runtime override set by `--no-color`.
pub fn format_section_heading(title: &str) -> String {
    format!(
        "{}",
        title.if_supports_color(Stream::Stdout, |t| t.style(Style::new().bold().underline()))
    )
}

/// Format a directory listing as human-readable text.
pub fn format_listing_text(listing: &DirListing) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Directory: {}", listing.path))
    ));
    out.push_str(&format!("{}\n", format_section_heading("Files")));
    if listing.files.is_empty() {
        out.push_str("  (none)\n\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Name", "Path", "Content"]);
        for file in &listing.files {
            table.add_row(vec![
                file.name.clone(),
                file.path.clone(),
                file.content.clone(),
            ]);
        }
        out.push_str(&format!("{}\n\n", table));
    }
    out.push_str(&format!("{}\n", format_section_heading("Subdirectories")));
    if listing.dirs.is_empty() {
        out.push_str("  (none)\n");
    } else {
        for name in &listing.dirs {
            out.push_str(&format!("  {}\n", name));
        }
    }
    out
}

/// Format a directory listing as pretty JSON.
pub fn format_listing_json(listing: &DirListing) -> String {
    serde_json::to_string_pretty(listing).unwrap_or_else(|_| "{}".to_string())
}

/// Format recursive search hits. An empty result is a distinct, non-error
/// outcome.
pub fn format_search_results(hits: &[String]) -> String {
    if hits.is_empty() {
        return "No files found.".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format_section_heading(&format!("Found {} file(s)", hits.len()))
    ));
    for path in hits {
        out.push_str(&format!("  {}\n", path));
    }
    out
}

/// Format the favorites registry listing.
pub fn format_favorites(paths: &[&str]) -> String {
    if paths.is_empty() {
        return "No favorites.".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!("{}\n", format_section_heading("Favorites")));
    for path in paths {
        out.push_str(&format!("  {}\n", path));
    }
    out
}
