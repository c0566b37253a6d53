//! Console rendering of lookup results.

use std::io::Write;

use crate::error::DictionaryError;
use crate::types::Entry;

/// Printed when no word is given.
pub const USAGE: &str = "Usage: cli-dictionary <word>";

/// Render `entry` as JSON indented with two spaces.
pub fn render_entry(entry: &Entry) -> Result<String, DictionaryError> {
    Ok(serde_json::to_string_pretty(entry)?)
}

pub fn not_found_message(word: &str) -> String {
    format!("'{word}' not found in the dictionary.")
}

/// Write the rendered entry, or the not-found message when `entry` is
/// `None`, followed by a newline.
pub fn present<W: Write>(
    out: &mut W,
    entry: Option<&Entry>,
    word: &str,
) -> Result<(), DictionaryError> {
    match entry {
        Some(entry) => {
            let json = render_entry(entry)?;
            writeln!(out, "{json}")?;
        }
        None => writeln!(out, "{}", not_found_message(word))?,
    }
    out.flush()?;
    Ok(())
}
