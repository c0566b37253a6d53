//! Dictionary lookup over a flat CSV of `word,part_of_speech,meaning` rows.
//!
//! [`load_dictionary`] groups rows into [`Entry`] values, [`find_entry`]
//! matches a word ignoring case and [`present`] prints the result as
//! indented JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod io_utils;
pub mod loader;
pub mod lookup;
pub mod normalize;
pub mod part_of_speech;
pub mod presenter;
pub mod quoting;
pub mod types;

use std::io::Write;

pub use config::Config;
pub use error::{DictionaryError, ParseError};
pub use loader::{load_dictionary, load_from_reader};
pub use lookup::find_entry;
pub use normalize::normalize_meaning;
pub use presenter::{not_found_message, present, render_entry, USAGE};
pub use types::{Entry, Meaning, RawRecord};

/// Load the dictionary named by `config`, look up `word` and write the
/// result to `out`.
pub fn lookup_word<W: Write>(
    config: &Config,
    word: &str,
    out: &mut W,
) -> Result<(), DictionaryError> {
    let entries = load_dictionary(&config.dictionary_path)?;
    present(out, find_entry(&entries, word), word)
}
