use std::path::PathBuf;

/// Default dictionary file, resolved against the working directory.
pub const DEFAULT_DICTIONARY: &str = "dictionary.csv";

/// Runtime configuration for a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file holding `word,part_of_speech,meaning` rows.
    pub dictionary_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
        }
    }
}
