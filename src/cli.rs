use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DEFAULT_DICTIONARY};

/// Look up a word in a CSV dictionary and print it as JSON.
#[derive(Parser, Debug)]
#[command(name = "cli-dictionary", version)]
pub struct Args {
    /// Word to look up (case-insensitive)
    #[arg(allow_hyphen_values = true)]
    pub word: Option<String>,
    /// Dictionary CSV with `word,part_of_speech,meaning` rows
    #[arg(long, default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,
    /// Arguments after the word; accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config {
            dictionary_path: args.dictionary.clone(),
        }
    }
}
