use std::path::PathBuf;

use thiserror::Error;

use crate::quoting::QuoteError;

#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be opened.
    #[error("cannot open dictionary '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not structurally valid CSV.
    #[error("malformed dictionary '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// An entry could not be rendered as JSON.
    #[error("cannot render entry: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Propagated I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a dictionary file could not be tokenized.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Reading failed after the file was opened.
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
}
