use std::fmt;
use std::io;
use std::path::Path;

use crate::error::{DictionaryError, ParseError};

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check the file permissions.",
        UnexpectedEof => "File appears truncated or corrupted.",
        _ => "Check that the file is readable.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Return an actionable hint for a dictionary error variant.
pub fn cli_hint(err: &DictionaryError) -> String {
    use DictionaryError::*;
    match err {
        FileAccess { path, source } => format_io_error("opening dictionary", path, source),
        Parse { path, source } => format!(
            "Error reading dictionary '{}': {}. {}",
            path.display(),
            source,
            parse_suggestion(source)
        ),
        Serialize(e) => format!("Error generating JSON: {e}. This is a bug."),
        Io(e) => format!("Error writing output: {e}"),
    }
}

fn parse_suggestion(err: &ParseError) -> &'static str {
    match err {
        ParseError::Quote(_) => {
            "Check the CSV quoting: quote whole fields and double any quote inside them."
        }
        ParseError::Csv(_) | ParseError::Read(_) => "Check that the file is a readable CSV file.",
    }
}

/// Convert a dictionary error into a CLI error with a hint.
pub fn dictionary_cli_error(err: DictionaryError) -> CliError {
    CliError {
        msg: cli_hint(&err),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_file_hint() {
        let err = DictionaryError::FileAccess {
            path: PathBuf::from("dictionary.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let cli = dictionary_cli_error(err);
        assert!(cli.msg.contains("'dictionary.csv'"));
        assert!(cli.msg.contains("Check that the file exists"));
        assert!(std::error::Error::source(&cli).is_some());
    }

    #[test]
    fn quoting_hint() {
        let err = DictionaryError::Parse {
            path: PathBuf::from("dictionary.csv"),
            source: ParseError::Quote(crate::quoting::QuoteError::UnterminatedQuote { line: 4 }),
        };
        let msg = cli_hint(&err);
        assert!(msg.contains("never closed"));
        assert!(msg.contains("Check the CSV quoting"));
    }
}
