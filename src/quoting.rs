//! Structural quoting check run before CSV tokenizing.
//!
//! The `csv` reader accepts stray quotes and lets an unclosed quoted field
//! run to the end of the input. Dictionary files must use strict RFC 4180
//! quoting instead: a `"` may only open a field, close it, or be doubled
//! inside it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("bare \" in non-quoted field at line {line}, column {column}")]
    BareQuote { line: u64, column: u64 },

    #[error("extraneous \" in quoted field at line {line}, column {column}")]
    ExtraneousQuote { line: u64, column: u64 },

    /// End of input reached inside a quoted field.
    #[error("quoted field opened at line {line} is never closed")]
    UnterminatedQuote { line: u64 },
}

#[derive(Clone, Copy)]
enum State {
    FieldStart,
    Unquoted,
    Quoted { opened_at: u64 },
    QuoteInQuoted { opened_at: u64 },
}

/// Reject input whose quoting does not follow strict CSV rules.
///
/// Lines and columns are 1-based; columns count bytes.
pub fn check_quoting(data: &[u8]) -> Result<(), QuoteError> {
    let mut state = State::FieldStart;
    let mut line = 1u64;
    let mut column = 0u64;

    for (i, &byte) in data.iter().enumerate() {
        column += 1;
        state = match (state, byte) {
            (State::FieldStart, b'"') => State::Quoted { opened_at: line },
            (State::FieldStart | State::Unquoted, b',') => State::FieldStart,
            (State::FieldStart | State::Unquoted, b'\n') => State::FieldStart,
            (State::FieldStart | State::Unquoted, b'"') => {
                return Err(QuoteError::BareQuote { line, column })
            }
            (State::FieldStart | State::Unquoted, _) => State::Unquoted,
            (State::Quoted { opened_at }, b'"') => State::QuoteInQuoted { opened_at },
            (State::Quoted { .. }, _) => state,
            (State::QuoteInQuoted { opened_at }, b'"') => State::Quoted { opened_at },
            (State::QuoteInQuoted { .. }, b',' | b'\n') => State::FieldStart,
            (State::QuoteInQuoted { .. }, b'\r')
                if matches!(data.get(i + 1), None | Some(b'\n')) =>
            {
                State::Unquoted
            }
            (State::QuoteInQuoted { .. }, _) => {
                return Err(QuoteError::ExtraneousQuote { line, column })
            }
        };
        if byte == b'\n' {
            line += 1;
            column = 0;
        }
    }

    match state {
        State::Quoted { opened_at } => Err(QuoteError::UnterminatedQuote { line: opened_at }),
        _ => Ok(()),
    }
}
